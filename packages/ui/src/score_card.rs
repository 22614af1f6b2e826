//! EP Score card.

use api::models::{ScoreResponse, MAX_SCORE};
use api::ApiError;
use dioxus::prelude::*;

use crate::auth::use_app;

/// Score fetched once per page and shared by the score card, the anchor list
/// and the Rank Guard panel.
#[derive(Clone, Copy)]
pub struct ScoreContext {
    pub score: Resource<Result<ScoreResponse, ApiError>>,
}

impl ScoreContext {
    /// Latest successfully fetched score.
    pub fn current(&self) -> Option<ScoreResponse> {
        self.score.read().as_ref().and_then(|r| r.as_ref().ok()).copied()
    }

    pub fn refresh(&mut self) {
        self.score.restart();
    }
}

/// Fetch the score and provide it to descendants.
pub fn use_score_provider() -> ScoreContext {
    let app = use_app();
    let score = use_resource(move || {
        let client = app.client();
        async move { client.user().score().await }
    });
    use_context_provider(|| ScoreContext { score })
}

pub fn use_score() -> ScoreContext {
    use_context::<ScoreContext>()
}

#[component]
pub fn ScoreCard() -> Element {
    let score = use_score();

    let body = match &*score.score.read() {
        None => rsx! { p { class: "view-muted", "Loading score..." } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { p { class: "form-error", "{message}" } }
        }
        Some(Ok(resp)) => {
            let clearance = resp.clearance();
            let clearance_class = format!("clearance clearance--{}", clearance.label().to_lowercase());
            let trust_score = resp.trust_score;
            let percent = resp.trust_score.min(MAX_SCORE);
            let rows = resp.breakdown.rows();
            rsx! {
                div {
                    class: "score-headline",
                    span { class: "score-value", "{trust_score}" }
                    span { class: "score-max", "/ {MAX_SCORE}" }
                    span { class: "{clearance_class}", "{clearance}" }
                }
                div {
                    class: "meter",
                    div { class: "meter-fill", style: "width: {percent}%" }
                }
                table {
                    class: "score-breakdown",
                    for (label, earned, available) in rows {
                        tr {
                            class: if earned > 0 { "earned" } else { "missing" },
                            td { "{label}" }
                            td { class: "points", "+{earned} / {available}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "card",
            h2 { class: "view-section-title", "EP Score" }
            {body}
        }
    }
}
