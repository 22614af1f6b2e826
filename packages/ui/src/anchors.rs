//! Identity anchors: connected Gmail and LinkedIn accounts.

use api::models::{Anchor, Provider};
use dioxus::prelude::*;

use crate::auth::{use_app, ConnectButton};
use crate::icons::{FaGoogle, FaLinkedin};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::score_card::use_score;
use crate::Icon;

#[component]
pub fn AnchorList() -> Element {
    let app = use_app();
    let mut score = use_score();
    let mut notifications = use_notifications();
    let mut busy = use_signal(|| Option::<Provider>::None);

    let client = app.client();
    let mut anchors = use_resource(move || {
        let client = client.clone();
        async move { client.identity().anchors().await }
    });

    // Disconnecting changes the score, so both are re-fetched
    let disconnect = use_callback(move |provider: Provider| {
        let client = app.client();
        spawn(async move {
            busy.set(Some(provider));
            match client.identity().disconnect(provider).await {
                Ok(()) => {
                    notify(
                        &mut notifications,
                        NoticeLevel::Info,
                        &format!("{} disconnected", provider),
                    );
                    anchors.restart();
                    score.refresh();
                }
                Err(e) => notify(&mut notifications, NoticeLevel::Error, &e.user_message()),
            }
            busy.set(None);
        });
    });

    let content = match &*anchors.read() {
        None => rsx! { p { class: "view-muted", "Loading anchors..." } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { p { class: "form-error", "{message}" } }
        }
        Some(Ok(resp)) => {
            let rows: Vec<(Provider, Option<Anchor>)> = Provider::ALL
                .iter()
                .map(|p| (*p, resp.find(*p).cloned()))
                .collect();
            rsx! {
                for (provider, anchor) in rows {
                    AnchorRow {
                        key: "{provider}",
                        provider,
                        anchor,
                        busy: busy() == Some(provider),
                        on_disconnect: move |p| disconnect.call(p),
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "card",
            h2 { class: "view-section-title", "Identity anchors" }
            p {
                class: "view-muted",
                "Link long-lived accounts to raise your EP Score."
            }
            {content}
        }
    }
}

#[component]
fn AnchorRow(
    provider: Provider,
    anchor: Option<Anchor>,
    busy: bool,
    on_disconnect: EventHandler<Provider>,
) -> Element {
    let icon = match provider {
        Provider::Gmail => rsx! { Icon { icon: FaGoogle, width: 16, height: 16 } },
        Provider::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: 16, height: 16 } },
    };

    let Some(anchor) = anchor else {
        return rsx! {
            div {
                class: "anchor-row",
                span { class: "anchor-icon", {icon} }
                div {
                    class: "anchor-details",
                    strong { "{provider}" }
                    span { class: "view-muted", "Not connected" }
                }
                ConnectButton { provider, class: "btn btn-primary" }
            }
        };
    };

    let email = anchor.email_address.unwrap_or_default();
    let details = [
        anchor.account_created_at.map(|d| format!("since {d}")),
        anchor.connection_count.map(|n| format!("{n} connections")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    rsx! {
        div {
            class: "anchor-row anchor-row--connected",
            span { class: "anchor-icon", {icon} }
            div {
                class: "anchor-details",
                strong { "{provider}" }
                span { "{email}" }
                if !details.is_empty() {
                    span { class: "view-muted", "{details}" }
                }
            }
            button {
                class: "btn btn-ghost",
                disabled: busy,
                onclick: move |_| on_disconnect.call(provider),
                "Disconnect"
            }
        }
    }
}
