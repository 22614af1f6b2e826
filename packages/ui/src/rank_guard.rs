//! Rank Guard panel: generate, copy, list and revoke Pawn Passes.

use api::credential::{expiry_label_from_now, format_preview, is_expired_now, generate_prompt, truncate_token, CredentialExport};
use api::models::{Badge, GeneratedBadge};
use dioxus::prelude::*;

use crate::auth::use_app;
use crate::clipboard::copy_to_clipboard;
use crate::icons::{FaChessPawn, FaCopy};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::score_card::use_score;
use crate::Icon;

#[component]
pub fn RankGuardPanel() -> Element {
    let app = use_app();
    let score = use_score();
    let mut notifications = use_notifications();
    let mut generated = use_signal(|| Option::<GeneratedBadge>::None);
    let mut generating = use_signal(|| false);

    let client = app.client();
    let mut badges = use_resource(move || {
        let client = client.clone();
        async move { client.badges().list().await }
    });

    let generate_client = app.client();
    let handle_generate = move |_| {
        let client = generate_client.clone();
        spawn(async move {
            generating.set(true);
            match client.badges().generate().await {
                Ok(badge) => {
                    generated.set(Some(badge));
                    badges.restart();
                    notify(&mut notifications, NoticeLevel::Success, "Pawn Pass generated");
                }
                Err(e) => notify(&mut notifications, NoticeLevel::Error, &e.user_message()),
            }
            generating.set(false);
        });
    };

    let handle_copy = move |_| {
        let Some(badge) = generated() else { return };
        let text = CredentialExport::from_badge(&badge).to_clipboard_text();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => notify(&mut notifications, NoticeLevel::Success, "Credential copied"),
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    notify(&mut notifications, NoticeLevel::Error, "Could not copy to clipboard");
                }
            }
        });
    };

    let revoke_client = app.client();
    let revoke = use_callback(move |badge_token: String| {
        let client = revoke_client.clone();
        spawn(async move {
            match client.badges().revoke(&badge_token, None).await {
                Ok(()) => {
                    notify(&mut notifications, NoticeLevel::Info, "Pawn Pass revoked");
                    badges.restart();
                }
                Err(e) => notify(&mut notifications, NoticeLevel::Error, &e.user_message()),
            }
        });
    });

    let prompt = match score.current() {
        Some(s) => generate_prompt(s.trust_score),
        None => "Loading your EP Score...".to_string(),
    };
    let preview = generated().map(|b| format_preview(&b));

    let list = match &*badges.read() {
        None => rsx! { p { class: "view-muted", "Loading passes..." } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { p { class: "form-error", "{message}" } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "view-muted", "No active passes." } },
        Some(Ok(list)) => {
            let list = list.clone();
            rsx! {
                ul {
                    class: "badge-list",
                    for badge in list {
                        BadgeRow {
                            key: "{badge.badge_token}",
                            badge,
                            on_revoke: move |token| revoke.call(token),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "card",
            h2 {
                class: "view-section-title",
                Icon { icon: FaChessPawn, width: 16, height: 16 }
                " Rank Guard"
            }
            p { class: "view-muted", "{prompt}" }

            button {
                class: "btn btn-primary",
                disabled: generating() || score.current().is_none(),
                onclick: handle_generate,
                if generating() { "Generating..." } else { "Generate Pawn Pass" }
            }

            if let Some(lines) = preview {
                div {
                    class: "badge-preview",
                    pre {
                        for line in lines {
                            "{line}\n"
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: handle_copy,
                        Icon { icon: FaCopy, width: 14, height: 14 }
                        " Copy full credential"
                    }
                }
            }

            h3 { class: "view-subtitle", "Your passes" }
            {list}
        }
    }
}

#[component]
fn BadgeRow(badge: Badge, on_revoke: EventHandler<String>) -> Element {
    let token = truncate_token(&badge.badge_token, 6);
    let label = expiry_label_from_now(badge.expires_at);
    let expired = is_expired_now(badge.expires_at);
    let full_token = badge.badge_token.clone();
    let trust_score = badge.trust_score;

    rsx! {
        li {
            class: if expired { "badge-row badge-row--expired" } else { "badge-row" },
            code { "{token}" }
            span { class: "badge-score", "EP {trust_score}" }
            span { class: "view-muted", "{label}" }
            button {
                class: "btn btn-ghost",
                onclick: move |_| on_revoke.call(full_token.clone()),
                "Revoke"
            }
        }
    }
}
