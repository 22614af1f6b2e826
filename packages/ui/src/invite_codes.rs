//! The signed-in user's own invite codes.

use api::models::InviteCode;
use dioxus::prelude::*;

use crate::auth::use_app;
use crate::clipboard::copy_to_clipboard;
use crate::icons::FaCopy;
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::Icon;

#[component]
pub fn InviteCodesPanel() -> Element {
    let app = use_app();
    let client = app.client();
    let codes = use_resource(move || {
        let client = client.clone();
        async move { client.invites().my_codes().await }
    });

    let body = match &*codes.read() {
        None => rsx! { p { class: "view-muted", "Loading invite codes..." } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { p { class: "form-error", "{message}" } }
        }
        Some(Ok(resp)) => {
            let summary = format!(
                "{} of {} codes available, {} used",
                resp.available_codes, resp.total_codes, resp.used_codes
            );
            let list = resp.codes.clone();
            rsx! {
                p { class: "view-muted", "{summary}" }
                ul {
                    class: "invite-list",
                    for invite in list {
                        InviteRow { key: "{invite.code}", invite }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "card",
            h2 { class: "view-section-title", "Invite friends" }
            {body}
        }
    }
}

#[component]
fn InviteRow(invite: InviteCode) -> Element {
    let mut notifications = use_notifications();
    let share = invite.share_url.clone().unwrap_or_else(|| invite.code.clone());
    let status = match (&invite.used_by_email, invite.is_available) {
        (Some(email), _) => format!("Used by {email}"),
        (None, true) => "Available".to_string(),
        (None, false) => "Used".to_string(),
    };
    let code = invite.code.clone();

    let handle_copy = move |_| {
        let share = share.clone();
        spawn(async move {
            match copy_to_clipboard(&share).await {
                Ok(()) => notify(&mut notifications, NoticeLevel::Success, "Invite link copied"),
                Err(_) => notify(&mut notifications, NoticeLevel::Error, "Could not copy to clipboard"),
            }
        });
    };

    rsx! {
        li {
            class: if invite.is_available { "invite-row" } else { "invite-row invite-row--used" },
            code { "{code}" }
            span { class: "view-muted", "{status}" }
            if invite.is_available {
                button {
                    class: "btn btn-ghost",
                    title: "Copy invite link",
                    onclick: handle_copy,
                    Icon { icon: FaCopy, width: 14, height: 14 }
                }
            }
        }
    }
}
