//! Beta access gate around routed content.

use api::gate::{decide, overlay_action, GateDecision, GateInput, OverlayAction};
use dioxus::prelude::*;

use crate::auth::{use_app, use_auth, use_beta_access, Spinner};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::views::ModalOverlay;

/// Renders `children` normally, as a spinner, or blurred under the invite
/// overlay, depending on `path` and the current session.
#[component]
pub fn AccessGate(path: String, children: Element) -> Element {
    let app = use_app();
    let auth = use_auth();
    let beta = use_beta_access();
    let session = auth();

    let input = GateInput {
        path: &path,
        session_pending: session.is_pending(),
        authenticated: session.is_authenticated(),
        local_flag: app.session.client().storage().beta_access(),
        server: (beta.status)(),
    };

    match decide(&input, app.gate_policy()) {
        GateDecision::Render => rsx! { {children} },
        GateDecision::Loading => rsx! { Spinner {} },
        GateDecision::Blur => rsx! {
            div {
                class: "gate-blurred",
                "aria-hidden": "true",
                "inert": "true",
                {children}
            }
            ModalOverlay {
                InviteOverlay {}
            }
        },
    }
}

/// Invite code form shown over gated content.
#[component]
pub fn InviteOverlay() -> Element {
    let app = use_app();
    let auth = use_auth();
    let nav = use_navigator();
    let mut beta = use_beta_access();
    let mut notifications = use_notifications();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let action = match overlay_action(auth().is_authenticated(), &code()) {
            Ok(action) => action,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        match action {
            OverlayAction::RedirectToRegister(url) => {
                nav.push(url);
            }
            OverlayAction::Redeem(code) => {
                let session = app.session.clone();
                spawn(async move {
                    submitting.set(true);
                    match session.redeem_invite_code(&code).await {
                        Ok(_) => {
                            beta.invalidate();
                            notify(&mut notifications, NoticeLevel::Success, "Welcome to the beta!");
                        }
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    submitting.set(false);
                });
            }
        }
    };

    rsx! {
        form {
            class: "invite-overlay",
            onsubmit: handle_submit,

            h2 { class: "view-section-title", "En Passant is invite-only" }
            p {
                class: "view-muted",
                "Enter an invite code to unlock the beta."
            }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            input {
                class: "text-input code-input",
                r#type: "text",
                placeholder: "EP-XXXXX-XXXXX",
                autocomplete: "off",
                value: code(),
                oninput: move |evt: FormEvent| code.set(evt.value().to_uppercase()),
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Checking..." } else { "Unlock" }
            }

            if !auth().is_authenticated() {
                p {
                    class: "view-muted",
                    "Already a member? "
                    Link { to: "/login", "Sign in" }
                }
            }
        }
    }
}
