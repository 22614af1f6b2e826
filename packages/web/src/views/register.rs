//! Registration page view with email/password form and optional invite code.

use api::models::normalize_code;
use dioxus::prelude::*;
use ui::{use_app, PublicRoute};

use crate::Route;

/// Inline state of the invite code field.
#[derive(Clone, Debug, PartialEq)]
enum CodeCheck {
    Unchecked,
    Checking,
    Valid(Option<String>),
    Invalid(String),
}

/// Register page component. `code` comes from `/register?code=...`.
#[component]
pub fn Register(code: String) -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut invite_code = use_signal(|| code.clone());
    let mut code_check = use_signal(|| CodeCheck::Unchecked);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let validate_client = app.client();
    let validate = use_callback(move |_: ()| {
        let raw = invite_code();
        if raw.trim().is_empty() {
            code_check.set(CodeCheck::Unchecked);
            return;
        }
        let code = match normalize_code(&raw) {
            Ok(code) => code,
            Err(e) => {
                code_check.set(CodeCheck::Invalid(e.to_string()));
                return;
            }
        };
        let client = validate_client.clone();
        spawn(async move {
            code_check.set(CodeCheck::Checking);
            match client.invites().validate(&code).await {
                Ok(resp) if resp.valid => code_check.set(CodeCheck::Valid(resp.code_type)),
                Ok(resp) => code_check.set(CodeCheck::Invalid(
                    resp.error.unwrap_or_else(|| "Invalid invite code".to_string()),
                )),
                Err(e) => code_check.set(CodeCheck::Invalid(e.user_message())),
            }
        });
    });

    // A code carried in from the invite overlay is checked straight away
    use_hook(move || {
        if !code.trim().is_empty() {
            validate.call(());
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = app.session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            let code = match invite_code().trim() {
                "" => None,
                raw => match normalize_code(raw) {
                    Ok(code) => Some(code),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        return;
                    }
                },
            };

            loading.set(true);
            match session.register(&e, &p, code.as_deref()).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    let code_note = match code_check() {
        CodeCheck::Unchecked => rsx! {},
        CodeCheck::Checking => rsx! { p { class: "view-muted", "Checking code..." } },
        CodeCheck::Valid(kind) => {
            let note = match kind {
                Some(kind) => format!("Valid {kind} invite"),
                None => "Valid invite".to_string(),
            };
            rsx! { p { class: "form-ok", "{note}" } }
        }
        CodeCheck::Invalid(message) => rsx! { p { class: "form-error", "{message}" } },
    };

    rsx! {
        PublicRoute {
            div {
                class: "auth-page",

                h1 { class: "view-title", "Create your account" }
                p { class: "view-muted", "Start at an EP Score of 20 and connect anchors to climb." }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "text-input",
                        r#type: "email",
                        placeholder: "Email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "text-input",
                        r#type: "password",
                        placeholder: "Password (min 8 characters)",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    input {
                        class: "text-input",
                        r#type: "password",
                        placeholder: "Confirm password",
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    input {
                        class: "text-input code-input",
                        r#type: "text",
                        placeholder: "Invite code (optional)",
                        value: invite_code(),
                        oninput: move |evt: FormEvent| {
                            invite_code.set(evt.value().to_uppercase());
                            code_check.set(CodeCheck::Unchecked);
                        },
                        onblur: move |_| validate.call(()),
                    }

                    {code_note}

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "view-muted",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
