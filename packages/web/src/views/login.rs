//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_app, PublicRoute};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
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
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match session.login(&e, &p).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        PublicRoute {
            div {
                class: "auth-page",

                h1 { class: "view-title", "Welcome back" }
                p { class: "view-muted", "Sign in to manage your EP Score and Pawn Passes." }

                form {
                    onsubmit: handle_login,
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
                        placeholder: "Password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "view-muted",
                    "No account yet? "
                    Link { to: Route::Register { code: String::new() }, "Create one" }
                }
            }
        }
    }
}
