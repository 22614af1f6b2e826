//! Waitlist sign-up for visitors without an invite code.

use api::models::EnlistRequest;
use dioxus::prelude::*;
use ui::use_app;

use crate::Route;

const VERTICALS: [(&str, &str); 4] = [
    ("tickets", "Ticket resale"),
    ("dating", "Dating"),
    ("marketplaces", "Marketplaces"),
    ("ai-agents", "AI agents"),
];

#[component]
pub fn Join() -> Element {
    let app = use_app();
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut vertical = use_signal(|| VERTICALS[0].0.to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut joined = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let stats_client = app.client();
    let mut stats = use_resource(move || {
        let client = stats_client.clone();
        async move { client.waitlist().stats().await.ok() }
    });

    let handle_join = move |evt: FormEvent| {
        evt.prevent_default();
        let client = app.client();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            let phone = phone().trim().to_string();
            let request = EnlistRequest {
                email: e,
                phone: (!phone.is_empty()).then_some(phone),
                source: "join".to_string(),
                vertical: vertical(),
            };

            loading.set(true);
            match client.waitlist().enlist(&request).await {
                Ok(()) => {
                    joined.set(true);
                    stats.restart();
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    let total = stats().flatten().map(|s| s.total);

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "view-title", "Join the waitlist" }
            if let Some(total) = total {
                p { class: "view-muted", "{total} people are already waiting." }
            }

            if joined() {
                div {
                    class: "form-ok",
                    "You're on the list. We'll email you an invite code when a spot opens."
                }
            } else {
                form {
                    onsubmit: handle_join,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "text-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        class: "text-input",
                        r#type: "tel",
                        placeholder: "Phone (optional)",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }
                    select {
                        class: "text-input",
                        value: vertical(),
                        onchange: move |evt: FormEvent| vertical.set(evt.value()),
                        for (value, label) in VERTICALS {
                            option { value: value, "{label}" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Joining..." } else { "Join" }
                    }
                }
            }

            p {
                class: "view-muted",
                "Have a code? "
                Link { to: Route::Register { code: String::new() }, "Register" }
            }
        }
    }
}
