//! Pages with no data: privacy, terms, OAuth error, not found.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Privacy() -> Element {
    rsx! {
        div {
            class: "view-page prose",
            h1 { class: "view-title", "Privacy" }
            p {
                "En Passant stores the email and password you register with, and for each "
                "connected identity anchor the provider address, account age and connection "
                "count. Mailbox contents and contacts are never read."
            }
            p {
                "Pawn Passes contain your EP Score and an opaque identifier. A verifier learns "
                "nothing else about you."
            }
        }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        div {
            class: "view-page prose",
            h1 { class: "view-title", "Terms" }
            p {
                "Tickets listed on En Passant may not be priced above face value. Listings are "
                "verified against receipts or section ceilings and may be rejected."
            }
            p { "Pawn Passes are personal. Sharing or reselling a pass revokes it." }
        }
    }
}

/// Landing target for failed OAuth connects: `/auth/error?message=...`.
#[component]
pub fn AuthError(message: String) -> Element {
    let message = if message.trim().is_empty() {
        "The account could not be connected.".to_string()
    } else {
        message
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "view-title", "Connection failed" }
            div { class: "form-error", "{message}" }
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            h1 { class: "view-title", "Page not found" }
            p { class: "view-muted", "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
