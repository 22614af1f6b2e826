use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let session = auth();
    let email = session.user.as_ref().map(|u| u.display_name().to_string());

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "En Passant" }
            div {
                class: "navbar-links",
                if let Some(email) = email {
                    Link { to: "/dashboard", "Dashboard" }
                    Link { to: "/listings", "Listings" }
                    span { class: "navbar-user", "{email}" }
                    LogoutButton { class: "btn btn-ghost" }
                } else if !session.is_pending() {
                    Link { to: "/login", "Sign in" }
                    Link { class: "btn btn-primary", to: "/register", "Get started" }
                }
            }
        }
    }
}
