use dioxus::prelude::*;

use ui::{use_expiry_redirect, AccessGate, AuthProvider, Navbar, NotificationTray};
use views::{
    AuthError, Dashboard, Home, Join, Listings, Login, NewListing, NotFound, Privacy, Register,
    Terms, Verify,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Gated)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register?:code")]
        Register { code: String },
        #[route("/join")]
        Join {},
        #[route("/auth/error?:message")]
        AuthError { message: String },
        #[route("/privacy")]
        Privacy {},
        #[route("/terms")]
        Terms {},
        #[route("/verify/:badge_token")]
        Verify { badge_token: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/listings")]
        Listings {},
        #[route("/listings/new")]
        NewListing {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Compiled-in client configuration; `EP_*` variables override it.
const CONFIG_TOML: &str = include_str!("../enpassant.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| api::config::load_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Shell for every page: navbar, beta gate and notifications.
#[component]
fn Gated() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    use_expiry_redirect();

    rsx! {
        Navbar {}
        main {
            class: "app-main",
            AccessGate {
                path,
                Outlet::<Route> {}
            }
        }
        NotificationTray {}
    }
}
