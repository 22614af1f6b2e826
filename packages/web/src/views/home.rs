use dioxus::prelude::*;
use ui::use_auth;
use ui::views::DashboardView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    if auth().is_authenticated() {
        return rsx! { DashboardView {} };
    }

    rsx! {
        div {
            class: "hero",
            h1 { class: "view-title", "Prove you're a real person, not a bot." }
            p {
                class: "view-muted",
                "Connect accounts you've had for years, earn an EP Score, and carry it "
                "anywhere as a signed Pawn Pass."
            }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Register { code: String::new() }, "Get started" }
                Link { class: "btn btn-ghost", to: Route::Join {}, "Join the waitlist" }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ui::ProtectedRoute {
            DashboardView {}
        }
    }
}
