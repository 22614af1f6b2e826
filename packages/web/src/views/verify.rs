//! Public landing page for a shared Pawn Pass.

use api::credential::truncate_token;
use dioxus::prelude::*;

#[component]
pub fn Verify(badge_token: String) -> Element {
    let short = truncate_token(&badge_token, 8);

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "view-title", "Pawn Pass" }
            p { class: "view-muted", "Credential" }
            code { class: "verify-token", title: "{badge_token}", "{short}" }
            p {
                "This pass was issued by En Passant and asserts the holder's EP Score at the "
                "time of issue. Platforms verify it by checking the signature of the full "
                "credential the holder shares with them."
            }
        }
    }
}
