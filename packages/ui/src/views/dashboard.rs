use dioxus::prelude::*;

use crate::anchors::AnchorList;
use crate::invite_codes::InviteCodesPanel;
use crate::rank_guard::RankGuardPanel;
use crate::score_card::{use_score_provider, ScoreCard};

/// Signed-in home: score, anchors, Rank Guard and invite codes.
#[component]
pub fn DashboardView() -> Element {
    use_score_provider();

    rsx! {
        div {
            class: "view-page dashboard",
            h1 { class: "view-title", "Dashboard" }
            div {
                class: "dashboard-grid",
                ScoreCard {}
                AnchorList {}
                RankGuardPanel {}
                InviteCodesPanel {}
            }
        }
    }
}
