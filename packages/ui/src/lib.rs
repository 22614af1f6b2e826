//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGoogle, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{make_session, make_store, AppClient, AppSession, PlatformStore};

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{
    use_app, use_auth, use_beta_access, use_expiry_redirect, AppContext, AuthProvider, BetaAccess, ConnectButton,
    LogoutButton, ProtectedRoute, PublicRoute, SessionExpiry, Spinner,
};

mod access_gate;
pub use access_gate::{AccessGate, InviteOverlay};

pub mod notifications;
pub use notifications::{notify, use_notifications, NoticeLevel, NotificationTray, Notifications};

mod clipboard;
pub use clipboard::{copy_to_clipboard, redirect_external};

mod score_card;
pub use score_card::{use_score, use_score_provider, ScoreCard, ScoreContext};

mod anchors;
pub use anchors::AnchorList;

mod rank_guard;
pub use rank_guard::RankGuardPanel;

mod invite_codes;
pub use invite_codes::InviteCodesPanel;

mod face_value;
pub use face_value::FaceValueInput;
