//! Typed request/response schemas for every backend endpoint.
//!
//! Responses are decoded at the client boundary; a body that does not match
//! its schema becomes an [`ApiError`](crate::ApiError) of kind `Decode` rather
//! than a half-populated value.

mod badge;
mod identity;
mod invite;
mod listing;
mod score;
mod user;
mod waitlist;

pub use badge::{Badge, BadgePayload, BadgesResponse, GenerateBadgeResponse, GeneratedBadge, RevokeBadgeRequest};
pub use identity::{Anchor, AnchorsResponse, Provider};
pub use invite::{
    normalize_code, BetaStatus, InviteCode, InviteCodeError, IssuedCode, MyCodesResponse,
    RedeemResponse, ValidateResponse,
};
pub use listing::{
    Ceiling, CeilingsResponse, Listing, ListingFilters, ListingResponse, ListingsResponse,
    NewListing, OcrResult, Receipt, ReceiptUploadResponse, ReceiptVerifyResponse,
    VerificationStatus,
};
pub use score::{
    Clearance, ScoreBreakdown, ScoreResponse, BASE_POINTS, EDU_BONUS_POINTS, GMAIL_POINTS,
    LINKEDIN_POINTS, MAX_SCORE,
};
pub use user::{AuthResponse, BetaGrant, MeResponse, User};
pub use waitlist::{EnlistRequest, WaitlistStats};

use serde::{Deserialize, Deserializer};

/// Accept an identifier sent either as a JSON string or a number.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(serde_json::Number),
    }
    Ok(match Id::deserialize(d)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
