//! # Ticket listings, receipts and section ceilings
//!
//! The marketplace caps resale prices at face value. Face value comes from an
//! OCR'd receipt when one was verified, otherwise from the event's section
//! ceiling. The server decides every listing's fate; the client only mirrors
//! the rule for feedback (see [`crate::pricing`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::string_or_number;

/// Server-side price verification outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    ManualReview,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Pending verification",
            VerificationStatus::Verified => "Verified at face value",
            VerificationStatus::ManualReview => "In manual review",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}

/// A marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default = "one")]
    pub quantity: u8,
    pub asking_price_cents: u64,
    #[serde(default)]
    pub face_value_cents: Option<u64>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

fn one() -> u8 {
    1
}

/// Body of `POST /api/listings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub event_id: String,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<String>,
    pub quantity: u8,
    pub asking_price_cents: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
}

/// Query filters of `GET /api/listings`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    pub event_id: Option<String>,
    pub section: Option<String>,
    pub status: Option<VerificationStatus>,
    /// Only the caller's own listings.
    pub mine: bool,
}

/// Response of `POST /api/listings`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingResponse {
    pub listing: Listing,
}

/// Response of `GET /api/listings`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingsResponse {
    #[serde(default)]
    pub listings: Vec<Listing>,
}

/// An uploaded receipt. Only the id is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /api/receipts/upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReceiptUploadResponse {
    pub receipt: Receipt,
}

/// Fields read off a receipt by OCR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResult {
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub row: Option<String>,
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub face_value_cents: Option<u64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Response of `POST /api/receipts/:id/verify`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptVerifyResponse {
    pub ocr_result: OcrResult,
}

/// Maximum price for sections matching a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ceiling {
    pub section_pattern: String,
    pub max_price_cents: u64,
}

/// Response of `GET /api/events/:id/ceilings`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CeilingsResponse {
    #[serde(default)]
    pub ceilings: Vec<Ceiling>,
}
