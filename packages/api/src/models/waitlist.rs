use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/waitlist/enlist`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnlistRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub source: String,
    pub vertical: String,
}

/// Response of `GET /api/waitlist/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_vertical: BTreeMap<String, u64>,
}
