//! # Invite codes and beta access
//!
//! Codes look like `EP-XXXXX-XXXXX` (uppercase letters and digits). The client
//! only normalises and format-checks what the user types; whether a code is
//! valid, available or already used is decided by the server.

use serde::{Deserialize, Serialize};

const CODE_PREFIX: &str = "EP";
const GROUP_LEN: usize = 5;

/// Why a typed code was rejected before reaching the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteCodeError {
    #[error("Please enter an invite code")]
    Empty,
    #[error("Invite codes look like EP-XXXXX-XXXXX")]
    Malformed,
}

/// Trim, uppercase and format-check a user-entered invite code.
pub fn normalize_code(input: &str) -> Result<String, InviteCodeError> {
    let code = input.trim().to_ascii_uppercase();
    if code.is_empty() {
        return Err(InviteCodeError::Empty);
    }
    let mut parts = code.split('-');
    let well_formed = parts.next() == Some(CODE_PREFIX)
        && parts.by_ref().take(2).filter(|g| is_group(g)).count() == 2
        && parts.next().is_none();
    if well_formed {
        Ok(code)
    } else {
        Err(InviteCodeError::Malformed)
    }
}

fn is_group(group: &str) -> bool {
    group.len() == GROUP_LEN && group.chars().all(|c| c.is_ascii_alphanumeric())
}

/// An invite code owned by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCode {
    pub code: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default, rename = "used_by_email")]
    pub used_by_email: Option<String>,
    #[serde(default)]
    pub share_url: Option<String>,
}

/// Codes returned alongside a grant: either bare strings or full records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssuedCode {
    Code(String),
    Detailed(InviteCode),
}

impl IssuedCode {
    pub fn code(&self) -> &str {
        match self {
            IssuedCode::Code(code) => code,
            IssuedCode::Detailed(invite) => &invite.code,
        }
    }
}

/// Response of `/api/invites/beta-status`, also the session's beta-access view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaStatus {
    #[serde(default)]
    pub has_beta_access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invites_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_codes: Option<Vec<IssuedCode>>,
}

impl BetaStatus {
    pub fn granted(invite_codes: Option<Vec<IssuedCode>>) -> Self {
        Self {
            has_beta_access: true,
            invites_remaining: None,
            invite_codes,
        }
    }
}

/// Response of `/api/invites/validate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, rename = "type")]
    pub code_type: Option<String>,
}

/// Response of `/api/invites/redeem`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemResponse {
    pub success: bool,
    #[serde(default)]
    pub invite_codes: Option<Vec<IssuedCode>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `/api/invites/my-codes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyCodesResponse {
    #[serde(default)]
    pub codes: Vec<InviteCode>,
    #[serde(default)]
    pub total_codes: u32,
    #[serde(default)]
    pub available_codes: u32,
    #[serde(default)]
    pub used_codes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("  ep-ab12c-34de9 ").unwrap(), "EP-AB12C-34DE9");
        assert_eq!(normalize_code("EP-AB12C-34DE9").unwrap(), "EP-AB12C-34DE9");
        assert_eq!(normalize_code("   "), Err(InviteCodeError::Empty));
        assert_eq!(normalize_code("EP-AB12C"), Err(InviteCodeError::Malformed));
        assert_eq!(normalize_code("EP-AB12C-34DE9-X"), Err(InviteCodeError::Malformed));
        assert_eq!(normalize_code("XX-AB12C-34DE9"), Err(InviteCodeError::Malformed));
        assert_eq!(normalize_code("EP-AB1_C-34DE9"), Err(InviteCodeError::Malformed));
        assert_eq!(normalize_code("EP-AB12C-34DE"), Err(InviteCodeError::Malformed));
    }

    #[test]
    fn test_my_codes_shape() {
        let resp: MyCodesResponse = serde_json::from_value(json!({
            "codes": [
                {"code": "EP-AAAAA-11111", "isAvailable": true, "used_by_email": null, "shareUrl": "https://ep.example/join?code=EP-AAAAA-11111"},
                {"code": "EP-BBBBB-22222", "isAvailable": false, "used_by_email": "friend@example.com", "shareUrl": null}
            ],
            "totalCodes": 2,
            "availableCodes": 1,
            "usedCodes": 1
        }))
        .unwrap();
        assert_eq!(resp.codes.len(), 2);
        assert!(resp.codes[0].is_available);
        assert_eq!(resp.codes[1].used_by_email.as_deref(), Some("friend@example.com"));
        assert_eq!(resp.used_codes, 1);
    }

    #[test]
    fn test_beta_status_codes_accept_strings_and_records() {
        let status: BetaStatus = serde_json::from_value(json!({
            "hasBetaAccess": true,
            "invitesRemaining": 1,
            "inviteCodes": ["EP-AAAAA-11111", {"code": "EP-BBBBB-22222", "isAvailable": true}]
        }))
        .unwrap();
        let codes = status.invite_codes.unwrap();
        assert_eq!(codes[0].code(), "EP-AAAAA-11111");
        assert_eq!(codes[1].code(), "EP-BBBBB-22222");
    }

    #[test]
    fn test_validate_type_field() {
        let resp: ValidateResponse =
            serde_json::from_value(json!({"valid": true, "type": "founder"})).unwrap();
        assert!(resp.valid);
        assert_eq!(resp.code_type.as_deref(), Some("founder"));
    }
}
