use serde::Serialize;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BetaStatus, MyCodesResponse, RedeemResponse, ValidateResponse};
use crate::transport::Transport;

#[derive(Serialize)]
struct CodeBody<'a> {
    code: &'a str,
}

pub struct InvitesApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn invites(&self) -> InvitesApi<'_, T, S> {
        InvitesApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> InvitesApi<'_, T, S> {
    /// Check a code without consuming it.
    pub async fn validate(&self, code: &str) -> Result<ValidateResponse, ApiError> {
        self.client
            .post("/api/invites/validate", &CodeBody { code })
            .await
    }

    /// Consume a code for the signed-in user. The raw response is returned;
    /// `success: false` is interpreted by the session store.
    pub async fn redeem(&self, code: &str) -> Result<RedeemResponse, ApiError> {
        self.client
            .post("/api/invites/redeem", &CodeBody { code })
            .await
    }

    pub async fn my_codes(&self) -> Result<MyCodesResponse, ApiError> {
        self.client.get("/api/invites/my-codes").await
    }

    pub async fn beta_status(&self) -> Result<BetaStatus, ApiError> {
        self.client.get("/api/invites/beta-status").await
    }
}
