use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Badge, BadgesResponse, GenerateBadgeResponse, GeneratedBadge, RevokeBadgeRequest};
use crate::transport::Transport;

pub struct BadgesApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn badges(&self) -> BadgesApi<'_, T, S> {
        BadgesApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> BadgesApi<'_, T, S> {
    pub async fn list(&self) -> Result<Vec<Badge>, ApiError> {
        let resp: BadgesResponse = self.client.get("/api/badges").await?;
        Ok(resp.badges)
    }

    /// Issue a badge for the caller's current score. Takes no parameters: the
    /// server reads the score itself.
    pub async fn generate(&self) -> Result<GeneratedBadge, ApiError> {
        let resp: GenerateBadgeResponse = self.client.post_empty("/api/badges/generate").await?;
        Ok(resp.badge)
    }

    pub async fn revoke(&self, badge_token: &str, reason: Option<&str>) -> Result<(), ApiError> {
        let body = RevokeBadgeRequest {
            badge_token: badge_token.to_string(),
            reason: reason.map(str::to_string),
        };
        let _: serde_json::Value = self.client.post("/api/badges/revoke", &body).await?;
        Ok(())
    }
}
