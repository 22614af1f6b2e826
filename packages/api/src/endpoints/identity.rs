use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AnchorsResponse, Provider};
use crate::transport::Transport;

pub struct IdentityApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn identity(&self) -> IdentityApi<'_, T, S> {
        IdentityApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> IdentityApi<'_, T, S> {
    pub async fn anchors(&self) -> Result<AnchorsResponse, ApiError> {
        self.client.get("/api/identity/anchors").await
    }

    /// Disconnect an anchor. Callers re-fetch the score afterwards.
    pub async fn disconnect(&self, provider: Provider) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .delete(&format!("/api/identity/{}", provider.as_str()))
            .await?;
        Ok(())
    }
}
