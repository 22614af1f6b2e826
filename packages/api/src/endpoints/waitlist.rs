use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{EnlistRequest, WaitlistStats};
use crate::transport::Transport;

pub struct WaitlistApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn waitlist(&self) -> WaitlistApi<'_, T, S> {
        WaitlistApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> WaitlistApi<'_, T, S> {
    pub async fn enlist(&self, request: &EnlistRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.client.post("/api/waitlist/enlist", request).await?;
        Ok(())
    }

    pub async fn stats(&self) -> Result<WaitlistStats, ApiError> {
        self.client.get("/api/waitlist/stats").await
    }
}
