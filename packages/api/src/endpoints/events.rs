use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ceiling, CeilingsResponse};
use crate::transport::Transport;

use super::segment;

pub struct EventsApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn events(&self) -> EventsApi<'_, T, S> {
        EventsApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> EventsApi<'_, T, S> {
    /// Per-section price ceilings of an event.
    pub async fn ceilings(&self, event_id: &str) -> Result<Vec<Ceiling>, ApiError> {
        let resp: CeilingsResponse = self
            .client
            .get(&format!("/api/events/{}/ceilings", segment(event_id)))
            .await?;
        Ok(resp.ceilings)
    }
}
