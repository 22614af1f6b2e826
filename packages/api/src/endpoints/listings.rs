use store::KeyValueStore;

use crate::client::{with_query, ApiClient};
use crate::error::ApiError;
use crate::models::{Listing, ListingFilters, ListingResponse, ListingsResponse, NewListing, VerificationStatus};
use crate::transport::Transport;

pub struct ListingsApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn listings(&self) -> ListingsApi<'_, T, S> {
        ListingsApi { client: self }
    }
}

fn status_param(status: VerificationStatus) -> String {
    match serde_json::to_value(status) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

impl<T: Transport, S: KeyValueStore> ListingsApi<'_, T, S> {
    /// Submit a listing. The returned `verification_status` is authoritative.
    pub async fn create(&self, listing: &NewListing) -> Result<Listing, ApiError> {
        let resp: ListingResponse = self.client.post("/api/listings", listing).await?;
        Ok(resp.listing)
    }

    pub async fn list(&self, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError> {
        let endpoint = with_query(
            "/api/listings",
            &[
                ("eventId", filters.event_id.clone()),
                ("section", filters.section.clone()),
                ("status", filters.status.map(status_param)),
                ("mine", filters.mine.then(|| "true".to_string())),
            ],
        );
        let resp: ListingsResponse = self.client.get(&endpoint).await?;
        Ok(resp.listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use crate::transport::Method;
    use serde_json::json;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_list_encodes_filters() {
        let transport = MockTransport::new("http://api.test");
        let client = ApiClient::new("http://api.test", transport.clone(), MemoryStore::new());
        transport.reply(Method::Get, "/api/listings", 200, json!({"listings": []}));

        let filters = ListingFilters {
            event_id: Some("ev_1".into()),
            status: Some(VerificationStatus::ManualReview),
            mine: true,
            ..Default::default()
        };
        let listings = client.listings().list(&filters).await.unwrap();
        assert!(listings.is_empty());
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/listings?eventId=ev_1&status=manual_review&mine=true"
        );
    }
}
