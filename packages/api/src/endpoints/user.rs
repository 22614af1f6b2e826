use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MeResponse, ScoreResponse, User};
use crate::transport::Transport;

pub struct UserApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn user(&self) -> UserApi<'_, T, S> {
        UserApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> UserApi<'_, T, S> {
    /// Profile of the token holder.
    pub async fn me(&self) -> Result<User, ApiError> {
        let resp: MeResponse = self.client.get("/api/user/me").await?;
        Ok(resp.user)
    }

    /// Current EP Score and its breakdown.
    pub async fn score(&self) -> Result<ScoreResponse, ApiError> {
        self.client.get("/api/user/score").await
    }
}
