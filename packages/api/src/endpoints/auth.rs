use serde::Serialize;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::AuthResponse;
use crate::transport::Transport;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    invite_code: Option<&'a str>,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct AuthApi<'a, T, S> {
    client: &'a ApiClient<T, S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn auth(&self) -> AuthApi<'_, T, S> {
        AuthApi { client: self }
    }
}

impl<T: Transport, S: KeyValueStore> AuthApi<'_, T, S> {
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        invite_code: Option<&str>,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterBody {
            email,
            password,
            invite_code,
        };
        self.client.post("/api/auth/register", &body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.client
            .post("/api/auth/login", &LoginBody { email, password })
            .await
    }
}
