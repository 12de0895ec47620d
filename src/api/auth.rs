//! Authentication endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::session::TokenPair;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Login credentials
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct RefreshRequest {
    refresh: String,
}

/// Fresh access token returned by the refresh endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshedAccess {
    pub access: String,
}

/// Authentication operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn login(&self, credentials: Credentials) -> AppResult<TokenPair>;

    /// Exchange a refresh token for a new access token
    async fn refresh(&self, refresh_token: String) -> AppResult<RefreshedAccess>;
}

/// HTTP implementation of [`AuthApi`].
pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, credentials: Credentials) -> AppResult<TokenPair> {
        self.api.post_public("/token/", &credentials).await
    }

    async fn refresh(&self, refresh_token: String) -> AppResult<RefreshedAccess> {
        self.api
            .post_public(
                "/token/refresh/",
                &RefreshRequest {
                    refresh: refresh_token,
                },
            )
            .await
    }
}
