//! Admin user resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::domain::AdminUser;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin account operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list(&self) -> AppResult<Vec<AdminUser>>;
}

/// HTTP implementation of [`AdminApi`].
pub struct AdminClient {
    api: Arc<ApiClient>,
}

impl AdminClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn list(&self) -> AppResult<Vec<AdminUser>> {
        self.api.get_json("/admins/").await
    }
}
