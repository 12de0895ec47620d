//! Contribution resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::domain::{Contribution, CreateContribution};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contribution operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContributionApi: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Contribution>>;

    async fn create(&self, data: CreateContribution) -> AppResult<Contribution>;

    /// Drive the backend's payment sandbox; it records the resulting
    /// contribution as if a real payment had come in
    async fn simulate_payment(&self, data: CreateContribution) -> AppResult<Contribution>;
}

/// HTTP implementation of [`ContributionApi`].
pub struct ContributionClient {
    api: Arc<ApiClient>,
}

impl ContributionClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ContributionApi for ContributionClient {
    async fn list(&self) -> AppResult<Vec<Contribution>> {
        self.api.get_json("/contributions/").await
    }

    async fn create(&self, data: CreateContribution) -> AppResult<Contribution> {
        self.api.post_json("/contributions/", &data).await
    }

    async fn simulate_payment(&self, data: CreateContribution) -> AppResult<Contribution> {
        self.api.post_json("/simulate-payment/", &data).await
    }
}
