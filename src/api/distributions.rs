//! Distribution resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::DeleteReasonBody;
use crate::domain::{DistributeFunds, Distribution};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Distribution operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DistributionApi: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Distribution>>;

    async fn list_deleted(&self) -> AppResult<Vec<Distribution>>;

    /// Allocate funds to a school
    async fn distribute(&self, data: DistributeFunds) -> AppResult<Distribution>;

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()>;

    async fn recover(&self, id: i64) -> AppResult<()>;

    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// HTTP implementation of [`DistributionApi`].
pub struct DistributionClient {
    api: Arc<ApiClient>,
}

impl DistributionClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DistributionApi for DistributionClient {
    async fn list(&self) -> AppResult<Vec<Distribution>> {
        self.api.get_json("/distributions/").await
    }

    async fn list_deleted(&self) -> AppResult<Vec<Distribution>> {
        self.api.get_json("/distributions/deleted/").await
    }

    async fn distribute(&self, data: DistributeFunds) -> AppResult<Distribution> {
        self.api.post_json("/distribute/", &data).await
    }

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()> {
        self.api
            .put_json_discard(
                &format!("/distributions/{}/delete/", id),
                &DeleteReasonBody {
                    delete_reason: reason,
                },
            )
            .await
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.api
            .put_discard(&format!("/distributions/{}/recover/", id))
            .await
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.api
            .delete_discard(&format!("/distributions/{}/confirm/", id))
            .await
    }
}
