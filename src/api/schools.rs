//! School resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::DeleteReasonBody;
use crate::domain::{CreateSchool, School};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// School operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SchoolApi: Send + Sync {
    async fn list(&self) -> AppResult<Vec<School>>;

    async fn list_deleted(&self) -> AppResult<Vec<School>>;

    async fn create(&self, data: CreateSchool) -> AppResult<School>;

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()>;

    async fn recover(&self, id: i64) -> AppResult<()>;

    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// HTTP implementation of [`SchoolApi`].
pub struct SchoolClient {
    api: Arc<ApiClient>,
}

impl SchoolClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SchoolApi for SchoolClient {
    async fn list(&self) -> AppResult<Vec<School>> {
        self.api.get_json("/schools/").await
    }

    async fn list_deleted(&self) -> AppResult<Vec<School>> {
        self.api.get_json("/schools/deleted/").await
    }

    async fn create(&self, data: CreateSchool) -> AppResult<School> {
        self.api.post_json("/schools/", &data).await
    }

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()> {
        self.api
            .put_json_discard(
                &format!("/schools/{}/delete/", id),
                &DeleteReasonBody {
                    delete_reason: reason,
                },
            )
            .await
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.api
            .put_discard(&format!("/schools/{}/recover/", id))
            .await
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.api
            .delete_discard(&format!("/schools/{}/confirm/", id))
            .await
    }
}
