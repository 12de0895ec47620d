//! Transfer resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::api::client::ApiClient;
use crate::api::DeleteReasonBody;
use crate::domain::{CreateTransfer, Transfer, UploadReceipt};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Transfer operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// List transfers (active and pending)
    async fn list(&self) -> AppResult<Vec<Transfer>>;

    /// List transfers whose deletion was confirmed
    async fn list_deleted(&self) -> AppResult<Vec<Transfer>>;

    /// Record a new transfer
    async fn create(&self, data: CreateTransfer) -> AppResult<Transfer>;

    /// Upload a spreadsheet of transfers; parsing is server-side
    async fn upload_batch(&self, file_name: String, contents: Vec<u8>) -> AppResult<UploadReceipt>;

    /// active -> pending, with a mandatory reason
    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()>;

    /// pending -> active
    async fn recover(&self, id: i64) -> AppResult<()>;

    /// pending -> deleted, irreversible
    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// HTTP implementation of [`TransferApi`].
pub struct TransferClient {
    api: Arc<ApiClient>,
}

impl TransferClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TransferApi for TransferClient {
    async fn list(&self) -> AppResult<Vec<Transfer>> {
        self.api.get_json("/transfers/").await
    }

    async fn list_deleted(&self) -> AppResult<Vec<Transfer>> {
        self.api.get_json("/transfers/deleted/").await
    }

    async fn create(&self, data: CreateTransfer) -> AppResult<Transfer> {
        self.api.post_json("/transfers/", &data).await
    }

    async fn upload_batch(&self, file_name: String, contents: Vec<u8>) -> AppResult<UploadReceipt> {
        let form = Form::new().part("file", Part::bytes(contents).file_name(file_name));
        self.api.post_multipart("/transfers/upload/", form).await
    }

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()> {
        self.api
            .put_json_discard(
                &format!("/transfers/{}/delete/", id),
                &DeleteReasonBody {
                    delete_reason: reason,
                },
            )
            .await
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.api
            .put_discard(&format!("/transfers/{}/recover/", id))
            .await
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.api
            .delete_discard(&format!("/transfers/{}/confirm/", id))
            .await
    }
}
