//! Report resource endpoints.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::config::REPORT_ACCEPT;
use crate::domain::{Report, ReportRequest, ReportRow, SummaryQuery};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Report operations against the backend.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// List previously generated reports
    async fn list(&self) -> AppResult<Vec<Report>>;

    /// Generate a report server-side; the response is the binary blob
    async fn generate(&self, request: ReportRequest) -> AppResult<Vec<u8>>;

    /// Download an existing report file
    async fn download(&self, id: i64) -> AppResult<Vec<u8>>;

    /// Per-school transaction summary rows
    async fn transaction_summary(&self, query: SummaryQuery) -> AppResult<Vec<ReportRow>>;
}

/// HTTP implementation of [`ReportApi`].
pub struct ReportClient {
    api: Arc<ApiClient>,
}

impl ReportClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReportApi for ReportClient {
    async fn list(&self) -> AppResult<Vec<Report>> {
        self.api.get_json("/reports/").await
    }

    async fn generate(&self, request: ReportRequest) -> AppResult<Vec<u8>> {
        self.api
            .get_bytes("/reports/generate/", &request, REPORT_ACCEPT)
            .await
    }

    async fn download(&self, id: i64) -> AppResult<Vec<u8>> {
        self.api
            .get_bytes(
                &format!("/reports/{}/download/", id),
                &SummaryQuery::default(),
                REPORT_ACCEPT,
            )
            .await
    }

    async fn transaction_summary(&self, query: SummaryQuery) -> AppResult<Vec<ReportRow>> {
        self.api
            .get_json_query("/transaction-summary/", &query)
            .await
    }
}
