//! Report service - listing, generation, download and the transaction
//! summary.
//!
//! The backend generates the files; this service only validates the
//! request shape and relays blobs.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ReportApi;
use crate::domain::{Report, ReportRequest, ReportRow, SummaryQuery};
use crate::errors::{AppError, AppResult};

/// Report service trait for dependency injection.
#[async_trait]
pub trait ReportService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Report>>;

    /// Request a server-side generation; returns the file contents
    async fn generate(&self, request: ReportRequest) -> AppResult<Vec<u8>>;

    async fn download(&self, id: i64) -> AppResult<Vec<u8>>;

    async fn transaction_summary(&self, query: SummaryQuery) -> AppResult<Vec<ReportRow>>;
}

/// Concrete implementation of [`ReportService`].
pub struct ReportManager {
    api: Arc<dyn ReportApi>,
}

impl ReportManager {
    pub fn new(api: Arc<dyn ReportApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReportService for ReportManager {
    async fn list(&self) -> AppResult<Vec<Report>> {
        self.api.list().await
    }

    async fn generate(&self, request: ReportRequest) -> AppResult<Vec<u8>> {
        if request.end_date < request.start_date {
            return Err(AppError::validation(
                "End date must not be before start date.",
            ));
        }
        tracing::info!(
            "Generating report '{}' for {}..{}",
            request.report_name,
            request.start_date,
            request.end_date
        );
        self.api.generate(request).await
    }

    async fn download(&self, id: i64) -> AppResult<Vec<u8>> {
        self.api.download(id).await
    }

    async fn transaction_summary(&self, query: SummaryQuery) -> AppResult<Vec<ReportRow>> {
        self.api.transaction_summary(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockReportApi;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn inverted_date_range_is_rejected_locally() {
        let api = MockReportApi::new();
        let service = ReportManager::new(Arc::new(api));

        let result = service
            .generate(ReportRequest {
                report_name: "Monthly Report".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
