//! API layer - typed client for the backend REST API
//!
//! This module contains all HTTP-related concerns:
//! - The core [`ApiClient`] (bearer auth, timeouts, error mapping)
//! - The [`Session`] token context passed to the client at construction
//! - One thin client per server resource, each behind a trait so
//!   services can be tested against mocks

pub mod admins;
pub mod auth;
pub mod client;
pub mod contributions;
pub mod distributions;
pub mod reports;
pub mod schools;
pub mod session;
pub mod transfers;

pub use admins::{AdminApi, AdminClient};
pub use auth::{AuthApi, AuthClient, Credentials, RefreshedAccess};
pub use client::ApiClient;
pub use contributions::{ContributionApi, ContributionClient};
pub use distributions::{DistributionApi, DistributionClient};
pub use reports::{ReportApi, ReportClient};
pub use schools::{SchoolApi, SchoolClient};
pub use session::{Session, TokenPair};
pub use transfers::{TransferApi, TransferClient};

#[cfg(any(test, feature = "test-utils"))]
pub use admins::MockAdminApi;
#[cfg(any(test, feature = "test-utils"))]
pub use auth::MockAuthApi;
#[cfg(any(test, feature = "test-utils"))]
pub use contributions::MockContributionApi;
#[cfg(any(test, feature = "test-utils"))]
pub use distributions::MockDistributionApi;
#[cfg(any(test, feature = "test-utils"))]
pub use reports::MockReportApi;
#[cfg(any(test, feature = "test-utils"))]
pub use schools::MockSchoolApi;
#[cfg(any(test, feature = "test-utils"))]
pub use transfers::MockTransferApi;

use serde::Serialize;

/// Body of every mark-pending-delete call, shared by the three
/// soft-deletable resources.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteReasonBody {
    pub delete_reason: String,
}
