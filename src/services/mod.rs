//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the API client to fulfill
//! application use cases. They depend on the per-resource API traits
//! for dependency inversion, which is also what makes them testable
//! without a backend.

mod auth_service;
pub mod container;
mod distribution_service;
mod report_service;
mod school_service;
mod transfer_service;

// Service container
pub use container::{parallel, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, StaffUser};
pub use distribution_service::{DistributionManager, DistributionService};
pub use report_service::{ReportManager, ReportService};
pub use school_service::{SchoolManager, SchoolService};
pub use transfer_service::{TransferManager, TransferService};
