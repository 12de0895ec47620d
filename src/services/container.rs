//! Service container - Centralized service access with parallel fetch
//! support.
//!
//! Wires the session, the API client and every service behind one
//! constructor so commands never assemble the stack by hand. Services
//! are exposed as trait objects for dependency inversion.

use std::future::Future;
use std::sync::Arc;

use crate::api::{
    AdminApi, AdminClient, ApiClient, AuthClient, ContributionApi, ContributionClient,
    DistributionClient, ReportClient, SchoolClient, Session, TransferClient,
};
use crate::config::Config;
use crate::domain::RolePolicy;
use crate::errors::AppResult;
use crate::services::{
    AuthService, Authenticator, DistributionManager, DistributionService, ReportManager,
    ReportService, SchoolManager, SchoolService, TransferManager, TransferService,
};

/// Concrete container over all application services.
pub struct Services {
    session: Session,
    policy: RolePolicy,
    auth: Arc<dyn AuthService>,
    transfers: Arc<dyn TransferService>,
    schools: Arc<dyn SchoolService>,
    distributions: Arc<dyn DistributionService>,
    reports: Arc<dyn ReportService>,
    // Contributions and admin accounts have no client-side logic beyond
    // the endpoint itself, so they are exposed at the API level.
    contributions: Arc<dyn ContributionApi>,
    admins: Arc<dyn AdminApi>,
}

impl Services {
    /// Build the full service stack from configuration, loading any
    /// persisted session.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let session = Session::load(&config.session_file);
        let policy = RolePolicy::default();
        let api = Arc::new(ApiClient::new(config, session.clone())?);

        let auth = Arc::new(Authenticator::new(
            Arc::new(AuthClient::new(api.clone())),
            session.clone(),
        ));
        let transfers = Arc::new(TransferManager::new(
            Arc::new(TransferClient::new(api.clone())),
            session.clone(),
            policy.clone(),
        ));
        let schools = Arc::new(SchoolManager::new(
            Arc::new(SchoolClient::new(api.clone())),
            session.clone(),
            policy.clone(),
        ));
        let distributions = Arc::new(DistributionManager::new(
            Arc::new(DistributionClient::new(api.clone())),
            session.clone(),
            policy.clone(),
        ));
        let reports = Arc::new(ReportManager::new(Arc::new(ReportClient::new(api.clone()))));
        let contributions = Arc::new(ContributionClient::new(api.clone()));
        let admins = Arc::new(AdminClient::new(api));

        Ok(Self {
            session,
            policy,
            auth,
            transfers,
            schools,
            distributions,
            reports,
            contributions,
            admins,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    pub fn transfers(&self) -> Arc<dyn TransferService> {
        self.transfers.clone()
    }

    pub fn schools(&self) -> Arc<dyn SchoolService> {
        self.schools.clone()
    }

    pub fn distributions(&self) -> Arc<dyn DistributionService> {
        self.distributions.clone()
    }

    pub fn reports(&self) -> Arc<dyn ReportService> {
        self.reports.clone()
    }

    pub fn contributions(&self) -> Arc<dyn ContributionApi> {
        self.contributions.clone()
    }

    pub fn admins(&self) -> Arc<dyn AdminApi> {
        self.admins.clone()
    }
}

/// Parallel execution utilities for independent fetches.
///
/// The dashboard and the review/trash views each need several
/// collections at once; these run the fetches concurrently and fail
/// fast on the first error.
pub mod parallel {
    use super::*;
    use futures::try_join;

    /// Execute two independent async operations in parallel.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join3_fails_fast() {
        async fn ok() -> AppResult<i32> {
            Ok(1)
        }
        async fn boom() -> AppResult<i32> {
            Err(crate::errors::AppError::internal("boom"))
        }

        let result = parallel::join3(ok(), boom(), ok()).await;
        assert!(result.is_err());
    }
}
