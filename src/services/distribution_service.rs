//! Distribution service - fund allocation and lifecycle transitions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{DistributionApi, Session};
use crate::domain::lifecycle::{deleted_only, pending_only, validate_delete_reason};
use crate::domain::{DistributeFunds, Distribution, EntityKind, Role, RolePolicy};
use crate::errors::{AppError, AppResult};

/// Distribution service trait for dependency injection.
#[async_trait]
pub trait DistributionService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Distribution>>;

    async fn list_pending(&self) -> AppResult<Vec<Distribution>>;

    async fn list_deleted(&self) -> AppResult<Vec<Distribution>>;

    /// Allocate funds to a school
    async fn distribute(&self, data: DistributeFunds) -> AppResult<Distribution>;

    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()>;

    async fn recover(&self, id: i64) -> AppResult<()>;

    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`DistributionService`].
pub struct DistributionManager {
    api: Arc<dyn DistributionApi>,
    session: Session,
    policy: RolePolicy,
}

impl DistributionManager {
    pub fn new(api: Arc<dyn DistributionApi>, session: Session, policy: RolePolicy) -> Self {
        Self {
            api,
            session,
            policy,
        }
    }

    fn authorize(&self) -> AppResult<Role> {
        let role = self.session.role().ok_or(AppError::Unauthenticated)?;
        self.policy
            .authorize_manage(EntityKind::Distribution, role)?;
        Ok(role)
    }
}

#[async_trait]
impl DistributionService for DistributionManager {
    async fn list(&self) -> AppResult<Vec<Distribution>> {
        self.api.list().await
    }

    async fn list_pending(&self) -> AppResult<Vec<Distribution>> {
        Ok(pending_only(self.api.list().await?))
    }

    async fn list_deleted(&self) -> AppResult<Vec<Distribution>> {
        Ok(deleted_only(self.api.list_deleted().await?))
    }

    async fn distribute(&self, data: DistributeFunds) -> AppResult<Distribution> {
        let distribution = self.api.distribute(data).await?;
        tracing::info!(
            "Distributed {:.2} RWF to {}",
            distribution.amount,
            distribution.school_name
        );
        Ok(distribution)
    }

    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()> {
        let reason = validate_delete_reason(reason)?;
        self.authorize()?;
        self.api.mark_pending_delete(id, reason).await?;
        tracing::info!("Distribution {} marked for deletion", id);
        Ok(())
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.recover(id).await?;
        tracing::info!("Distribution {} recovered", id);
        Ok(())
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.confirm_delete(id).await?;
        tracing::info!("Distribution {} deleted permanently", id);
        Ok(())
    }
}
