//! School service - school use cases and lifecycle transitions.
//!
//! Same transition shape as transfers, independently authorized: the
//! default policy keeps school management narrower than transfer
//! management.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{SchoolApi, Session};
use crate::domain::lifecycle::{deleted_only, pending_only, validate_delete_reason};
use crate::domain::{CreateSchool, EntityKind, Role, RolePolicy, School};
use crate::errors::{AppError, AppResult};

/// School service trait for dependency injection.
#[async_trait]
pub trait SchoolService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<School>>;

    async fn list_pending(&self) -> AppResult<Vec<School>>;

    async fn list_deleted(&self) -> AppResult<Vec<School>>;

    async fn create(&self, data: CreateSchool) -> AppResult<School>;

    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()>;

    async fn recover(&self, id: i64) -> AppResult<()>;

    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`SchoolService`].
pub struct SchoolManager {
    api: Arc<dyn SchoolApi>,
    session: Session,
    policy: RolePolicy,
}

impl SchoolManager {
    pub fn new(api: Arc<dyn SchoolApi>, session: Session, policy: RolePolicy) -> Self {
        Self {
            api,
            session,
            policy,
        }
    }

    fn authorize(&self) -> AppResult<Role> {
        let role = self.session.role().ok_or(AppError::Unauthenticated)?;
        self.policy.authorize_manage(EntityKind::School, role)?;
        Ok(role)
    }
}

#[async_trait]
impl SchoolService for SchoolManager {
    async fn list(&self) -> AppResult<Vec<School>> {
        self.api.list().await
    }

    async fn list_pending(&self) -> AppResult<Vec<School>> {
        Ok(pending_only(self.api.list().await?))
    }

    async fn list_deleted(&self) -> AppResult<Vec<School>> {
        Ok(deleted_only(self.api.list_deleted().await?))
    }

    async fn create(&self, data: CreateSchool) -> AppResult<School> {
        let school = self.api.create(data).await?;
        tracing::info!("Registered school {} ({})", school.name, school.id);
        Ok(school)
    }

    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()> {
        let reason = validate_delete_reason(reason)?;
        self.authorize()?;
        self.api.mark_pending_delete(id, reason).await?;
        tracing::info!("School {} marked for deletion", id);
        Ok(())
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.recover(id).await?;
        tracing::info!("School {} recovered", id);
        Ok(())
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.confirm_delete(id).await?;
        tracing::info!("School {} deleted permanently", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockSchoolApi, TokenPair};

    fn session_with_role(role: &str) -> Session {
        let session = Session::in_memory();
        session
            .authorize(TokenPair {
                access: "access".to_string(),
                refresh: "refresh".to_string(),
                role: role.to_string(),
                username: "staff".to_string(),
            })
            .unwrap();
        session
    }

    #[tokio::test]
    async fn admin_role_may_not_manage_schools() {
        // The asymmetry with transfers: same transition, narrower roles.
        let api = MockSchoolApi::new();
        let service = SchoolManager::new(
            Arc::new(api),
            session_with_role("admin"),
            RolePolicy::default(),
        );

        let result = service.mark_pending_delete(1, "merged with GS Huye").await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn superadmin_may_confirm_school_deletion() {
        let mut api = MockSchoolApi::new();
        api.expect_confirm_delete().returning(|_| Ok(()));

        let service = SchoolManager::new(
            Arc::new(api),
            session_with_role("superadmin"),
            RolePolicy::default(),
        );
        assert!(service.confirm_delete(1).await.is_ok());
    }
}
