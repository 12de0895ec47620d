//! Transfer service - transfer use cases and lifecycle transitions.
//!
//! Lifecycle preconditions are checked here before any network call:
//! an empty reason never leaves the client, and a role outside the
//! policy matrix is rejected locally. The backend remains the
//! authority; its rejections surface through the same error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Session, TransferApi};
use crate::domain::lifecycle::{deleted_only, pending_only, validate_delete_reason};
use crate::domain::{CreateTransfer, EntityKind, Role, RolePolicy, Transfer, UploadReceipt};
use crate::errors::{AppError, AppResult};

/// Transfer service trait for dependency injection.
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Full transfer collection as the server orders it
    async fn list(&self) -> AppResult<Vec<Transfer>>;

    /// Transfers awaiting deletion approval
    async fn list_pending(&self) -> AppResult<Vec<Transfer>>;

    /// Transfers whose deletion was confirmed (trash)
    async fn list_deleted(&self) -> AppResult<Vec<Transfer>>;

    /// Record a new transfer
    async fn create(&self, data: CreateTransfer) -> AppResult<Transfer>;

    /// Upload a spreadsheet batch
    async fn upload_batch(&self, file_name: String, contents: Vec<u8>) -> AppResult<UploadReceipt>;

    /// active -> pending with a mandatory reason
    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()>;

    /// pending -> active
    async fn recover(&self, id: i64) -> AppResult<()>;

    /// pending -> deleted, irreversible
    async fn confirm_delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`TransferService`].
pub struct TransferManager {
    api: Arc<dyn TransferApi>,
    session: Session,
    policy: RolePolicy,
}

impl TransferManager {
    pub fn new(api: Arc<dyn TransferApi>, session: Session, policy: RolePolicy) -> Self {
        Self {
            api,
            session,
            policy,
        }
    }

    fn authorize(&self) -> AppResult<Role> {
        let role = self.session.role().ok_or(AppError::Unauthenticated)?;
        self.policy.authorize_manage(EntityKind::Transfer, role)?;
        Ok(role)
    }
}

#[async_trait]
impl TransferService for TransferManager {
    async fn list(&self) -> AppResult<Vec<Transfer>> {
        self.api.list().await
    }

    async fn list_pending(&self) -> AppResult<Vec<Transfer>> {
        Ok(pending_only(self.api.list().await?))
    }

    async fn list_deleted(&self) -> AppResult<Vec<Transfer>> {
        Ok(deleted_only(self.api.list_deleted().await?))
    }

    async fn create(&self, data: CreateTransfer) -> AppResult<Transfer> {
        let transfer = self.api.create(data).await?;
        tracing::info!("Recorded transfer {} from {}", transfer.id, transfer.donor);
        Ok(transfer)
    }

    async fn upload_batch(&self, file_name: String, contents: Vec<u8>) -> AppResult<UploadReceipt> {
        tracing::info!("Uploading transfer batch {}", file_name);
        self.api.upload_batch(file_name, contents).await
    }

    async fn mark_pending_delete(&self, id: i64, reason: &str) -> AppResult<()> {
        let reason = validate_delete_reason(reason)?;
        self.authorize()?;
        self.api.mark_pending_delete(id, reason).await?;
        tracing::info!("Transfer {} marked for deletion", id);
        Ok(())
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.recover(id).await?;
        tracing::info!("Transfer {} recovered", id);
        Ok(())
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        self.authorize()?;
        self.api.confirm_delete(id).await?;
        tracing::info!("Transfer {} deleted permanently", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockTransferApi, TokenPair};

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
    async fn empty_reason_fails_before_any_network_call() {
        // No expectation set: a call through to the API would panic.
        let api = MockTransferApi::new();
        let service = TransferManager::new(
            Arc::new(api),
            session_with_role("superadmin"),
            RolePolicy::default(),
        );

        let result = service.mark_pending_delete(5, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn admin_role_may_manage_transfers() {
        let mut api = MockTransferApi::new();
        api.expect_mark_pending_delete()
            .returning(|_, _| Ok(()));

        let service = TransferManager::new(
            Arc::new(api),
            session_with_role("admin"),
            RolePolicy::default(),
        );
        assert!(service.mark_pending_delete(5, "duplicate").await.is_ok());
    }

    #[tokio::test]
    async fn transitions_require_a_session() {
        let api = MockTransferApi::new();
        let service = TransferManager::new(
            Arc::new(api),
            Session::in_memory(),
            RolePolicy::default(),
        );

        assert!(matches!(
            service.recover(5).await,
            Err(AppError::Unauthenticated)
        ));
    }
}
