//! End-to-end deletion workflow tests against an in-memory backend.
//!
//! The fakes stand in for the external store: they apply the same
//! transition rules the backend enforces, so the services are driven
//! through the full mark-pending/recover/confirm flow.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use dusangire_admin::api::{SchoolApi, Session, TokenPair, TransferApi};
use dusangire_admin::domain::{
    CreateSchool, CreateTransfer, RolePolicy, School, SoftDeletable, Transfer, UploadReceipt,
};
use dusangire_admin::errors::{AppError, AppResult};
use dusangire_admin::services::{
    SchoolManager, SchoolService, TransferManager, TransferService,
};

fn transfer(id: i64, donor: &str) -> Transfer {
    serde_json::from_value(json!({ "id": id, "Donor": donor, "Amount": 1000 })).unwrap()
}

fn school(id: i64, name: &str) -> School {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

fn session(role: &str) -> Session {
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

/// In-memory transfer store applying the backend's transition rules.
struct FakeTransferStore {
    records: Mutex<Vec<Transfer>>,
}

impl FakeTransferStore {
    fn with(records: Vec<Transfer>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
        })
    }
}

#[async_trait]
impl TransferApi for FakeTransferStore {
    async fn list(&self) -> AppResult<Vec<Transfer>> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|t| !t.lifecycle.status().is_deleted())
            .cloned()
            .collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<Transfer>> {
        Ok(self.records.lock().clone())
    }

    async fn create(&self, _data: CreateTransfer) -> AppResult<Transfer> {
        Err(AppError::internal("not exercised"))
    }

    async fn upload_batch(
        &self,
        _file_name: String,
        _contents: Vec<u8>,
    ) -> AppResult<UploadReceipt> {
        Err(AppError::internal("not exercised"))
    }

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().mark_pending(&reason)
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().recover()
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().confirm_delete()
    }
}

/// In-memory school store with the same transition rules.
struct FakeSchoolStore {
    records: Mutex<Vec<School>>,
}

impl FakeSchoolStore {
    fn with(records: Vec<School>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
        })
    }
}

#[async_trait]
impl SchoolApi for FakeSchoolStore {
    async fn list(&self) -> AppResult<Vec<School>> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|s| !s.lifecycle.status().is_deleted())
            .cloned()
            .collect())
    }

    async fn list_deleted(&self) -> AppResult<Vec<School>> {
        Ok(self.records.lock().clone())
    }

    async fn create(&self, _data: CreateSchool) -> AppResult<School> {
        Err(AppError::internal("not exercised"))
    }

    async fn mark_pending_delete(&self, id: i64, reason: String) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().mark_pending(&reason)
    }

    async fn recover(&self, id: i64) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().recover()
    }

    async fn confirm_delete(&self, id: i64) -> AppResult<()> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;
        record.lifecycle_mut().confirm_delete()
    }
}

fn transfer_service(store: Arc<FakeTransferStore>, role: &str) -> TransferManager {
    TransferManager::new(store, session(role), RolePolicy::default())
}

#[tokio::test]
async fn mark_pending_then_recover_clears_the_reason() {
    let store = FakeTransferStore::with(vec![transfer(5, "ACME")]);
    let service = transfer_service(store.clone(), "superadmin");

    service.mark_pending_delete(5, "duplicate").await.unwrap();
    let pending = service.list_pending().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].lifecycle.status().is_pending());
    assert_eq!(pending[0].lifecycle.reason(), Some("duplicate"));

    service.recover(5).await.unwrap();
    let listed = service.list().await.unwrap();
    assert!(listed[0].lifecycle.status().is_active());
    assert!(listed[0].lifecycle.reason().is_none());
    assert!(service.list_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn confirm_is_terminal_and_recover_then_fails() {
    let store = FakeTransferStore::with(vec![transfer(7, "ACME")]);
    let service = transfer_service(store.clone(), "superadmin");

    service.mark_pending_delete(7, "test data").await.unwrap();
    service.confirm_delete(7).await.unwrap();

    let trash = service.list_deleted().await.unwrap();
    assert_eq!(trash.len(), 1);
    assert!(trash[0].lifecycle.status().is_deleted());
    // The reason survives into the trash view.
    assert_eq!(trash[0].lifecycle.reason(), Some("test data"));

    assert!(matches!(
        service.recover(7).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.confirm_delete(7).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn empty_reason_fails_and_leaves_state_unchanged() {
    let store = FakeTransferStore::with(vec![transfer(5, "ACME")]);
    let service = transfer_service(store.clone(), "superadmin");

    let result = service.mark_pending_delete(5, "  ").await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    let listed = service.list().await.unwrap();
    assert!(listed[0].lifecycle.status().is_active());
    assert!(listed[0].lifecycle.reason().is_none());
}

#[tokio::test]
async fn remarking_after_recovery_overwrites_the_reason() {
    let store = FakeTransferStore::with(vec![transfer(5, "ACME")]);
    let service = transfer_service(store.clone(), "superadmin");

    service.mark_pending_delete(5, "first reason").await.unwrap();
    service.recover(5).await.unwrap();
    service.mark_pending_delete(5, "second reason").await.unwrap();

    let pending = service.list_pending().await.unwrap();
    assert_eq!(pending[0].lifecycle.reason(), Some("second reason"));
}

#[tokio::test]
async fn confirm_requires_a_pending_record() {
    let store = FakeTransferStore::with(vec![transfer(5, "ACME")]);
    let service = transfer_service(store.clone(), "superadmin");

    assert!(matches!(
        service.confirm_delete(5).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.confirm_delete(999).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn admin_manages_transfers_but_not_schools() {
    let transfers = FakeTransferStore::with(vec![transfer(1, "ACME")]);
    let schools = FakeSchoolStore::with(vec![school(1, "GS Kigali")]);

    let transfer_manager =
        TransferManager::new(transfers, session("admin"), RolePolicy::default());
    let school_manager = SchoolManager::new(schools, session("admin"), RolePolicy::default());

    transfer_manager
        .mark_pending_delete(1, "recorded twice")
        .await
        .unwrap();

    let result = school_manager.mark_pending_delete(1, "merged").await;
    assert!(matches!(result, Err(AppError::Forbidden)));

    // The denied transition never reached the store.
    let listed = school_manager.list().await.unwrap();
    assert!(listed[0].lifecycle.status().is_active());
}
