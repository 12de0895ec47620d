//! Soft-delete/recovery lifecycle shared by transfers, schools and
//! distributions.
//!
//! A record starts `active`, is marked `pending` with a mandatory
//! reason, and from there is either recovered back to `active` or
//! confirmed into `deleted`. `deleted` is terminal; only an external
//! purge removes the record. The same transition shape is replicated
//! per entity kind with independent authorization (see
//! [`crate::domain::role`]).

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Lifecycle states of a soft-deletable record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteStatus {
    #[default]
    Active,
    Pending,
    Deleted,
}

impl DeleteStatus {
    pub fn is_active(self) -> bool {
        matches!(self, DeleteStatus::Active)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, DeleteStatus::Pending)
    }

    pub fn is_deleted(self) -> bool {
        matches!(self, DeleteStatus::Deleted)
    }
}

impl std::fmt::Display for DeleteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteStatus::Active => write!(f, "active"),
            DeleteStatus::Pending => write!(f, "pending"),
            DeleteStatus::Deleted => write!(f, "deleted"),
        }
    }
}

/// Lifecycle state carried by every soft-deletable record.
///
/// Embedded flattened in entity structs, so `delete_status` and
/// `delete_reason` read straight off the wire; both are optional there
/// (absent means `active`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(rename = "delete_status", default)]
    status: DeleteStatus,
    #[serde(rename = "delete_reason", default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Lifecycle {
    /// A fresh record: `active`, no reason.
    pub fn active() -> Self {
        Self::default()
    }

    pub fn status(&self) -> DeleteStatus {
        self.status
    }

    /// Reason supplied when the record entered `pending`. Present only
    /// while the status is not `active`.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// active -> pending. Requires a non-empty reason; any other source
    /// state means the record is not available for this transition.
    ///
    /// Re-marking an already-pending record overwrites the reason via
    /// recover-then-mark, never by calling this twice.
    pub fn mark_pending(&mut self, reason: &str) -> AppResult<()> {
        let reason = validate_delete_reason(reason)?;
        if !self.status.is_active() {
            return Err(AppError::NotFound);
        }
        self.status = DeleteStatus::Pending;
        self.reason = Some(reason);
        Ok(())
    }

    /// pending -> active. Clears the reason.
    pub fn recover(&mut self) -> AppResult<()> {
        if !self.status.is_pending() {
            return Err(AppError::NotFound);
        }
        self.status = DeleteStatus::Active;
        self.reason = None;
        Ok(())
    }

    /// pending -> deleted. Irreversible through this API; the reason is
    /// kept so the trash view can display it.
    pub fn confirm_delete(&mut self) -> AppResult<()> {
        if !self.status.is_pending() {
            return Err(AppError::NotFound);
        }
        self.status = DeleteStatus::Deleted;
        Ok(())
    }
}

/// Validate and normalize a deletion reason: trimmed, non-empty.
pub fn validate_delete_reason(reason: &str) -> AppResult<String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("A deletion reason is required."));
    }
    Ok(trimmed.to_string())
}

/// Records that carry the shared soft-delete lifecycle.
pub trait SoftDeletable {
    fn record_id(&self) -> i64;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;
}

/// Keep only records awaiting deletion approval.
pub fn pending_only<T: SoftDeletable>(items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.lifecycle().status().is_pending())
        .collect()
}

/// Keep only records whose deletion was confirmed.
pub fn deleted_only<T: SoftDeletable>(items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.lifecycle().status().is_deleted())
        .collect()
}
