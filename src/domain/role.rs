//! Staff roles and the management permission matrix.
//!
//! The backend enforces authorization on every endpoint; these checks
//! are the client-side gate so a user sees "insufficient permission"
//! instead of firing a request that is bound to fail. Which roles may
//! manage which entity kinds is deployment policy, so the matrix is an
//! explicit overridable value rather than hardcoded checks.

use serde::{Deserialize, Serialize};

use crate::config::{ROLE_ADMIN, ROLE_SUPERADMIN};
use crate::errors::{AppError, AppResult};

/// Staff roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    /// Check if this role has super-admin privileges
    pub fn is_superadmin(self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        // Unknown role strings fall back to the least-privileged role.
        match s {
            ROLE_SUPERADMIN => Role::SuperAdmin,
            _ => Role::Admin,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::SuperAdmin => write!(f, "{}", ROLE_SUPERADMIN),
        }
    }
}

/// The three soft-deletable entity kinds, each with its own
/// authorization scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Transfer,
    School,
    Distribution,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Transfer => write!(f, "transfer"),
            EntityKind::School => write!(f, "school"),
            EntityKind::Distribution => write!(f, "distribution"),
        }
    }
}

/// Which roles may perform which privileged actions.
///
/// The default mirrors the deployed policy: every role reaches the
/// dashboard and list views, but school management, deletion review and
/// admin-user listing are restricted to super-admins, while transfer
/// and distribution management stay open to both roles. School
/// management being narrower than transfer management is deliberate.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    transfer_managers: Vec<Role>,
    school_managers: Vec<Role>,
    distribution_managers: Vec<Role>,
    reviewers: Vec<Role>,
    user_viewers: Vec<Role>,
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self {
            transfer_managers: vec![Role::SuperAdmin, Role::Admin],
            school_managers: vec![Role::SuperAdmin],
            distribution_managers: vec![Role::SuperAdmin, Role::Admin],
            reviewers: vec![Role::SuperAdmin],
            user_viewers: vec![Role::SuperAdmin],
        }
    }
}

impl RolePolicy {
    /// Build a custom matrix for deployments with different policy.
    pub fn new(
        transfer_managers: Vec<Role>,
        school_managers: Vec<Role>,
        distribution_managers: Vec<Role>,
        reviewers: Vec<Role>,
        user_viewers: Vec<Role>,
    ) -> Self {
        Self {
            transfer_managers,
            school_managers,
            distribution_managers,
            reviewers,
            user_viewers,
        }
    }

    /// May this role run lifecycle transitions on the given entity kind?
    pub fn can_manage(&self, kind: EntityKind, role: Role) -> bool {
        let managers = match kind {
            EntityKind::Transfer => &self.transfer_managers,
            EntityKind::School => &self.school_managers,
            EntityKind::Distribution => &self.distribution_managers,
        };
        managers.contains(&role)
    }

    /// May this role see the pending-deletion and trash views?
    pub fn can_review(&self, role: Role) -> bool {
        self.reviewers.contains(&role)
    }

    /// May this role list admin user accounts?
    pub fn can_view_users(&self, role: Role) -> bool {
        self.user_viewers.contains(&role)
    }

    pub fn authorize_manage(&self, kind: EntityKind, role: Role) -> AppResult<()> {
        if self.can_manage(kind, role) {
            Ok(())
        } else {
            tracing::warn!("Role {} denied {} management", role, kind);
            Err(AppError::Forbidden)
        }
    }

    pub fn authorize_review(&self, role: Role) -> AppResult<()> {
        if self.can_review(role) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    pub fn authorize_view_users(&self, role: Role) -> AppResult<()> {
        if self.can_view_users(role) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
