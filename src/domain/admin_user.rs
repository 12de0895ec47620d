//! Admin user account entity.
//!
//! Account management itself lives in the backend; the console only
//! lists accounts for super-admins.

use serde::{Deserialize, Serialize};

use crate::types::QueryEngine;

/// Administrator account as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl AdminUser {
    pub fn role_label(&self) -> &'static str {
        if self.is_superuser {
            "Super Admin"
        } else {
            "Admin"
        }
    }

    /// Query engine instance for the admin user list.
    pub fn query_engine() -> QueryEngine<AdminUser> {
        let fields: Vec<fn(&AdminUser) -> String> = vec![
            |u| u.username.clone(),
            |u| u.email.clone().unwrap_or_default(),
        ];
        QueryEngine::new(fields)
    }
}
