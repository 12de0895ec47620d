//! Session context holding the authenticated token pair.
//!
//! The token pair is held in one explicit object passed to the API
//! client at construction; there is no ambient storage and no header
//! mutation on a shared client. Between CLI invocations the pair is
//! persisted to a JSON file under the user's config directory (the
//! console analog of the browser's local storage).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// Access/refresh token pair issued by the backend, plus the profile
/// fields the login endpoint reports alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: String,
}

/// Shared handle on the current authentication state.
#[derive(Clone)]
pub struct Session {
    tokens: Arc<RwLock<Option<TokenPair>>>,
    store: Option<PathBuf>,
}

impl Session {
    /// Session that lives only as long as the process. Used in tests
    /// and anywhere persistence is unwanted.
    pub fn in_memory() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(None)),
            store: None,
        }
    }

    /// Load the persisted session, if any. A missing or unreadable
    /// file simply means "logged out".
    pub fn load(path: &Path) -> Self {
        let tokens = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<TokenPair>(&raw) {
                Ok(pair) => Some(pair),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session file: {}", e);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            tokens: Arc::new(RwLock::new(tokens)),
            store: Some(path.to_path_buf()),
        }
    }

    /// Install a freshly issued token pair and persist it.
    pub fn authorize(&self, pair: TokenPair) -> AppResult<()> {
        self.persist(Some(&pair))?;
        *self.tokens.write() = Some(pair);
        Ok(())
    }

    /// Swap in a refreshed access token, keeping the rest of the pair.
    pub fn refresh_access(&self, access: String) -> AppResult<()> {
        let mut guard = self.tokens.write();
        let pair = guard.as_mut().ok_or(AppError::Unauthenticated)?;
        pair.access = access;
        let updated = pair.clone();
        drop(guard);
        self.persist(Some(&updated))
    }

    /// Drop the tokens and remove the persisted file.
    pub fn clear(&self) -> AppResult<()> {
        *self.tokens.write() = None;
        self.persist(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.read().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|p| p.access.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|p| p.refresh.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.tokens.read().as_ref().map(|p| Role::from(p.role.as_str()))
    }

    pub fn username(&self) -> Option<String> {
        self.tokens.read().as_ref().map(|p| p.username.clone())
    }

    fn persist(&self, pair: Option<&TokenPair>) -> AppResult<()> {
        let Some(path) = &self.store else {
            return Ok(());
        };

        match pair {
            Some(pair) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| AppError::internal(format!("Creating session dir: {}", e)))?;
                }
                let raw = serde_json::to_string_pretty(pair)
                    .map_err(|e| AppError::internal(format!("Encoding session: {}", e)))?;
                std::fs::write(path, raw)
                    .map_err(|e| AppError::internal(format!("Writing session file: {}", e)))
            }
            None => {
                if path.exists() {
                    std::fs::remove_file(path)
                        .map_err(|e| AppError::internal(format!("Removing session file: {}", e)))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(role: &str) -> TokenPair {
        TokenPair {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
            role: role.to_string(),
            username: "claudine".to_string(),
        }
    }

    #[test]
    fn authorize_exposes_tokens_and_role() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.authorize(pair("superadmin")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.access_token().as_deref(), Some("access-token"));
        assert_eq!(session.role(), Some(Role::SuperAdmin));
    }

    #[test]
    fn refresh_replaces_only_the_access_token() {
        let session = Session::in_memory();
        session.authorize(pair("admin")).unwrap();
        session.refresh_access("new-access".to_string()).unwrap();
        assert_eq!(session.access_token().as_deref(), Some("new-access"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-token"));
    }

    #[test]
    fn refresh_without_login_is_unauthenticated() {
        let session = Session::in_memory();
        assert!(matches!(
            session.refresh_access("token".to_string()),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn clear_logs_out() {
        let session = Session::in_memory();
        session.authorize(pair("admin")).unwrap();
        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }
}
