//! Authentication service - Handles login, refresh and logout.
//!
//! Token issuance and verification are backend concerns; this service
//! exchanges credentials for a token pair and keeps the [`Session`]
//! context up to date. Role information rides along on the login
//! response and is only a client-side gate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{AuthApi, Credentials, Session};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

/// The staff member currently logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUser {
    pub username: String,
    pub role: Role,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Log in and persist the issued token pair
    async fn login(&self, username: String, password: String) -> AppResult<StaffUser>;

    /// Exchange the held refresh token for a new access token
    async fn refresh(&self) -> AppResult<()>;

    /// Drop the session
    fn logout(&self) -> AppResult<()>;

    /// Who is logged in, if anyone
    fn current_user(&self) -> Option<StaffUser>;

    /// Current user, or `Unauthenticated`
    fn require_user(&self) -> AppResult<StaffUser>;
}

/// Concrete implementation of [`AuthService`].
pub struct Authenticator {
    api: Arc<dyn AuthApi>,
    session: Session,
}

impl Authenticator {
    pub fn new(api: Arc<dyn AuthApi>, session: Session) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<StaffUser> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required."));
        }

        let tokens = self
            .api
            .login(Credentials { username, password })
            .await
            .map_err(|e| match e {
                // A 401 on login means bad credentials, not a stale token.
                AppError::Unauthenticated => AppError::InvalidCredentials,
                other => other,
            })?;

        let user = StaffUser {
            username: tokens.username.clone(),
            role: Role::from(tokens.role.as_str()),
        };
        self.session.authorize(tokens)?;
        tracing::info!("Logged in as {} ({})", user.username, user.role);
        Ok(user)
    }

    async fn refresh(&self) -> AppResult<()> {
        let refresh_token = self
            .session
            .refresh_token()
            .ok_or(AppError::Unauthenticated)?;
        let refreshed = self.api.refresh(refresh_token).await?;
        self.session.refresh_access(refreshed.access)
    }

    fn logout(&self) -> AppResult<()> {
        self.session.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    fn current_user(&self) -> Option<StaffUser> {
        let username = self.session.username()?;
        let role = self.session.role()?;
        Some(StaffUser { username, role })
    }

    fn require_user(&self) -> AppResult<StaffUser> {
        self.current_user().ok_or(AppError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockAuthApi, TokenPair};

    fn token_pair() -> TokenPair {
        TokenPair {
            access: "access".to_string(),
            refresh: "refresh".to_string(),
            role: "superadmin".to_string(),
            username: "claudine".to_string(),
        }
    }

    #[tokio::test]
    async fn login_stores_session_and_reports_role() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_| Ok(token_pair()));

        let session = Session::in_memory();
        let service = Authenticator::new(Arc::new(api), session.clone());

        let user = service
            .login("claudine".to_string(), "secret".to_string())
            .await
            .unwrap();
        assert_eq!(user.role, Role::SuperAdmin);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn login_rejects_blank_credentials_without_calling_backend() {
        let api = MockAuthApi::new();
        let service = Authenticator::new(Arc::new(api), Session::in_memory());

        let result = service.login("  ".to_string(), "secret".to_string()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn rejected_login_maps_to_invalid_credentials() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .returning(|_| Err(AppError::Unauthenticated));

        let service = Authenticator::new(Arc::new(api), Session::in_memory());
        let result = service
            .login("claudine".to_string(), "wrong".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn refresh_without_session_fails() {
        let api = MockAuthApi::new();
        let service = Authenticator::new(Arc::new(api), Session::in_memory());
        assert!(matches!(
            service.refresh().await,
            Err(AppError::Unauthenticated)
        ));
    }
}
