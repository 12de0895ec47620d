//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Server
//! rejections and transport failures are kept distinct so the console
//! can tell the user "check your connection" apart from a domain
//! message.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required. Please log in first.")]
    Unauthenticated,

    #[error("Insufficient permission for this action")]
    Forbidden,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    // Resource errors
    #[error("Record not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Server is unreachable. Please check your connection and try again.")]
    Transport(#[source] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and structured output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Server { .. } => "SERVER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server { status, message } => {
                if message.is_empty() {
                    format!("The server rejected the request (HTTP {})", status)
                } else {
                    message.clone()
                }
            }
            AppError::Transport(e) => {
                tracing::error!("Network error detected: {:?}", e);
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        AppError::Server {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_falls_back_to_generic_message() {
        let err = AppError::server(500, "");
        assert_eq!(
            err.user_message(),
            "The server rejected the request (HTTP 500)"
        );
    }

    #[test]
    fn server_error_shows_detail_verbatim() {
        let err = AppError::server(400, "Amount must be positive.");
        assert_eq!(err.user_message(), "Amount must be positive.");
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<u32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
