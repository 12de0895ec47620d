//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    CONFIG_DIR_NAME, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, SESSION_FILE_NAME,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API
    pub api_base_url: String,
    /// Fixed timeout applied to every request
    pub http_timeout_secs: u64,
    /// Where the session token pair is persisted between invocations
    pub session_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }
}

/// Platform config dir, falling back to the working directory when the
/// platform gives us nothing (containers, stripped-down CI images).
fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(SESSION_FILE_NAME)
}
