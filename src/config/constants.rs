//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Number of rows per page on every list view
pub const PAGE_SIZE: u64 = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Backend API
// =============================================================================

/// Default backend base URL (for development)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed client-side timeout; past this the call is a transport failure
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Accept header sent when requesting a generated report blob
pub const REPORT_ACCEPT: &str =
    "application/json, application/vnd.openxmlformats-officedocument.spreadsheetml.sheet, text/csv";

// =============================================================================
// Staff Roles
// =============================================================================

/// Regular administrator role
pub const ROLE_ADMIN: &str = "admin";

/// Super-administrator role with full management privileges
pub const ROLE_SUPERADMIN: &str = "superadmin";

// =============================================================================
// Session
// =============================================================================

/// File name for the persisted token pair inside the config directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "dusangire-admin";

// =============================================================================
// Entity defaults
// =============================================================================

/// Placeholder used when a school is created without district/sector
pub const UNKNOWN_LOCATION: &str = "Unknown";
