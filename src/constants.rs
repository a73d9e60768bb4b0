//! Application-wide constants

use std::path::PathBuf;

/// Event poll timeout in milliseconds
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Spinner animation interval in milliseconds
pub const SPINNER_TICK_MS: u128 = 100;

/// Channel buffer size for submission messages
pub const SUBMIT_CHANNEL_SIZE: usize = 16;

/// Maximum length for user text input (prevents memory exhaustion)
pub const MAX_INPUT_LENGTH: usize = 100;

/// Minimum length for password and confirmation
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Submission endpoint
// =============================================================================

/// Default submission endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3000/api/submit";

/// Timeout for the submission request (seconds)
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with the submission request
pub const DEFAULT_USER_AGENT: &str = "signup-wizard";

// =============================================================================
// Paths
// =============================================================================

/// Log file name inside the data directory
pub const LOG_FILE: &str = "signup.log";

/// Directory for log files
pub fn signup_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".local/share/signup"))
        .unwrap_or_else(|| PathBuf::from("/tmp/signup"))
}
