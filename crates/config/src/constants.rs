//! Centralized constants for the GoCD client workspace.
//!
//! Default values shared by the config loader and the client builder.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default GoCD server address (stock install, plain HTTP port).
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8153/go/";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Profile File
// =============================================================================

/// Profile used when none is selected explicitly.
pub const DEFAULT_PROFILE: &str = "default";

/// Name of the profile file inside the user's home directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".gocd.conf";
