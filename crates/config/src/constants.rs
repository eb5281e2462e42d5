//! Centralized constants for the scanidcard workspace.
//!
//! Key names are matched case-sensitively against `.env` entries.

// =============================================================================
// .env file
// =============================================================================

/// File name of the dotenv file looked up at the workspace root.
pub const DOTENV_FILE_NAME: &str = ".env";

// =============================================================================
// Recognized keys
// =============================================================================

/// Primary key for the Tencent Cloud secret identifier.
pub const KEY_SECRET_ID: &str = "SecretId";

/// Alias key for the Tencent Cloud secret identifier.
pub const KEY_SECRET_ID_ALIAS: &str = "TENCENT_SECRET_ID";

/// Primary key for the Tencent Cloud secret key.
pub const KEY_SECRET_KEY: &str = "SecretKey";

/// Alias key for the Tencent Cloud secret key.
pub const KEY_SECRET_KEY_ALIAS: &str = "TENCENT_SECRET_KEY";

/// Primary key for the API region.
pub const KEY_REGION: &str = "Region";

/// Alias key for the API region.
pub const KEY_REGION_ALIAS: &str = "TENCENT_REGION";

// =============================================================================
// Defaults
// =============================================================================

/// Region used when neither region key is present.
pub const DEFAULT_REGION: &str = "ap-guangzhou";

// =============================================================================
// Generated constant names
// =============================================================================

/// Name of the generated secret identifier constant.
pub const CONST_SECRET_ID: &str = "TENCENT_SECRET_ID";

/// Name of the generated secret key constant.
pub const CONST_SECRET_KEY: &str = "TENCENT_SECRET_KEY";

/// Name of the generated region constant.
pub const CONST_REGION: &str = "TENCENT_REGION";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Default TCP connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;

/// Default value of the `X-TC-Language` header.
pub const DEFAULT_LANGUAGE: &str = "zh-CN";
