//! Domain-level constants.
//!
//! Demo records used to seed a directory when no seed file is configured.

// =============================================================================
// Demo users
// =============================================================================

/// Identifier of the first demo user
pub const DEMO_IVAN_ID: i32 = 1;

/// Username of the first demo user
pub const DEMO_IVAN_USERNAME: &str = "Ivan";

/// Password of the first demo user
pub const DEMO_IVAN_PASSWORD: &str = "123";

/// Identifier of the second demo user
pub const DEMO_PETR_ID: i32 = 2;

/// Username of the second demo user
pub const DEMO_PETR_USERNAME: &str = "Petr";

/// Password of the second demo user
pub const DEMO_PETR_PASSWORD: &str = "111";

// =============================================================================
// Error messages
// =============================================================================

/// Raised when login is attempted without a username or password
pub const MSG_MISSING_CREDENTIALS: &str = "username or password is null";
