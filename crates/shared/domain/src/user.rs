//! User domain entity and login credentials.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEMO_IVAN_ID, DEMO_IVAN_PASSWORD, DEMO_IVAN_USERNAME, DEMO_PETR_ID, DEMO_PETR_PASSWORD,
    DEMO_PETR_USERNAME, MSG_MISSING_CREDENTIALS,
};
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Equality is structural over all three fields. The password is stored as
/// plaintext and is never serialized back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a new user
    pub fn new(id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check whether this user is identified by the given credentials.
    ///
    /// Username is compared first, then password. Both comparisons are exact
    /// and case-sensitive.
    pub fn matches(&self, credentials: &Credentials<'_>) -> bool {
        self.username == credentials.username && self.password == credentials.password
    }

    /// The two users seeded into a directory when nothing else is configured
    pub fn demo_users() -> Vec<User> {
        vec![
            User::new(DEMO_IVAN_ID, DEMO_IVAN_USERNAME, DEMO_IVAN_PASSWORD),
            User::new(DEMO_PETR_ID, DEMO_PETR_USERNAME, DEMO_PETR_PASSWORD),
        ]
    }
}

/// A username/password pair that is known to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    /// Build credentials from possibly absent parts.
    ///
    /// Fails with `InvalidArgument` when either part is missing. Empty strings
    /// are present values and are accepted.
    pub fn new(username: Option<&'a str>, password: Option<&'a str>) -> DomainResult<Self> {
        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(DomainError::invalid_argument(MSG_MISSING_CREDENTIALS)),
        }
    }
}
