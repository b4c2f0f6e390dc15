//! User directory configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use common::{AppError, AppResult, ServiceConfig};
use domain::User;

/// Name reported in logs
pub const SERVICE_NAME: &str = "user-directory";

/// Environment variable naming a JSON seed file
pub const ENV_SEED_FILE: &str = "USER_DIRECTORY_SEED_FILE";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "USER_DIRECTORY_LOG_LEVEL";

/// User directory configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectoryConfig {
    /// Shared service settings
    pub service: ServiceConfig,
    /// JSON array of users to seed the directory with
    pub seed_file: Option<PathBuf>,
}

impl UserDirectoryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut service = ServiceConfig::named(SERVICE_NAME);
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            service.log_level = level;
        }

        Self {
            service,
            seed_file: lookup(ENV_SEED_FILE)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Replace the seed file (command-line override)
    pub fn with_seed_file(mut self, seed_file: Option<PathBuf>) -> Self {
        if seed_file.is_some() {
            self.seed_file = seed_file;
        }
        self
    }

    /// Users to start the directory with.
    ///
    /// Falls back to the demo users when no seed file is configured.
    pub fn seed_users(&self) -> AppResult<Vec<User>> {
        match &self.seed_file {
            Some(path) => read_seed_file(path),
            None => Ok(User::demo_users()),
        }
    }
}

impl Default for UserDirectoryConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named(SERVICE_NAME),
            seed_file: None,
        }
    }
}

fn read_seed_file(path: &Path) -> AppResult<Vec<User>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("cannot read seed file {}: {}", path.display(), e)))?;
    let users: Vec<User> = serde_json::from_str(&raw)
        .map_err(|e| AppError::config(format!("invalid seed file {}: {}", path.display(), e)))?;
    tracing::info!(count = users.len(), path = %path.display(), "loaded seed users");
    Ok(users)
}
