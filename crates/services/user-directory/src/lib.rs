//! User Directory Library
//!
//! An in-memory user directory with credential lookup, backed by a
//! replaceable persistence collaborator for deletes.
//! It can be driven from the `user-directory` binary or embedded directly.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::config::UserDirectoryConfig;
use crate::repository::InMemoryUserDao;
use crate::service::UserDirectory;

/// Build a directory seeded from configuration.
///
/// The in-memory collaborator starts out holding every seeded id.
pub fn bootstrap(config: &UserDirectoryConfig) -> AppResult<UserDirectory> {
    let users = config.seed_users()?;

    let dao = Arc::new(InMemoryUserDao::with_ids(users.iter().map(|u| u.id)));
    let mut directory = UserDirectory::new(dao);
    directory.add(users);

    info!(users = directory.len(), "user directory ready");
    Ok(directory)
}
