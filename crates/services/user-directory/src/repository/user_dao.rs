//! User persistence collaborator.

use std::collections::HashSet;
use std::sync::Mutex;

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence boundary consumed by the directory.
///
/// The directory treats implementations as opaque: results and errors are
/// handed back to the caller untouched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserDao: Send + Sync {
    /// Delete the user with the given id, reporting whether anything was removed
    fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Process-local collaborator that remembers which ids are stored.
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    ids: Mutex<HashSet<i32>>,
}

impl InMemoryUserDao {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds the given ids
    pub fn with_ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().collect()),
        }
    }

    /// Whether the id is still stored
    pub fn contains(&self, id: i32) -> AppResult<bool> {
        let ids = self
            .ids
            .lock()
            .map_err(|_| AppError::internal("user id store lock poisoned"))?;
        Ok(ids.contains(&id))
    }
}

impl UserDao for InMemoryUserDao {
    fn delete(&self, id: i32) -> AppResult<bool> {
        let mut ids = self
            .ids
            .lock()
            .map_err(|_| AppError::internal("user id store lock poisoned"))?;
        let removed = ids.remove(&id);
        tracing::debug!(id, removed, "in-memory delete");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_known_id_once() {
        let dao = InMemoryUserDao::with_ids([1, 2]);

        assert!(dao.delete(1).unwrap());
        assert!(!dao.delete(1).unwrap());
        assert!(!dao.contains(1).unwrap());
        assert!(dao.contains(2).unwrap());
    }

    #[test]
    fn test_delete_unknown_id() {
        let dao = InMemoryUserDao::new();

        assert!(!dao.delete(42).unwrap());
    }
}
