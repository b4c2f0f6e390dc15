//! User directory - in-memory user records with credential lookup.
//!
//! Deletion is delegated to the persistence collaborator and does not touch
//! the in-memory records.

use std::collections::HashMap;
use std::sync::Arc;

use common::AppResult;
use domain::{Credentials, User};

use crate::repository::UserDao;

/// Ordered, in-memory collection of users backed by a persistence collaborator.
pub struct UserDirectory {
    users: Vec<User>,
    dao: Arc<dyn UserDao>,
}

impl UserDirectory {
    /// Create an empty directory delegating deletes to `dao`
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self {
            users: Vec::new(),
            dao,
        }
    }

    /// Append users in the order given. Duplicates are kept.
    pub fn add(&mut self, users: impl IntoIterator<Item = User>) {
        let before = self.users.len();
        self.users.extend(users);
        tracing::debug!(added = self.users.len() - before, total = self.users.len(), "users added");
    }

    /// Delete through the collaborator and return its answer verbatim.
    pub fn delete(&self, id: i32) -> AppResult<bool> {
        tracing::debug!(id, "delegating delete");
        self.dao.delete(id)
    }

    /// Live view of every user, in insertion order
    pub fn get_all(&self) -> &[User] {
        &self.users
    }

    /// Find the first user, in insertion order, matching both username and password.
    ///
    /// # Errors
    /// `InvalidArgument` when either the username or the password is absent.
    pub fn login(&self, username: Option<&str>, password: Option<&str>) -> AppResult<Option<&User>> {
        let credentials = Credentials::new(username, password)?;
        let found = self.users.iter().find(|user| user.matches(&credentials));
        tracing::debug!(found = found.is_some(), "login lookup");
        Ok(found)
    }

    /// Map every user by id. For duplicate ids the last inserted user wins.
    pub fn get_all_converted_by_id(&self) -> HashMap<i32, User> {
        self.users
            .iter()
            .map(|user| (user.id, user.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;
    use mockall::Sequence;

    use crate::repository::MockUserDao;

    fn ivan() -> User {
        User::new(1, "Ivan", "123")
    }

    fn petr() -> User {
        User::new(2, "Petr", "111")
    }

    fn directory_with(dao: MockUserDao) -> UserDirectory {
        UserDirectory::new(Arc::new(dao))
    }

    #[test]
    fn test_delete_returns_collaborator_answers_in_order() {
        let mut dao = MockUserDao::new();
        let mut seq = Sequence::new();
        dao.expect_delete()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        dao.expect_delete()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let mut directory = directory_with(dao);
        directory.add([ivan()]);

        assert!(directory.delete(1).unwrap());
        assert!(!directory.delete(1).unwrap());
    }

    #[test]
    fn test_delete_keeps_in_memory_users() {
        let mut dao = MockUserDao::new();
        dao.expect_delete().returning(|_| Ok(true));

        let mut directory = directory_with(dao);
        directory.add([ivan(), petr()]);

        assert!(directory.delete(ivan().id).unwrap());
        assert_eq!(directory.get_all(), &[ivan(), petr()]);
    }

    #[test]
    fn test_delete_propagates_collaborator_failure() {
        let mut dao = MockUserDao::new();
        dao.expect_delete()
            .with(eq(7))
            .times(1)
            .returning(|_| Err(AppError::persistence("connection refused")));

        let directory = directory_with(dao);
        let result = directory.delete(7);

        assert_eq!(
            result.unwrap_err(),
            AppError::Persistence("connection refused".to_string())
        );
    }

    #[test]
    fn test_queries_never_reach_collaborator() {
        let mut dao = MockUserDao::new();
        dao.expect_delete().never();

        let mut directory = directory_with(dao);
        directory.add([ivan(), petr()]);

        assert_eq!(directory.len(), 2);
        assert!(directory.login(Some("Ivan"), Some("123")).unwrap().is_some());
        assert_eq!(directory.get_all_converted_by_id().len(), 2);
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = directory_with(MockUserDao::new());

        assert!(directory.is_empty());
        assert!(directory.get_all().is_empty());
        assert!(directory.get_all_converted_by_id().is_empty());
    }

    #[test]
    fn test_login_first_match_wins() {
        let first = User::new(10, "Ivan", "123");
        let second = User::new(11, "Ivan", "123");

        let mut directory = directory_with(MockUserDao::new());
        directory.add([first.clone(), second]);

        assert_eq!(directory.login(Some("Ivan"), Some("123")).unwrap(), Some(&first));
    }

    #[test]
    fn test_login_missing_argument() {
        let directory = directory_with(MockUserDao::new());

        assert!(matches!(
            directory.login(None, Some("dummy")),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            directory.login(Some("dummy"), None),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_converted_by_id_last_insert_wins() {
        let older = User::new(1, "Ivan", "123");
        let newer = User::new(1, "Ivan", "456");

        let mut directory = directory_with(MockUserDao::new());
        directory.add([older, petr()]);
        directory.add([newer.clone()]);

        let by_id = directory.get_all_converted_by_id();

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&1), Some(&newer));
        assert_eq!(by_id.get(&2), Some(&petr()));
        assert_eq!(directory.len(), 3);
    }
}
