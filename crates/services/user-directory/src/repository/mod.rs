//! Repository layer - persistence collaborators of the directory.

mod user_dao;

pub use user_dao::{InMemoryUserDao, UserDao};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_dao::MockUserDao;
