//! Application services layer.
//!
//! Services hold in-memory state and depend on repository traits for
//! everything that leaves the process.

mod user_directory;

pub use user_directory::UserDirectory;
