//! Domain layer - Core user entity and credential rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the directory service and its outer surfaces.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{Credentials, User};
