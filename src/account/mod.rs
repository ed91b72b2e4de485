//! Account module
//!
//! Local account rows and the account validator that combines provider
//! existence with the local (number, name) match.

pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use models::Account;
pub use repository::{AccountRepository, AccountStore};
pub use validation::AccountValidator;

// Re-export Database from top-level db module
pub use crate::db::Database;
