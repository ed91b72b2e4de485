//! HTTP handlers

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{ValidateAccountParams, validate_account};
pub use health::{HealthResponse, PingDbResponse, health_check, ping_db};
pub use transfer::{create_transfer, get_transfer, transfer_callback};
