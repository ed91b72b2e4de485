//! Money API - Bank Transfer Orchestration
//!
//! Validates both accounts of a transfer concurrently, settles the transfer
//! with an external provider, and records it in a PostgreSQL ledger.
//! Provider callbacks later move the transfer to its terminal status.
//!
//! # Modules
//!
//! - [`account`] - Account rows and the account validator
//! - [`settlement`] - Settlement provider client
//! - [`transfer`] - Dual validation, orchestration, ledger writes, callbacks
//! - [`gateway`] - HTTP routes
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod settlement;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountValidator};
pub use config::AppConfig;
pub use settlement::{HttpSettlementClient, SettlementClient, SettlementError};
pub use transfer::{
    CallbackOutcome, TransferCoordinator, TransferError, TransferRecord, TransferRequest,
    TransferStatus,
};
