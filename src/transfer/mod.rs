//! Transfer Orchestration
//!
//! Moves money between two bank accounts through an external settlement
//! provider and keeps a local ledger of every settled transfer.
//!
//! # Flow
//!
//! ```text
//! create-transfer:  validate both accounts ─┬─> settle ─> record PENDING
//!                   (concurrent, deadline)  │
//!                                           └─> reject (no provider call)
//!
//! callback:         PENDING ──> COMPLETED | FAILED   (once; redelivery is a no-op)
//!                            └─> ack queued for the provider
//! ```
//!
//! # Invariants
//!
//! 1. **No write before settlement**: a transfer row exists only for transfers
//!    the provider accepted
//! 2. **Atomic recording**: account lookups and the insert share one database
//!    transaction
//! 3. **Monotone status**: only PENDING moves, and only once
//! 4. **Unique transaction id**: enforced by storage

pub mod api;
pub mod callback;
pub mod coordinator;
pub mod db;
pub mod error;
pub mod state;
pub mod types;
pub mod validation;
pub mod worker;


// Re-exports for convenience
pub use api::{CallbackRequest, CreateTransferRequest, TransferResponse};
pub use callback::CallbackHandler;
pub use coordinator::TransferCoordinator;
pub use db::{TransferDb, TransferLedger};
pub use error::TransferError;
pub use state::{Phase, TransferStatus};
pub use types::{CallbackOutcome, TransferRecord, TransferRequest};
pub use validation::{DualValidator, PairVerdict};
pub use worker::{AckJob, AckSender, AckStats, AckWorker};
