//! Transfer Coordinator
//!
//! Drives one create-transfer request through its phases:
//!
//! ```text
//! VALIDATING → SETTLING → RECORDING → DONE
//!      ↓           ↓           ↓
//!  rejected      failed      failed (funds moved, reconcile)
//! ```
//!
//! Validation strictly precedes settlement, which strictly precedes the
//! local write. No local state exists until the provider has accepted the
//! transfer.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::db::TransferLedger;
use super::error::TransferError;
use super::state::Phase;
use super::types::{TransferRecord, TransferRequest};
use super::validation::DualValidator;
use crate::settlement::SettlementClient;

pub struct TransferCoordinator {
    validator: Arc<DualValidator>,
    settlement: Arc<dyn SettlementClient>,
    ledger: Arc<dyn TransferLedger>,
    validation_timeout: Duration,
}

impl TransferCoordinator {
    pub fn new(
        validator: Arc<DualValidator>,
        settlement: Arc<dyn SettlementClient>,
        ledger: Arc<dyn TransferLedger>,
        validation_timeout: Duration,
    ) -> Self {
        Self {
            validator,
            settlement,
            ledger,
            validation_timeout,
        }
    }

    /// Validate, settle, then record a transfer.
    ///
    /// Returns the committed PENDING record. The status moves on only when
    /// the provider's callback arrives.
    pub async fn create_transfer(
        &self,
        req: TransferRequest,
    ) -> Result<TransferRecord, TransferError> {
        req.check()?;

        let from = req.from_account.as_str();
        let to = req.to_account.as_str();

        // === VALIDATING ===
        let deadline = Instant::now() + self.validation_timeout;
        let verdict = self
            .validator
            .validate_pair(from, to, deadline)
            .await
            .inspect_err(|e| {
                warn!(
                    phase = %Phase::Validating,
                    from = %from,
                    to = %to,
                    retryable = e.is_retryable(),
                    error = %e,
                    "Account validation failed"
                );
            })?;
        if let Err(e) = verdict.into_result() {
            warn!(phase = %Phase::Validating, from = %from, to = %to, reason = %e, "Transfer rejected");
            return Err(e);
        }

        // === SETTLING ===
        let receipt = self
            .settlement
            .transfer(from, to, req.amount)
            .await
            .map_err(|e| TransferError::settlement(format!("transfer {} -> {}", from, to), e))
            .inspect_err(|e| {
                error!(phase = %Phase::Settling, from = %from, to = %to, error = %e, "Settlement failed");
            })?;

        // === RECORDING ===
        let transaction_id = receipt.transaction_id;
        let record = self
            .ledger
            .record_transfer(from, to, req.amount, &transaction_id)
            .await
            .inspect_err(|e| {
                // Funds already moved at the provider
                error!(
                    phase = %Phase::Recording,
                    transaction_id = %transaction_id,
                    from = %from,
                    to = %to,
                    amount = %req.amount,
                    error = %e,
                    "Settled transfer not recorded, needs reconciliation"
                );
            })?;

        info!(
            phase = %Phase::Done,
            transfer_id = %record.id,
            transaction_id = %record.transaction_id,
            amount = %record.amount,
            "Transfer created: {} -> {}", from, to
        );

        Ok(record)
    }

    /// Get a stored transfer by id
    pub async fn get_transfer(&self, id: Uuid) -> Result<TransferRecord, TransferError> {
        self.ledger
            .get(id)
            .await?
            .ok_or_else(|| TransferError::TransferNotFound(id.to_string()))
    }
}
