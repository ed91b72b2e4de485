//! Callback Handler
//!
//! Applies provider status notifications to PENDING transfers. Redelivery of
//! the same notification is harmless: a terminal transfer is never touched
//! again, and concurrent deliveries race through a compare-and-set update.

use std::sync::Arc;

use tracing::{info, warn};

use super::db::TransferLedger;
use super::error::TransferError;
use super::state::TransferStatus;
use super::types::CallbackOutcome;
use super::worker::{AckJob, AckSender};

pub struct CallbackHandler {
    ledger: Arc<dyn TransferLedger>,
    acks: AckSender,
}

impl CallbackHandler {
    pub fn new(ledger: Arc<dyn TransferLedger>, acks: AckSender) -> Self {
        Self { ledger, acks }
    }

    /// Apply one provider notification.
    ///
    /// `status` uses the provider vocabulary (see [`TransferStatus::from_provider`]).
    /// An acknowledgment is queued for every accepted notification,
    /// duplicates included; its delivery never affects the result.
    pub async fn handle_callback(
        &self,
        transaction_id: &str,
        status: &str,
    ) -> Result<CallbackOutcome, TransferError> {
        let new_status = TransferStatus::from_provider(status)
            .ok_or_else(|| TransferError::CallbackInvalidStatus(status.to_string()))?;

        let record = self
            .ledger
            .get_by_transaction_id(transaction_id)
            .await?
            .ok_or_else(|| TransferError::CallbackUnknownTransaction(transaction_id.to_string()))?;

        let outcome = if !record.status.can_transition_to(new_status) {
            CallbackOutcome::Duplicate(record.status)
        } else if self
            .ledger
            .update_status_if(transaction_id, TransferStatus::Pending, new_status)
            .await?
        {
            CallbackOutcome::Applied(new_status)
        } else {
            // Lost the race to a concurrent delivery
            let current = self
                .ledger
                .get_by_transaction_id(transaction_id)
                .await?
                .map(|r| r.status)
                .unwrap_or(new_status);
            CallbackOutcome::Duplicate(current)
        };

        match outcome {
            CallbackOutcome::Applied(status) => {
                info!(
                    transaction_id = %transaction_id,
                    transfer_id = %record.id,
                    status = %status,
                    "Transfer status updated"
                );
            }
            CallbackOutcome::Duplicate(current) => {
                if current != new_status {
                    warn!(
                        transaction_id = %transaction_id,
                        current = %current,
                        reported = %new_status,
                        "Callback conflicts with terminal status, ignoring"
                    );
                } else {
                    info!(
                        transaction_id = %transaction_id,
                        status = %current,
                        "Duplicate callback ignored"
                    );
                }
            }
        }

        self.acks.enqueue(AckJob {
            transaction_id: transaction_id.to_string(),
            status: outcome.status(),
        });

        Ok(outcome)
    }
}
