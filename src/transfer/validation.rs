//! Dual Account Validation
//!
//! Validates the source and destination accounts concurrently under one
//! shared deadline. An error from either leg ends the check at once and the
//! other leg is dropped without being awaited. When both accounts are
//! invalid the source is reported.

use std::sync::Arc;

use tokio::time::Instant;
use tracing::debug;

use super::error::TransferError;
use crate::account::AccountValidator;

/// Outcome of validating a (source, destination) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVerdict {
    Valid,
    SourceInvalid,
    DestinationInvalid,
}

impl PairVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, PairVerdict::Valid)
    }

    /// Rejection error for an invalid pair
    pub fn into_result(self) -> Result<(), TransferError> {
        match self {
            PairVerdict::Valid => Ok(()),
            PairVerdict::SourceInvalid => Err(TransferError::source_invalid()),
            PairVerdict::DestinationInvalid => Err(TransferError::destination_invalid()),
        }
    }
}

pub struct DualValidator {
    accounts: Arc<AccountValidator>,
}

impl DualValidator {
    pub fn new(accounts: Arc<AccountValidator>) -> Self {
        Self { accounts }
    }

    /// True iff both accounts are valid
    pub async fn validate_both(
        &self,
        from_account: &str,
        to_account: &str,
        deadline: Instant,
    ) -> Result<bool, TransferError> {
        Ok(self
            .validate_pair(from_account, to_account, deadline)
            .await?
            .is_valid())
    }

    /// Validate both accounts, reporting which one failed.
    ///
    /// The first error from either leg is returned immediately. A source
    /// reporting false ends the race; a destination reporting false waits for
    /// the source so the source is named first. If no verdict is reached before
    /// `deadline`, the pending legs are dropped and `DeadlineExceeded`
    /// is returned.
    pub async fn validate_pair(
        &self,
        from_account: &str,
        to_account: &str,
        deadline: Instant,
    ) -> Result<PairVerdict, TransferError> {
        match tokio::time::timeout_at(deadline, self.race(from_account, to_account)).await {
            Ok(verdict) => verdict,
            Err(_) => {
                debug!(from = %from_account, to = %to_account, "Validation deadline elapsed");
                Err(TransferError::DeadlineExceeded)
            }
        }
    }

    async fn race(&self, from_account: &str, to_account: &str) -> Result<PairVerdict, TransferError> {
        // Transfer-time validation is identifier-only
        let source = self.accounts.validate(from_account, None);
        let destination = self.accounts.validate(to_account, None);
        tokio::pin!(source);
        tokio::pin!(destination);

        let mut source_done = false;
        let mut destination_valid = None;

        // A destination false waits on the source; a source false wins outright
        while !(source_done && destination_valid.is_some()) {
            tokio::select! {
                valid = &mut source, if !source_done => {
                    if !valid? {
                        return Ok(PairVerdict::SourceInvalid);
                    }
                    source_done = true;
                }
                valid = &mut destination, if destination_valid.is_none() => {
                    let valid = valid?;
                    if !valid && source_done {
                        return Ok(PairVerdict::DestinationInvalid);
                    }
                    destination_valid = Some(valid);
                }
            }
        }

        if destination_valid == Some(false) {
            return Ok(PairVerdict::DestinationInvalid);
        }
        Ok(PairVerdict::Valid)
    }
}
