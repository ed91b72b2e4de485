//! Account Validator
//!
//! An account is valid when the settlement provider knows its number and,
//! if a name was supplied, the local ledger holds a row with that exact
//! (number, name) pair.

use std::sync::Arc;

use tracing::debug;

use super::repository::AccountStore;
use crate::settlement::SettlementClient;
use crate::transfer::error::TransferError;

pub struct AccountValidator {
    settlement: Arc<dyn SettlementClient>,
    accounts: Arc<dyn AccountStore>,
}

impl AccountValidator {
    pub fn new(settlement: Arc<dyn SettlementClient>, accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            settlement,
            accounts,
        }
    }

    /// Validate an account.
    ///
    /// A blank or missing `account_name` skips the local lookup. Provider
    /// rejection short-circuits before any local query. A missing local row
    /// is `Ok(false)`; only storage or provider faults are errors.
    pub async fn validate(
        &self,
        account_number: &str,
        account_name: Option<&str>,
    ) -> Result<bool, TransferError> {
        if account_number.trim().is_empty() {
            return Err(TransferError::InvalidAccountNumber);
        }

        let known = self
            .settlement
            .validate(account_number)
            .await
            .map_err(|e| TransferError::settlement(format!("validate account {}", account_number), e))?;

        if !known {
            debug!(account = %account_number, "Provider does not recognise account");
            return Ok(false);
        }

        // Whitespace-only counts as absent; any other name is matched exactly
        let Some(name) = account_name.filter(|n| !n.trim().is_empty()) else {
            return Ok(true);
        };

        let found = self
            .accounts
            .find_by_number_and_name(account_number, name)
            .await?
            .is_some();

        if !found {
            debug!(account = %account_number, "No local account with matching name");
        }
        Ok(found)
    }
}
