//! Settlement Provider Client
//!
//! The provider is the system of record for moving funds. Three operations
//! are exposed: account validation, transfer execution, and the callback
//! acknowledgment. Every request carries the configured bearer credential.

pub mod client;
pub mod error;

pub use client::HttpSettlementClient;
pub use error::SettlementError;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::transfer::state::TransferStatus;

/// Result of a successful provider transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReceipt {
    /// External transaction id used to correlate later callbacks
    pub transaction_id: String,
}

/// Settlement provider operations
#[async_trait]
pub trait SettlementClient: Send + Sync {
    /// Ask the provider whether an account number exists
    async fn validate(&self, account_number: &str) -> Result<bool, SettlementError>;

    /// Move funds. Any non-200 answer is a failure; there is no partial success.
    async fn transfer(
        &self,
        from_account: &str,
        to_account: &str,
        amount: Decimal,
    ) -> Result<SettlementReceipt, SettlementError>;

    /// Acknowledge a processed status notification
    async fn callback(
        &self,
        transaction_id: &str,
        status: TransferStatus,
    ) -> Result<(), SettlementError>;
}

/// Mock provider for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    pub struct MockSettlementClient {
        valid_accounts: Mutex<HashSet<String>>,
        /// Accounts whose validation returns a transport error
        erroring_accounts: Mutex<HashSet<String>>,
        /// Artificial latency per account for validation
        delays: Mutex<HashMap<String, Duration>>,
        fail_transfer: AtomicBool,
        fail_callback: AtomicBool,
        /// Transaction id to hand out on the next transfer
        next_transaction_id: Mutex<Option<String>>,
        validate_count: AtomicUsize,
        transfer_count: AtomicUsize,
        callback_count: AtomicUsize,
        acknowledged: Mutex<Vec<(String, TransferStatus)>>,
    }

    impl MockSettlementClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_valid_accounts(accounts: &[&str]) -> Self {
            let mock = Self::new();
            for account in accounts {
                mock.add_valid_account(account);
            }
            mock
        }

        pub fn add_valid_account(&self, account: &str) {
            self.valid_accounts
                .lock()
                .unwrap()
                .insert(account.to_string());
        }

        pub fn set_validate_error(&self, account: &str) {
            self.erroring_accounts
                .lock()
                .unwrap()
                .insert(account.to_string());
        }

        pub fn set_validate_delay(&self, account: &str, delay: Duration) {
            self.delays
                .lock()
                .unwrap()
                .insert(account.to_string(), delay);
        }

        pub fn set_fail_transfer(&self, fail: bool) {
            self.fail_transfer.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_callback(&self, fail: bool) {
            self.fail_callback.store(fail, Ordering::SeqCst);
        }

        pub fn set_next_transaction_id(&self, transaction_id: &str) {
            *self.next_transaction_id.lock().unwrap() = Some(transaction_id.to_string());
        }

        pub fn validate_count(&self) -> usize {
            self.validate_count.load(Ordering::SeqCst)
        }

        pub fn transfer_count(&self) -> usize {
            self.transfer_count.load(Ordering::SeqCst)
        }

        pub fn callback_count(&self) -> usize {
            self.callback_count.load(Ordering::SeqCst)
        }

        pub fn acknowledged(&self) -> Vec<(String, TransferStatus)> {
            self.acknowledged.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SettlementClient for MockSettlementClient {
        async fn validate(&self, account_number: &str) -> Result<bool, SettlementError> {
            self.validate_count.fetch_add(1, Ordering::SeqCst);

            let delay = self.delays.lock().unwrap().get(account_number).copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            if self
                .erroring_accounts
                .lock()
                .unwrap()
                .contains(account_number)
            {
                return Err(SettlementError::Transport {
                    operation: "validate",
                    message: "mock connection reset".to_string(),
                });
            }

            Ok(self.valid_accounts.lock().unwrap().contains(account_number))
        }

        async fn transfer(
            &self,
            _from_account: &str,
            _to_account: &str,
            _amount: Decimal,
        ) -> Result<SettlementReceipt, SettlementError> {
            self.transfer_count.fetch_add(1, Ordering::SeqCst);

            if self.fail_transfer.load(Ordering::SeqCst) {
                return Err(SettlementError::Rejected {
                    operation: "transfer",
                    status: 422,
                });
            }

            let transaction_id = self
                .next_transaction_id
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| ulid::Ulid::new().to_string());
            Ok(SettlementReceipt { transaction_id })
        }

        async fn callback(
            &self,
            transaction_id: &str,
            status: TransferStatus,
        ) -> Result<(), SettlementError> {
            self.callback_count.fetch_add(1, Ordering::SeqCst);

            if self.fail_callback.load(Ordering::SeqCst) {
                return Err(SettlementError::Rejected {
                    operation: "callback",
                    status: 503,
                });
            }

            self.acknowledged
                .lock()
                .unwrap()
                .push((transaction_id.to_string(), status));
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_validate() {
            let mock = MockSettlementClient::with_valid_accounts(&["111"]);
            assert!(mock.validate("111").await.unwrap());
            assert!(!mock.validate("222").await.unwrap());
            assert_eq!(mock.validate_count(), 2);

            mock.set_validate_error("333");
            assert!(mock.validate("333").await.is_err());
        }

        #[tokio::test]
        async fn test_mock_transfer_failure() {
            let mock = MockSettlementClient::new();
            mock.set_fail_transfer(true);
            let result = mock.transfer("1", "2", Decimal::ONE).await;
            assert!(matches!(result, Err(SettlementError::Rejected { .. })));
            assert_eq!(mock.transfer_count(), 1);
        }
    }
}

#[cfg(test)]
pub use mock::MockSettlementClient;
