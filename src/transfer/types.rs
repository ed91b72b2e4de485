//! Transfer Core Types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::error::TransferError;
use super::state::TransferStatus;

/// Transfer request as seen by the orchestrator.
///
/// Accounts are identified by account number; names are not part of the
/// transfer-time check.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(from_account: impl Into<String>, to_account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            amount,
        }
    }

    /// Input checks that need no I/O
    pub fn check(&self) -> Result<(), TransferError> {
        if self.from_account.trim().is_empty() || self.to_account.trim().is_empty() {
            return Err(TransferError::InvalidAccountNumber);
        }
        if self.amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        if self.from_account == self.to_account {
            return Err(TransferError::SameAccount);
        }
        Ok(())
    }
}

/// Persisted transfer row
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TransferRecord {
    pub id: Uuid,
    pub from_account_id: Uuid,
    pub to_account_id: Uuid,
    pub amount: Decimal,
    #[sqlx(try_from = "String")]
    pub status: TransferStatus,
    /// External transaction id (unique)
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransferRecord {
    /// New PENDING record for a settled transfer
    pub fn pending(
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount: Decimal,
        transaction_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            from_account_id,
            to_account_id,
            amount,
            status: TransferStatus::Pending,
            transaction_id: transaction_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Result of applying one status callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// PENDING moved to the reported terminal status
    Applied(TransferStatus),
    /// Transfer was already terminal; nothing changed
    Duplicate(TransferStatus),
}

impl CallbackOutcome {
    pub fn status(&self) -> TransferStatus {
        match self {
            CallbackOutcome::Applied(s) | CallbackOutcome::Duplicate(s) => *s,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, CallbackOutcome::Duplicate(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_request_check() {
        assert!(TransferRequest::new("111", "222", amount("100.00")).check().is_ok());

        assert!(matches!(
            TransferRequest::new("111", "222", Decimal::ZERO).check(),
            Err(TransferError::InvalidAmount)
        ));
        assert!(matches!(
            TransferRequest::new("111", "222", amount("-1")).check(),
            Err(TransferError::InvalidAmount)
        ));
        assert!(matches!(
            TransferRequest::new("111", "111", amount("1")).check(),
            Err(TransferError::SameAccount)
        ));
        assert!(matches!(
            TransferRequest::new(" ", "222", amount("1")).check(),
            Err(TransferError::InvalidAccountNumber)
        ));
    }

    #[test]
    fn test_pending_record() {
        let from = Uuid::new_v4();
        let to = Uuid::new_v4();
        let record = TransferRecord::pending(from, to, amount("100.00"), "TX-1");
        assert_eq!(record.status, TransferStatus::Pending);
        assert_eq!(record.from_account_id, from);
        assert_eq!(record.transaction_id, "TX-1");
        assert_eq!(record.amount, amount("100.00"));
    }
}
