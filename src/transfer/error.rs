//! Transfer Error Types

use thiserror::Error;

use crate::settlement::SettlementError;

/// Transfer orchestration and callback errors
///
/// Messages only echo identifiers the caller already supplied.
#[derive(Error, Debug, Clone)]
pub enum TransferError {
    // === Input Errors ===
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Account number must not be empty")]
    InvalidAccountNumber,

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    // === Validation ===
    #[error("{0} account invalid")]
    ValidationFailure(&'static str),

    #[error("Account validation deadline exceeded")]
    DeadlineExceeded,

    // === Settlement ===
    #[error("Settlement failed: {0}")]
    SettlementFailure(String),

    // === Ledger ===
    #[error("Account record missing: {0}")]
    AccountRecordMissing(String),

    #[error("Transaction id already recorded: {0}")]
    DuplicateTransaction(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    // === Callback ===
    #[error("Unknown transaction: {0}")]
    CallbackUnknownTransaction(String),

    #[error("Invalid callback status: {0}")]
    CallbackInvalidStatus(String),

    #[error("Transfer not found: {0}")]
    TransferNotFound(String),
}

impl TransferError {
    /// Source leg reported the account invalid
    pub fn source_invalid() -> Self {
        TransferError::ValidationFailure("source")
    }

    /// Destination leg reported the account invalid
    pub fn destination_invalid() -> Self {
        TransferError::ValidationFailure("destination")
    }

    /// Wrap a provider error with the account or transfer it concerned
    pub fn settlement(context: impl std::fmt::Display, e: SettlementError) -> Self {
        TransferError::SettlementFailure(format!("{}: {}", context, e))
    }

    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::InvalidAccountNumber => "INVALID_ACCOUNT_NUMBER",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::ValidationFailure(_) => "VALIDATION_FAILURE",
            TransferError::DeadlineExceeded => "DEADLINE_EXCEEDED",
            TransferError::SettlementFailure(_) => "SETTLEMENT_FAILURE",
            TransferError::AccountRecordMissing(_) => "ACCOUNT_RECORD_MISSING",
            TransferError::DuplicateTransaction(_) => "DUPLICATE_TRANSACTION",
            TransferError::PersistenceFailure(_) => "PERSISTENCE_FAILURE",
            TransferError::CallbackUnknownTransaction(_) => "CALLBACK_UNKNOWN_TRANSACTION",
            TransferError::CallbackInvalidStatus(_) => "CALLBACK_INVALID_STATUS",
            TransferError::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
        }
    }

    /// HTTP status for the create-transfer and callback routes.
    ///
    /// Only malformed input is a client error; validation, settlement and
    /// persistence failures all surface as 500.
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount
            | TransferError::InvalidAccountNumber
            | TransferError::SameAccount => 400,
            TransferError::TransferNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Message for a response body.
    ///
    /// Echoes only values the caller sent. Provider URLs, driver text and
    /// provider-assigned transaction ids stay in `Display` for the logs.
    pub fn public_message(&self) -> String {
        match self {
            TransferError::InvalidAmount
            | TransferError::InvalidAccountNumber
            | TransferError::SameAccount
            | TransferError::ValidationFailure(_)
            | TransferError::DeadlineExceeded => self.to_string(),
            TransferError::SettlementFailure(_) => "Settlement provider request failed".to_string(),
            TransferError::AccountRecordMissing(account) => {
                format!("Account record missing: {}", account)
            }
            TransferError::DuplicateTransaction(_) | TransferError::PersistenceFailure(_) => {
                "Transfer could not be recorded".to_string()
            }
            TransferError::CallbackUnknownTransaction(transaction_id) => {
                format!("Unknown transaction: {}", transaction_id)
            }
            TransferError::CallbackInvalidStatus(status) => {
                format!("Invalid callback status: {}", status)
            }
            TransferError::TransferNotFound(id) => format!("Transfer not found: {}", id),
        }
    }

    /// Caller may retry the same request later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransferError::DeadlineExceeded | TransferError::PersistenceFailure(_)
        )
    }
}

impl From<sqlx::Error> for TransferError {
    fn from(e: sqlx::Error) -> Self {
        TransferError::PersistenceFailure(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::SameAccount.code(), "SAME_ACCOUNT");
        assert_eq!(TransferError::DeadlineExceeded.code(), "DEADLINE_EXCEEDED");
        assert_eq!(
            TransferError::CallbackUnknownTransaction("TX".into()).code(),
            "CALLBACK_UNKNOWN_TRANSACTION"
        );
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::source_invalid().http_status(), 500);
        assert_eq!(TransferError::DeadlineExceeded.http_status(), 500);
        assert_eq!(TransferError::TransferNotFound("x".into()).http_status(), 404);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TransferError::source_invalid().to_string(),
            "source account invalid"
        );
        assert_eq!(
            TransferError::destination_invalid().to_string(),
            "destination account invalid"
        );
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let err = TransferError::settlement(
            "validate account 222",
            SettlementError::Transport {
                operation: "validate",
                message: "error sending request for url (http://10.0.0.7/internal/validate)".into(),
            },
        );
        assert!(err.to_string().contains("10.0.0.7"));
        assert_eq!(err.public_message(), "Settlement provider request failed");

        let err = TransferError::DuplicateTransaction("EXT-PROVIDER-77".into());
        assert!(!err.public_message().contains("EXT-PROVIDER-77"));

        let err = TransferError::PersistenceFailure("pool timed out: 10.0.0.9:5432".into());
        assert_eq!(err.public_message(), "Transfer could not be recorded");

        // Caller-supplied values are echoed
        assert_eq!(
            TransferError::AccountRecordMissing("999".into()).public_message(),
            "Account record missing: 999"
        );
        assert_eq!(
            TransferError::source_invalid().public_message(),
            "source account invalid"
        );
    }

    #[test]
    fn test_settlement_context() {
        let err = TransferError::settlement(
            "transfer 111 -> 222",
            SettlementError::Rejected {
                operation: "transfer",
                status: 400,
            },
        );
        assert_eq!(
            err.to_string(),
            "Settlement failed: transfer 111 -> 222: settlement provider rejected transfer (HTTP 400)"
        );
        assert!(!err.is_retryable());
    }
}
