//! Transfer API Layer
//!
//! Request and response bodies for the transfer and callback routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::types::{CallbackOutcome, TransferRecord, TransferRequest};
use crate::gateway::types::StrictDecimal;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// API request for creating a transfer
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    /// Source account number
    #[schema(example = "1234567890")]
    pub from_account: String,
    /// Destination account number
    #[schema(example = "0987654321")]
    pub to_account: String,
    /// Amount as string or number; strings keep their scale
    #[schema(value_type = String, example = "100.00")]
    pub amount: StrictDecimal,
}

impl From<CreateTransferRequest> for TransferRequest {
    fn from(req: CreateTransferRequest) -> Self {
        TransferRequest::new(req.from_account, req.to_account, req.amount.inner())
    }
}

/// API response for transfer operations
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponse {
    pub id: Uuid,
    pub from_account_id: Uuid,
    pub to_account_id: Uuid,
    /// Amount as string (to avoid float precision issues)
    #[schema(example = "100.00")]
    pub amount: String,
    #[schema(example = "PENDING")]
    pub status: String,
    /// External transaction id from the settlement provider
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TransferRecord> for TransferResponse {
    fn from(record: TransferRecord) -> Self {
        Self {
            id: record.id,
            from_account_id: record.from_account_id,
            to_account_id: record.to_account_id,
            amount: record.amount.to_string(),
            status: record.status.to_string(),
            transaction_id: record.transaction_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Provider status notification
#[derive(Debug, Deserialize, ToSchema)]
pub struct CallbackRequest {
    #[serde(rename = "transactionId", alias = "transaction_id")]
    #[schema(example = "01JAXQ3Y8Z6K2V4N5P7R9T1W3X")]
    pub transaction_id: String,
    /// Provider status, e.g. `SUCCESS` or `FAILED`
    #[schema(example = "SUCCESS")]
    pub status: String,
}

/// Human-readable summary of a callback outcome
pub fn callback_message(outcome: &CallbackOutcome) -> &'static str {
    if outcome.is_duplicate() {
        "Callback already processed"
    } else {
        "Callback handled successfully"
    }
}
