//! Data models for ledger accounts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Bank account known to the local ledger.
///
/// Rows are created by onboarding; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    /// Globally unique, externally meaningful number
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        account_number: impl Into<String>,
        account_name: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_number: account_number.into(),
            account_name: account_name.into(),
            bank_name: bank_name.into(),
            balance: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Exact (number, name) match used by the account validator
    pub fn matches(&self, account_number: &str, account_name: &str) -> bool {
        self.account_number == account_number && self.account_name == account_name
    }
}
