//! Ledger DDL
//!
//! Identifiers are generated by the service (UUID v4), so no database
//! extension is needed.

pub const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id             UUID PRIMARY KEY,
    account_number VARCHAR(100) NOT NULL,
    account_name   VARCHAR(100) NOT NULL,
    bank_name      VARCHAR(100) NOT NULL DEFAULT '',
    balance        NUMERIC NOT NULL DEFAULT 0,
    created_at     TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_ACCOUNTS_NUMBER_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS accounts_account_number_uidx
    ON accounts (account_number)
"#;

pub const CREATE_TRANSFERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transfers (
    id              UUID PRIMARY KEY,
    from_account_id UUID NOT NULL REFERENCES accounts (id),
    to_account_id   UUID NOT NULL REFERENCES accounts (id),
    amount          NUMERIC NOT NULL CHECK (amount > 0),
    status          VARCHAR(20) NOT NULL,
    transaction_id  VARCHAR(100) NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub const CREATE_TRANSFERS_TXID_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS transfers_transaction_id_uidx
    ON transfers (transaction_id)
"#;

/// Executed in order by `Database::init_schema`
pub const STATEMENTS: &[&str] = &[
    CREATE_ACCOUNTS_TABLE,
    CREATE_ACCOUNTS_NUMBER_INDEX,
    CREATE_TRANSFERS_TABLE,
    CREATE_TRANSFERS_TXID_INDEX,
];
