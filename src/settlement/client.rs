//! HTTP Settlement Client
//!
//! JSON over HTTPS against the provider's `/validate`, `/transfer` and
//! `/callback` endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::SettlementError;
use super::{SettlementClient, SettlementReceipt};
use crate::config::SettlementConfig;
use crate::transfer::state::TransferStatus;

#[derive(Serialize)]
struct ValidateBody<'a> {
    account_number: &'a str,
}

#[derive(Deserialize)]
struct ValidateReply {
    valid: bool,
}

#[derive(Serialize)]
struct TransferBody<'a> {
    from_account: &'a str,
    to_account: &'a str,
    amount: Decimal,
}

#[derive(Deserialize)]
struct TransferReply {
    #[serde(default, alias = "transactionId")]
    transaction_id: Option<String>,
}

#[derive(Serialize)]
struct CallbackBody<'a> {
    transaction_id: &'a str,
    status: &'a str,
}

/// Production settlement client
pub struct HttpSettlementClient {
    client: reqwest::Client,
    config: Arc<SettlementConfig>,
}

impl HttpSettlementClient {
    /// Create a client from the startup configuration
    pub fn new(config: Arc<SettlementConfig>) -> Result<Self, SettlementError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SettlementError::Transport {
                operation: "init",
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, SettlementError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.config.token)
            .json(body)
            .send()
            .await
            .map_err(|e| SettlementError::Transport {
                operation,
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SettlementError::Rejected {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl SettlementClient for HttpSettlementClient {
    async fn validate(&self, account_number: &str) -> Result<bool, SettlementError> {
        let response = self
            .post("validate", "validate", &ValidateBody { account_number })
            .await?;

        let reply: ValidateReply =
            response
                .json()
                .await
                .map_err(|e| SettlementError::Decode {
                    operation: "validate",
                    message: e.to_string(),
                })?;

        debug!(account = %account_number, valid = reply.valid, "Provider validation");
        Ok(reply.valid)
    }

    async fn transfer(
        &self,
        from_account: &str,
        to_account: &str,
        amount: Decimal,
    ) -> Result<SettlementReceipt, SettlementError> {
        let response = self
            .post(
                "transfer",
                "transfer",
                &TransferBody {
                    from_account,
                    to_account,
                    amount,
                },
            )
            .await?;

        // Funds have moved at this point; an unreadable body must not turn
        // into a failure.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Unreadable transfer reply, assigning local transaction id");
                Default::default()
            }
        };
        let provider_id = if body.is_empty() {
            None
        } else {
            match serde_json::from_slice::<TransferReply>(&body) {
                Ok(reply) => reply.transaction_id.filter(|id| !id.is_empty()),
                Err(e) => {
                    warn!(error = %e, "Unparseable transfer reply, assigning local transaction id");
                    None
                }
            }
        };

        let transaction_id = provider_id.unwrap_or_else(|| ulid::Ulid::new().to_string());
        Ok(SettlementReceipt { transaction_id })
    }

    async fn callback(
        &self,
        transaction_id: &str,
        status: TransferStatus,
    ) -> Result<(), SettlementError> {
        self.post(
            "callback",
            "callback",
            &CallbackBody {
                transaction_id,
                status: status.as_str(),
            },
        )
        .await?;
        Ok(())
    }
}
