//! Account validation handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::super::state::AppState;
use super::super::types::{ApiError, MessageResponse};

/// Query parameters for account validation
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct ValidateAccountParams {
    /// Account number known to the settlement provider
    pub account_number: Option<String>,
    /// Account holder name as stored locally
    pub account_name: Option<String>,
}

/// Validate an account
///
/// POST /api/v1/validate-account?accountNumber=&accountName=
#[utoipa::path(
    post,
    path = "/api/v1/validate-account",
    params(ValidateAccountParams),
    responses(
        (status = 200, description = "Account validated", body = MessageResponse, content_type = "application/json"),
        (status = 400, description = "Missing account number or account name"),
        (status = 401, description = "Invalid account details"),
        (status = 500, description = "Provider or storage failure")
    ),
    tag = "Account"
)]
pub async fn validate_account(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ValidateAccountParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (account_number, account_name) = match (
        params.account_number.as_deref().map(str::trim),
        params.account_name.as_deref().map(str::trim),
    ) {
        (Some(number), Some(name)) if !number.is_empty() && !name.is_empty() => (number, name),
        _ => {
            return ApiError::bad_request("Missing account number or account name").into_err();
        }
    };

    match state.accounts.validate(account_number, Some(account_name)).await {
        Ok(true) => Ok(Json(MessageResponse::new("Account validated successfully"))),
        Ok(false) => ApiError::unauthorized("Invalid account details").into_err(),
        Err(e) => {
            tracing::error!(account = %account_number, error = %e, "Account validation failed");
            ApiError::internal(format!("Error validating account: {}", e.public_message())).into_err()
        }
    }
}
