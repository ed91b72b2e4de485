//! Transfer handlers (create, lookup, provider callback)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, MessageResponse, ok};
use crate::transfer::api::{
    CallbackRequest, CreateTransferRequest, TransferResponse, callback_message,
};

/// Create a transfer
///
/// POST /api/v1/create-transfer
///
/// Validates both accounts, settles with the provider, then records the
/// transfer as PENDING.
#[utoipa::path(
    post,
    path = "/api/v1/create-transfer",
    request_body = CreateTransferRequest,
    responses(
        (status = 200, description = "Transfer settled and recorded", body = TransferResponse, content_type = "application/json"),
        (status = 400, description = "Malformed body, non-positive amount or same account"),
        (status = 500, description = "Validation, settlement or persistence failure")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Json(req) = body
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e.body_text())))?;

    let record = state.coordinator.create_transfer(req.into()).await?;
    Ok(Json(record.into()))
}

/// Get a transfer
///
/// GET /api/v1/transfers/{id}
#[utoipa::path(
    get,
    path = "/api/v1/transfers/{id}",
    params(
        ("id" = String, Path, description = "Transfer id (UUID)")
    ),
    responses(
        (status = 200, description = "Stored transfer", body = TransferResponse, content_type = "application/json"),
        (status = 400, description = "Invalid transfer id"),
        (status = 404, description = "Transfer not found")
    ),
    tag = "Transfer"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TransferResponse> {
    let id: Uuid = id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid transfer id format"))?;

    let record = state.coordinator.get_transfer(id).await?;
    ok(record.into())
}

/// Provider status callback
///
/// POST /api/v1/transfer-callback
///
/// Redelivery of an already-applied status answers 200.
#[utoipa::path(
    post,
    path = "/api/v1/transfer-callback",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Callback processed", body = MessageResponse, content_type = "application/json"),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Unknown transaction, unrecognized status or storage failure")
    ),
    tag = "Transfer"
)]
pub async fn transfer_callback(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e.body_text())))?;

    if req.transaction_id.trim().is_empty() {
        return ApiError::bad_request("Missing transactionId").into_err();
    }

    let outcome = state
        .callbacks
        .handle_callback(&req.transaction_id, &req.status)
        .await
        .inspect_err(|e| {
            tracing::warn!(transaction_id = %req.transaction_id, error = %e, "Callback rejected");
        })?;

    Ok(Json(MessageResponse::new(callback_message(&outcome))))
}
