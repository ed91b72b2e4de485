//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::{HealthResponse, PingDbResponse};
use crate::gateway::types::MessageResponse;
use crate::transfer::{AckStats, CallbackRequest, CreateTransferRequest, TransferResponse};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Money API",
        version = "0.1.0",
        description = "Bank transfer orchestration: account validation, external settlement and an atomic local ledger.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::account::validate_account,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::transfer::get_transfer,
        crate::gateway::handlers::transfer::transfer_callback,
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::health::ping_db,
    ),
    components(
        schemas(
            CreateTransferRequest,
            TransferResponse,
            CallbackRequest,
            MessageResponse,
            HealthResponse,
            PingDbResponse,
            AckStats,
        )
    ),
    tags(
        (name = "Account", description = "Account validation"),
        (name = "Transfer", description = "Transfers and provider callbacks"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
