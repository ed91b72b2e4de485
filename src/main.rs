//! Money API - transfer orchestration service
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌────────────┐    ┌──────────┐
//! │ Gateway  │───▶│  Validate  │───▶│   Settle   │───▶│  Ledger  │
//! │  (HTTP)  │    │ (2 legs)   │    │ (provider) │    │   (PG)   │
//! └──────────┘    └────────────┘    └────────────┘    └──────────┘
//!       │
//!       └── callback ──▶ status CAS ──▶ ack worker ──▶ provider
//! ```
//!
//! Usage: `money_api [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use money_api::account::{AccountRepository, Database};
use money_api::config::AppConfig;
use money_api::gateway::{self, state::AppState};
use money_api::settlement::HttpSettlementClient;
use money_api::transfer::{AckWorker, TransferDb};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = money_api::logging::init_logging(&app_config);

    info!("Starting Money API in {} mode", env);

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(run(app_config))
}

async fn run(app_config: AppConfig) -> anyhow::Result<()> {
    // === Ledger ===
    let postgres_url = app_config
        .postgres_url
        .as_deref()
        .context("postgres_url is not configured (set it in config or DATABASE_URL)")?;
    let db = Arc::new(
        Database::connect(postgres_url)
            .await
            .context("Failed to connect to PostgreSQL")?,
    );
    db.init_schema()
        .await
        .context("Failed to initialize ledger schema")?;

    // === Settlement provider ===
    let settlement_config = Arc::new(app_config.settlement.clone());
    info!(settlement = ?settlement_config, "Settlement client configured");
    let settlement = Arc::new(
        HttpSettlementClient::new(settlement_config)
            .context("Failed to build settlement client")?,
    );

    // === Services ===
    let ack_worker = Arc::new(AckWorker::start(
        settlement.clone(),
        &app_config.ack_worker,
    ));
    let state = AppState::new(
        settlement,
        Arc::new(AccountRepository::new(db.pool().clone())),
        Arc::new(TransferDb::new(db.pool().clone())),
        ack_worker.clone(),
        &app_config.transfer,
        Some(db.clone()),
    );

    let served = gateway::run_server(&app_config.gateway, Arc::new(state)).await;

    ack_worker.shutdown().await;
    if let Err(ref e) = served {
        warn!(error = %e, "Gateway exited with error");
    }
    served
}
