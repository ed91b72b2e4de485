use std::sync::Arc;

use crate::account::{AccountStore, AccountValidator, Database};
use crate::config::TransferConfig;
use crate::settlement::SettlementClient;
use crate::transfer::{
    AckWorker, CallbackHandler, DualValidator, TransferCoordinator, TransferLedger,
};

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Single-account validation (validate-account route)
    pub accounts: Arc<AccountValidator>,
    /// Create-transfer orchestration
    pub coordinator: Arc<TransferCoordinator>,
    /// Provider status notifications
    pub callbacks: Arc<CallbackHandler>,
    /// Acknowledgment delivery (stats for health)
    pub ack_worker: Arc<AckWorker>,
    /// PostgreSQL (absent in router tests)
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the service graph around one settlement client and one ledger
    pub fn new(
        settlement: Arc<dyn SettlementClient>,
        account_store: Arc<dyn AccountStore>,
        ledger: Arc<dyn TransferLedger>,
        ack_worker: Arc<AckWorker>,
        transfer: &TransferConfig,
        pg_db: Option<Arc<Database>>,
    ) -> Self {
        let accounts = Arc::new(AccountValidator::new(settlement.clone(), account_store));
        let coordinator = Arc::new(TransferCoordinator::new(
            Arc::new(DualValidator::new(accounts.clone())),
            settlement,
            ledger.clone(),
            transfer.validation_timeout(),
        ));
        let callbacks = Arc::new(CallbackHandler::new(ledger, ack_worker.sender()));

        Self {
            accounts,
            coordinator,
            callbacks,
            ack_worker,
            pg_db,
        }
    }
}
