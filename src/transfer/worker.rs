//! Acknowledgment Worker
//!
//! Background pool that delivers callback acknowledgments to the settlement
//! provider. Callers enqueue without waiting; delivery failures are counted
//! and logged, never retried inline.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use super::state::TransferStatus;
use crate::config::AckWorkerConfig;
use crate::settlement::SettlementClient;

/// One acknowledgment to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckJob {
    pub transaction_id: String,
    pub status: TransferStatus,
}

/// Snapshot of worker counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AckStats {
    /// Accepted into the queue
    pub queued: u64,
    pub delivered: u64,
    /// Provider call returned an error
    pub failed: u64,
    /// Rejected because the queue was full or closed
    pub dropped: u64,
}

#[derive(Default)]
struct Counters {
    queued: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

impl Counters {
    fn snapshot(&self) -> AckStats {
        AckStats {
            queued: self.queued.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Cloneable enqueue handle
#[derive(Clone)]
pub struct AckSender {
    tx: mpsc::Sender<AckJob>,
    counters: Arc<Counters>,
}

impl AckSender {
    /// Enqueue without waiting. Returns false if the job was dropped.
    pub fn enqueue(&self, job: AckJob) -> bool {
        match self.tx.try_send(job) {
            Ok(()) => {
                self.counters.queued.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(TrySendError::Full(job)) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(
                    transaction_id = %job.transaction_id,
                    status = %job.status,
                    "Acknowledgment queue full, dropping"
                );
                false
            }
            Err(TrySendError::Closed(job)) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(
                    transaction_id = %job.transaction_id,
                    "Acknowledgment worker stopped, dropping"
                );
                false
            }
        }
    }
}

/// Acknowledgment worker pool
pub struct AckWorker {
    sender: AckSender,
    stop: watch::Sender<bool>,
    handles: std::sync::Mutex<Vec<JoinHandle<()>>>,
}

impl AckWorker {
    /// Spawn the pool on the current tokio runtime
    pub fn start(settlement: Arc<dyn SettlementClient>, config: &AckWorkerConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_size.max(1));
        let rx = Arc::new(Mutex::new(rx));
        let counters = Arc::new(Counters::default());
        let (stop, _) = watch::channel(false);

        let workers = config.workers.max(1);
        let handles = (0..workers)
            .map(|id| {
                tokio::spawn(run_worker(
                    id,
                    rx.clone(),
                    stop.subscribe(),
                    settlement.clone(),
                    counters.clone(),
                ))
            })
            .collect();

        info!(
            workers = workers,
            queue_size = config.queue_size,
            "Acknowledgment worker started"
        );

        Self {
            sender: AckSender { tx, counters },
            stop,
            handles: std::sync::Mutex::new(handles),
        }
    }

    pub fn sender(&self) -> AckSender {
        self.sender.clone()
    }

    pub fn stats(&self) -> AckStats {
        self.sender.counters.snapshot()
    }

    /// Stop accepting jobs, deliver what is already queued, then wait for
    /// every worker task to exit.
    pub async fn shutdown(&self) {
        let _ = self.stop.send(true);

        let handles = match self.handles.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Acknowledgment worker task failed");
            }
        }

        let stats = self.stats();
        info!(
            delivered = stats.delivered,
            failed = stats.failed,
            dropped = stats.dropped,
            "Acknowledgment worker stopped"
        );
    }
}

async fn run_worker(
    id: usize,
    rx: Arc<Mutex<mpsc::Receiver<AckJob>>>,
    mut stop: watch::Receiver<bool>,
    settlement: Arc<dyn SettlementClient>,
    counters: Arc<Counters>,
) {
    loop {
        let next = {
            let mut rx = rx.lock().await;
            tokio::select! {
                biased;
                job = rx.recv() => job,
                _ = stop.changed() => {
                    // Closed channel still yields buffered jobs, then None
                    rx.close();
                    continue;
                }
            }
        };

        let Some(job) = next else {
            break;
        };

        match settlement.callback(&job.transaction_id, job.status).await {
            Ok(()) => {
                counters.delivered.fetch_add(1, Ordering::Relaxed);
                debug!(
                    worker = id,
                    transaction_id = %job.transaction_id,
                    status = %job.status,
                    "Acknowledgment delivered"
                );
            }
            Err(e) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(
                    worker = id,
                    transaction_id = %job.transaction_id,
                    operation = e.operation(),
                    error = %e,
                    "Acknowledgment delivery failed"
                );
            }
        }
    }

    debug!(worker = id, "Acknowledgment worker exiting");
}
