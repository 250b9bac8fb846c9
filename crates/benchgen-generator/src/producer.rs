//! Pool of row producers feeding a bounded channel.
//!
//! Each worker runs on the blocking thread pool, owns its own RNG and pushes
//! rows with `blocking_send`, so a full channel parks the worker until the
//! consumer catches up. Workers share a row budget: a worker claims one slot
//! before generating a row and exits once the budget is spent, which closes
//! the channel after exactly `total_rows` rows have been sent.

use crate::generator::{GeneratorError, RowGenerator};
use crate::row::Row;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Default number of channel slots per worker.
pub const DEFAULT_CHANNEL_MULTIPLIER: usize = 30;

/// Receiving end of the row channel.
pub type RowReceiver = mpsc::Receiver<Row>;

/// Configuration for a [`RowProducerPool`].
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Number of concurrent workers.
    pub workers: usize,
    /// Channel slots per worker.
    pub channel_multiplier: usize,
    /// Total rows the pool will ever send.
    pub total_rows: u64,
    /// Base seed; each worker derives its own seed from it.
    pub seed: Option<u64>,
}

impl PoolConfig {
    /// Create a pool configuration with the default channel multiplier and no seed.
    pub fn new(workers: usize, total_rows: u64) -> Self {
        Self {
            workers,
            channel_multiplier: DEFAULT_CHANNEL_MULTIPLIER,
            total_rows,
            seed: None,
        }
    }

    /// Set the number of channel slots per worker.
    pub fn with_channel_multiplier(mut self, channel_multiplier: usize) -> Self {
        self.channel_multiplier = channel_multiplier;
        self
    }

    /// Seed every worker RNG from `seed`.
    ///
    /// Each worker's sequence is reproducible, but the interleaving of
    /// workers on the channel is not.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Capacity of the bounded channel.
    pub fn channel_capacity(&self) -> usize {
        self.workers
            .saturating_mul(self.channel_multiplier)
            .max(1)
    }

    fn worker_rng(&self, worker_id: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(
                seed.wrapping_add((worker_id as u64).wrapping_mul(0x9E3779B97F4A7C15)),
            ),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Running pool of row producers.
///
/// Dropping the [`RowReceiver`] makes every worker exit at its next send;
/// [`RowProducerPool::shutdown`] cancels the remaining budget and joins them.
pub struct RowProducerPool {
    handles: Vec<JoinHandle<()>>,
    cancel: CancellationToken,
    remaining: Arc<AtomicU64>,
    produced: Arc<AtomicU64>,
}

impl RowProducerPool {
    /// Spawn the workers and return the pool together with the receiving end.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(generator: RowGenerator, config: &PoolConfig) -> (Self, RowReceiver) {
        let (tx, rx) = mpsc::channel(config.channel_capacity());
        let cancel = CancellationToken::new();
        let remaining = Arc::new(AtomicU64::new(config.total_rows));
        let produced = Arc::new(AtomicU64::new(0));

        info!(
            "Launching {} row producers (channel capacity: {}, row budget: {})",
            config.workers,
            config.channel_capacity(),
            config.total_rows
        );

        let handles = (0..config.workers)
            .map(|worker_id| {
                let worker = Worker {
                    id: worker_id,
                    generator,
                    tx: tx.clone(),
                    remaining: Arc::clone(&remaining),
                    produced: Arc::clone(&produced),
                    cancel: cancel.clone(),
                };
                let rng = config.worker_rng(worker_id);
                tokio::task::spawn_blocking(move || worker.run(rng))
            })
            .collect();

        // Only workers hold senders now, so the channel closes when the last one exits.
        drop(tx);

        (
            Self {
                handles,
                cancel,
                remaining,
                produced,
            },
            rx,
        )
    }

    /// Ask every worker to stop after its current row.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Rows sent into the channel so far.
    pub fn produced(&self) -> u64 {
        self.produced.load(Ordering::Acquire)
    }

    /// Rows left in the budget that no worker has claimed yet.
    pub fn remaining(&self) -> u64 {
        self.remaining.load(Ordering::Acquire)
    }

    /// Cancel the pool and wait for every worker to exit.
    ///
    /// A worker parked on a full channel only wakes when the consumer reads
    /// or drops the receiver, so drop the [`RowReceiver`] first when
    /// shutting down early. Returns the number of rows sent.
    pub async fn shutdown(self) -> Result<u64, GeneratorError> {
        self.cancel.cancel();

        let mut failures = Vec::new();
        for (worker_id, handle) in self.handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                failures.push(format!("worker {worker_id}: {e}"));
            }
        }

        if !failures.is_empty() {
            return Err(GeneratorError::Worker(failures.join("; ")));
        }

        let produced = self.produced.load(Ordering::Acquire);
        debug!("Row producer pool shut down after {} rows", produced);
        Ok(produced)
    }
}

/// State moved into one producer thread.
struct Worker {
    id: usize,
    generator: RowGenerator,
    tx: mpsc::Sender<Row>,
    remaining: Arc<AtomicU64>,
    produced: Arc<AtomicU64>,
    cancel: CancellationToken,
}

impl Worker {
    fn run(self, mut rng: StdRng) {
        let mut sent = 0u64;

        while !self.cancel.is_cancelled() && claim_row(&self.remaining) {
            let row = self.generator.generate(&mut rng);
            if self.tx.blocking_send(row).is_err() {
                debug!("Producer {}: receiver dropped", self.id);
                break;
            }
            sent += 1;
            self.produced.fetch_add(1, Ordering::AcqRel);
        }

        debug!("Producer {} finished after {} rows", self.id, sent);
    }
}

/// Take one row from the shared budget, failing once it is exhausted.
fn claim_row(remaining: &AtomicU64) -> bool {
    remaining
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
        .is_ok()
}
