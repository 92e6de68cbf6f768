//! Runs the three workers in parallel, then reads every store back.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use stores::{ConnectionProvider, Target};
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, info_span};

use crate::{
    batches::SeedBatches,
    record::SeedRecord,
    report::{ReadBackReporter, StoreListing},
    sink::PrintSink,
    worker::{IngestWorker, WorkerReport},
};

/// Result of one complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Wall-clock time from the first worker launch to the last completion.
    pub elapsed: Duration,
    pub attempted: usize,
    pub workers: Vec<WorkerReport>,
    pub listings: Vec<StoreListing>,
}

impl RunSummary {
    pub fn inserted(&self) -> usize {
        self.workers.iter().map(|w| w.inserted).sum()
    }

    pub fn failed(&self) -> usize {
        self.workers.iter().map(|w| w.failed).sum()
    }

    pub fn worker(&self, target: Target) -> Option<&WorkerReport> {
        self.workers.iter().find(|w| w.target == target)
    }
}

/// A launched worker that has not been joined yet.
struct PendingWorker {
    target: Target,
    attempted: usize,
    handle: JoinHandle<WorkerReport>,
}

impl PendingWorker {
    async fn join(self) -> WorkerReport {
        match self.handle.await {
            Ok(report) => report,
            Err(e) => {
                // A panicked worker still counts as finished; its records count as failed.
                error!(store = %self.target, error = %e, "Worker task did not finish cleanly");
                WorkerReport::all_failed(self.target, self.attempted)
            }
        }
    }
}

pub struct Orchestrator {
    provider: Arc<dyn ConnectionProvider>,
    sink: PrintSink,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn ConnectionProvider>, sink: PrintSink) -> Self {
        Self { provider, sink }
    }

    pub async fn run(&self, batches: SeedBatches) -> RunSummary {
        let attempted = batches.total();
        info!(attempted, "Launching workers");

        let started = Instant::now();
        let users = self.launch(batches.users);
        let products = self.launch(batches.products);
        let orders = self.launch(batches.orders);

        let (users, products, orders) = tokio::join!(users.join(), products.join(), orders.join());
        let elapsed = started.elapsed();
        info!(?elapsed, "All workers completed");

        let listings = ReadBackReporter::new(Arc::clone(&self.provider), self.sink.clone())
            .report()
            .await;

        let summary = RunSummary {
            elapsed,
            attempted,
            workers: vec![users, products, orders],
            listings,
        };
        self.print_summary(&summary);
        summary
    }

    fn launch<R: SeedRecord>(&self, batch: Vec<R>) -> PendingWorker {
        let attempted = batch.len();
        let worker = IngestWorker::new(batch, self.sink.clone());
        let span = info_span!("worker", worker = worker.name());
        let provider = Arc::clone(&self.provider);

        let handle =
            tokio::spawn(async move { worker.run(provider.as_ref()).await }.instrument(span));

        PendingWorker {
            target: R::TARGET,
            attempted,
            handle,
        }
    }

    fn print_summary(&self, summary: &RunSummary) {
        let rule = "=".repeat(50);
        self.sink.blank();
        self.sink.line(&rule);
        self.sink.line("EXECUTION SUMMARY");
        self.sink.line(&rule);
        self.sink.line(format!(
            "Total execution time: {:.3} seconds",
            summary.elapsed.as_secs_f64()
        ));
        self.sink
            .line(format!("Total records attempted: {}", summary.attempted));
        self.sink.line(format!("Records inserted: {}", summary.inserted()));
        self.sink.line(format!("Records failed: {}", summary.failed()));

        info!(
            attempted = summary.attempted,
            inserted = summary.inserted(),
            failed = summary.failed(),
            "Run finished"
        );
    }
}
