//! Per-target ingestion worker.
//!
//! A worker owns its batch and a dedicated connection. It walks the batch in
//! order and writes one output line per record; a failing record is reported
//! and skipped, never propagated.

use std::time::Instant;

use sqlx::{Connection, SqliteConnection};
use stores::{ConnectionProvider, Target, database::insert_committed};
use tracing::{debug, error, warn};

use crate::{errors::IngestError, record::SeedRecord, sink::PrintSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    NotStarted,
    Running,
    Completed,
}

/// Outcome counts for one worker's batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub target: Target,
    pub attempted: usize,
    pub inserted: usize,
    pub failed: usize,
    pub state: WorkerState,
}

impl WorkerReport {
    /// Report for a worker that never got to write anything.
    pub fn all_failed(target: Target, attempted: usize) -> Self {
        Self {
            target,
            attempted,
            inserted: 0,
            failed: attempted,
            state: WorkerState::Completed,
        }
    }
}

/// Validates, then inserts and commits a single record.
async fn ingest_one<R: SeedRecord>(
    conn: &mut SqliteConnection,
    record: &R,
) -> Result<(), IngestError> {
    record.validate()?;
    insert_committed(conn, record).await?;
    Ok(())
}

pub struct IngestWorker<R> {
    batch: Vec<R>,
    sink: PrintSink,
    state: WorkerState,
}

impl<R: SeedRecord> IngestWorker<R> {
    pub fn new(batch: Vec<R>, sink: PrintSink) -> Self {
        Self {
            batch,
            sink,
            state: WorkerState::NotStarted,
        }
    }

    pub fn name(&self) -> &'static str {
        R::TARGET.worker_name()
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    fn transition(&mut self, next: WorkerState) {
        debug!(worker = self.name(), from = ?self.state, to = ?next, "Worker state change");
        self.state = next;
    }

    /// Processes the whole batch. Always runs to completion.
    pub async fn run(mut self, provider: &dyn ConnectionProvider) -> WorkerReport {
        self.transition(WorkerState::Running);
        let target = R::TARGET;

        let report = match provider.connect(target).await {
            Ok(mut conn) => {
                let report = self.ingest_batch(&mut conn).await;
                if let Err(e) = conn.close().await {
                    warn!(worker = self.name(), error = %e, "Failed to close connection");
                }
                report
            }
            Err(e) => {
                error!(worker = self.name(), error = %e, "Could not connect to store");
                self.sink.line(format!(
                    "[{}] {} FAILED: connection unavailable -> {}",
                    self.name(),
                    target.kind(),
                    e.reason()
                ));
                WorkerReport::all_failed(target, self.batch.len())
            }
        };

        self.transition(WorkerState::Completed);
        WorkerReport {
            state: self.state,
            ..report
        }
    }

    async fn ingest_batch(&self, conn: &mut SqliteConnection) -> WorkerReport {
        let target = R::TARGET;
        let mut inserted = 0;
        let mut failed = 0;

        for record in &self.batch {
            let started = Instant::now();
            match ingest_one(conn, record).await {
                Ok(()) => {
                    inserted += 1;
                    let elapsed = started.elapsed();
                    debug!(worker = self.name(), id = record.id(), ?elapsed, "Record inserted");
                    self.sink.line(format!(
                        "[{}] {} SUCCESS: ID={}, {} ({:.3}s)",
                        self.name(),
                        target.kind(),
                        record.id(),
                        record.fields(),
                        elapsed.as_secs_f64()
                    ));
                }
                Err(e) => {
                    failed += 1;
                    debug!(worker = self.name(), id = record.id(), error = %e, "Record rejected");
                    self.sink.line(format!(
                        "[{}] {} FAILED: ID={} -> {e}",
                        self.name(),
                        target.kind(),
                        record.id()
                    ));
                }
            }
        }

        WorkerReport {
            target,
            attempted: self.batch.len(),
            inserted,
            failed,
            state: self.state,
        }
    }
}
