//! Concurrent seeding of the users, products and orders stores.
//!
//! Three workers, one per store, validate and insert their batch in parallel.
//! Each record is committed on its own and a bad record only costs that record.
//! Once every worker has finished, the stores are read back and a summary is
//! printed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use seed_data::prelude::*;
//!
//! let stores = SqliteStores::new(StoresConfig::default());
//! stores.create_schema().await?;
//!
//! let summary = Orchestrator::new(Arc::new(stores), PrintSink::stdout())
//!     .run(SeedBatches::standard())
//!     .await;
//! assert_eq!(summary.attempted, 30);
//! ```

pub mod batches;
pub mod errors;
pub mod orchestrator;
pub mod record;
pub mod report;
pub mod sink;
pub mod validate;
pub mod worker;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::batches::SeedBatches;
    pub use crate::errors::IngestError;
    pub use crate::orchestrator::{Orchestrator, RunSummary};
    pub use crate::record::SeedRecord;
    pub use crate::report::{ReadBackReporter, StoreListing, Tabular};
    pub use crate::sink::{Captured, PrintSink};
    pub use crate::validate::ValidationError;
    pub use crate::worker::{IngestWorker, WorkerReport, WorkerState};
    pub use stores::{
        ConnectionProvider, OrderRecord, ProductRecord, SqliteStores, StoresConfig, Target,
        UserRecord,
    };
}
