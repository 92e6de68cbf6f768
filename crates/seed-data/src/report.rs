//! Read-back of every store once all writes have settled.

use std::sync::Arc;

use sqlx::Connection;
use stores::{
    ConnectionProvider, OrderRecord, ProductRecord, StoreError, Table, Target, UserRecord,
    database::fetch_all,
};
use tracing::{info, warn};

use crate::sink::PrintSink;

/// Fixed-width rendering of a store's rows.
pub trait Tabular: Table {
    fn header() -> String;

    /// Width of the dashed rule under the header.
    fn rule_width() -> usize;

    fn row(&self) -> String;
}

impl Tabular for UserRecord {
    fn header() -> String {
        format!("{:<3} {:<10} {:<25}", "ID", "Name", "Email")
    }

    fn rule_width() -> usize {
        40
    }

    fn row(&self) -> String {
        format!("{:<3} {:<10} {:<25}", self.id, self.name, self.email)
    }
}

impl Tabular for ProductRecord {
    fn header() -> String {
        format!("{:<3} {:<15} {:<10}", "ID", "Name", "Price")
    }

    fn rule_width() -> usize {
        30
    }

    fn row(&self) -> String {
        format!("{:<3} {:<15} ${:<9.2}", self.id, self.name, self.price)
    }
}

impl Tabular for OrderRecord {
    fn header() -> String {
        format!(
            "{:<3} {:<7} {:<10} {:<8}",
            "ID", "UserID", "ProductID", "Quantity"
        )
    }

    fn rule_width() -> usize {
        30
    }

    fn row(&self) -> String {
        format!(
            "{:<3} {:<7} {:<10} {:<8}",
            self.id, self.user_id, self.product_id, self.quantity
        )
    }
}

/// What the reporter found in one store. `rows` is `None` when the read failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreListing {
    pub target: Target,
    pub rows: Option<usize>,
}

pub struct ReadBackReporter {
    provider: Arc<dyn ConnectionProvider>,
    sink: PrintSink,
}

impl ReadBackReporter {
    pub fn new(provider: Arc<dyn ConnectionProvider>, sink: PrintSink) -> Self {
        Self { provider, sink }
    }

    /// Lists users, products and orders, in that order, one store at a time.
    pub async fn report(&self) -> Vec<StoreListing> {
        let mut listings = Vec::with_capacity(Target::ALL.len());
        for target in Target::ALL {
            let rows = match target {
                Target::Users => self.report_store::<UserRecord>().await,
                Target::Products => self.report_store::<ProductRecord>().await,
                Target::Orders => self.report_store::<OrderRecord>().await,
            };
            listings.push(StoreListing { target, rows });
        }
        listings
    }

    async fn report_store<T: Tabular>(&self) -> Option<usize> {
        let target = T::TARGET;
        self.sink.blank();
        self.sink.line(format!(
            "--- {} DATABASE ({target}.db) ---",
            target.as_str().to_uppercase()
        ));

        let rows = match self.read_all::<T>().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(store = %target, error = %e, "Read-back failed");
                self.sink.line(format!("Error reading {target}: {}", e.reason()));
                return None;
            }
        };

        if rows.is_empty() {
            self.sink.line(format!("No {target} found."));
        } else {
            self.sink.line(T::header());
            self.sink.line("-".repeat(T::rule_width()));
            for row in &rows {
                self.sink.line(row.row());
            }
        }
        info!(store = %target, rows = rows.len(), "Read back store");
        Some(rows.len())
    }

    async fn read_all<T: Table>(&self) -> Result<Vec<T>, StoreError> {
        let mut conn = self.provider.connect(T::TARGET).await?;
        let rows = fetch_all::<T>(&mut conn).await;
        if let Err(e) = conn.close().await {
            warn!(store = %T::TARGET, error = %e, "Failed to close connection");
        }
        rows
    }
}
