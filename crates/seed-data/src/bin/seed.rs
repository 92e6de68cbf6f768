//! Seeds the users, products and orders stores concurrently.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed -- --create-schema
//! ```

use std::sync::Arc;

use clap::Parser;
use seed_data::prelude::*;
use stores::config::{DEFAULT_ORDERS_URL, DEFAULT_PRODUCTS_URL, DEFAULT_USERS_URL};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Insert seed data concurrently into the three stores")]
struct Args {
    /// Users store URL.
    #[arg(long, env = "USERS_DATABASE_URL", default_value = DEFAULT_USERS_URL)]
    users_url: String,

    /// Products store URL.
    #[arg(long, env = "PRODUCTS_DATABASE_URL", default_value = DEFAULT_PRODUCTS_URL)]
    products_url: String,

    /// Orders store URL.
    #[arg(long, env = "ORDERS_DATABASE_URL", default_value = DEFAULT_ORDERS_URL)]
    orders_url: String,

    /// Create missing tables before seeding.
    #[arg(long)]
    create_schema: bool,

    /// Delete existing rows from every store before seeding.
    #[arg(long)]
    clear: bool,
}

impl Args {
    fn stores_config(&self) -> StoresConfig {
        StoresConfig {
            users_url: self.users_url.clone(),
            products_url: self.products_url.clone(),
            orders_url: self.orders_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stores = SqliteStores::new(args.stores_config());

    if args.create_schema {
        stores.create_schema().await?;
    }
    if args.clear {
        stores.clear_all().await?;
    }

    let sink = PrintSink::stdout();
    sink.line("Starting concurrent database insertions...");
    sink.line("=".repeat(60));

    let summary = Orchestrator::new(Arc::new(stores), sink.clone())
        .run(SeedBatches::standard())
        .await;

    tracing::info!(
        inserted = summary.inserted(),
        failed = summary.failed(),
        "Seed completed"
    );
    sink.line("Concurrent data insertion complete!");

    Ok(())
}
