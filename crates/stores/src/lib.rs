//! Storage side of the seeder: record models, the three target stores and the
//! connection provider that opens them.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;

pub use config::StoresConfig;
pub use database::{ConnectionProvider, SqliteStores, Table};
pub use errors::StoreError;
pub use models::{OrderRecord, ProductRecord, Target, UserRecord};
