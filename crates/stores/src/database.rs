//! Connections and SQL for the target stores.
//!
//! Every store is an independent SQLite database. The [`ConnectionProvider`]
//! hands out one dedicated connection per call; nothing here pools or shares
//! connections between callers.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    Connection, FromRow, Sqlite, SqliteConnection,
    query::Query,
    sqlite::{SqliteArguments, SqliteConnectOptions, SqliteRow},
};
use tracing::{debug, info};

use crate::{
    config::StoresConfig,
    errors::StoreError,
    models::{OrderRecord, ProductRecord, Target, UserRecord},
};

pub type InsertQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Yields a connection to the store behind a target name.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn connect(&self, target: Target) -> Result<SqliteConnection, StoreError>;
}

/// A record type that lives in exactly one target store.
pub trait Table: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin {
    const TARGET: Target;

    /// Selects every row ordered by id ascending.
    const SELECT_ALL: &'static str;

    fn id(&self) -> i64;

    /// Single-row insert of this record.
    fn insert(&self) -> InsertQuery<'_>;
}

impl Table for UserRecord {
    const TARGET: Target = Target::Users;
    const SELECT_ALL: &'static str = "SELECT id, name, email FROM users ORDER BY id";

    fn id(&self) -> i64 {
        self.id
    }

    fn insert(&self) -> InsertQuery<'_> {
        sqlx::query("INSERT INTO users (id, name, email) VALUES (?1, ?2, ?3)")
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.email)
    }
}

impl Table for ProductRecord {
    const TARGET: Target = Target::Products;
    const SELECT_ALL: &'static str = "SELECT id, name, price FROM products ORDER BY id";

    fn id(&self) -> i64 {
        self.id
    }

    fn insert(&self) -> InsertQuery<'_> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)")
            .bind(self.id)
            .bind(&self.name)
            .bind(self.price)
    }
}

impl Table for OrderRecord {
    const TARGET: Target = Target::Orders;
    const SELECT_ALL: &'static str =
        "SELECT id, user_id, product_id, quantity FROM orders ORDER BY id";

    fn id(&self) -> i64 {
        self.id
    }

    fn insert(&self) -> InsertQuery<'_> {
        sqlx::query(
            "INSERT INTO orders (id, user_id, product_id, quantity) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(self.id)
        .bind(self.user_id)
        .bind(self.product_id)
        .bind(self.quantity)
    }
}

fn create_table_sql(target: Target) -> &'static str {
    match target {
        Target::Users => {
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL
            )
            "#
        }
        Target::Products => {
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL
            )
            "#
        }
        Target::Orders => {
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                product_id INTEGER NOT NULL,
                quantity INTEGER NOT NULL
            )
            "#
        }
    }
}

/// Inserts one record in its own transaction and commits it.
pub async fn insert_committed<T: Table>(
    conn: &mut SqliteConnection,
    record: &T,
) -> Result<(), StoreError> {
    let mut tx = conn.begin().await?;
    record.insert().execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

pub async fn fetch_all<T: Table>(conn: &mut SqliteConnection) -> Result<Vec<T>, StoreError> {
    let rows = sqlx::query_as::<_, T>(T::SELECT_ALL)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

pub async fn create_table(conn: &mut SqliteConnection, target: Target) -> Result<(), StoreError> {
    sqlx::query(create_table_sql(target))
        .execute(&mut *conn)
        .await?;
    debug!(store = %target, "Ensured table exists");
    Ok(())
}

pub async fn clear_table(conn: &mut SqliteConnection, target: Target) -> Result<(), StoreError> {
    // Table names come from the fixed target set, never from input.
    let result = sqlx::query(&format!("DELETE FROM {target}"))
        .execute(&mut *conn)
        .await?;
    debug!(store = %target, rows = result.rows_affected(), "Cleared table");
    Ok(())
}

/// File-backed SQLite stores, one database per target.
#[derive(Debug, Clone)]
pub struct SqliteStores {
    config: StoresConfig,
}

impl SqliteStores {
    pub fn new(config: StoresConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoresConfig {
        &self.config
    }

    /// Creates any missing table in every store.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        for target in Target::ALL {
            let mut conn = self.connect(target).await?;
            create_table(&mut conn, target).await?;
            conn.close().await?;
        }
        info!("Schema ready in all stores");
        Ok(())
    }

    /// Deletes every row from every store.
    ///
    /// **WARNING**: This removes all data, seeded or not.
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        for target in Target::ALL {
            let mut conn = self.connect(target).await?;
            clear_table(&mut conn, target).await?;
            conn.close().await?;
        }
        info!("All stores cleared");
        Ok(())
    }
}

#[async_trait]
impl ConnectionProvider for SqliteStores {
    async fn connect(&self, target: Target) -> Result<SqliteConnection, StoreError> {
        let url = self.config.url(target);
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let conn = SqliteConnection::connect_with(&options).await?;
        debug!(store = %target, url, "Opened store connection");
        Ok(conn)
    }
}
