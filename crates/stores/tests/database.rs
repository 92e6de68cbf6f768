//! Integration tests for the SQLite stores.
//!
//! Each test opens its own stores inside a temporary directory, so no external
//! database is needed.

use sqlx::Connection;
use stores::{
    ConnectionProvider, OrderRecord, ProductRecord, SqliteStores, StoresConfig, Target, UserRecord,
    database::{fetch_all, insert_committed},
};
use tempfile::TempDir;

async fn test_stores() -> (TempDir, SqliteStores) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let stores = SqliteStores::new(StoresConfig::in_dir(dir.path()));
    stores
        .create_schema()
        .await
        .expect("Failed to create schema");
    (dir, stores)
}

#[tokio::test]
async fn test_fetch_all_orders_by_id() {
    let (_dir, stores) = test_stores().await;
    let mut conn = stores.connect(Target::Users).await.unwrap();

    for user in [
        UserRecord::new(3, "Charlie", "charlie@example.com"),
        UserRecord::new(1, "Alice", "alice@example.com"),
        UserRecord::new(2, "Bob", "bob@example.com"),
    ] {
        insert_committed(&mut conn, &user).await.unwrap();
    }

    let users: Vec<UserRecord> = fetch_all(&mut conn).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[0].email, "alice@example.com");
}

#[tokio::test]
async fn test_committed_rows_are_visible_to_other_connections() {
    let (_dir, stores) = test_stores().await;

    let mut writer = stores.connect(Target::Products).await.unwrap();
    insert_committed(&mut writer, &ProductRecord::new(1, "Laptop", 1000.0))
        .await
        .unwrap();

    let mut reader = stores.connect(Target::Products).await.unwrap();
    let products: Vec<ProductRecord> = fetch_all(&mut reader).await.unwrap();
    assert_eq!(products, vec![ProductRecord::new(1, "Laptop", 1000.0)]);
}

#[tokio::test]
async fn test_duplicate_primary_key_is_a_unique_violation() {
    let (_dir, stores) = test_stores().await;
    let mut conn = stores.connect(Target::Orders).await.unwrap();

    insert_committed(&mut conn, &OrderRecord::new(1, 1, 1, 2))
        .await
        .unwrap();
    let err = insert_committed(&mut conn, &OrderRecord::new(1, 2, 2, 1))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());
    assert_eq!(err.reason(), "UNIQUE constraint failed: orders.id");

    // The failed insert must not leave the connection inside a transaction.
    insert_committed(&mut conn, &OrderRecord::new(2, 2, 2, 1))
        .await
        .unwrap();
    let orders: Vec<OrderRecord> = fetch_all(&mut conn).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].user_id, 1);
}

#[tokio::test]
async fn test_stores_are_independent() {
    let (_dir, stores) = test_stores().await;
    let mut users = stores.connect(Target::Users).await.unwrap();
    insert_committed(&mut users, &UserRecord::new(1, "Alice", "alice@example.com"))
        .await
        .unwrap();

    // The products database has no users table.
    let mut products = stores.connect(Target::Products).await.unwrap();
    let err = fetch_all::<UserRecord>(&mut products).await.unwrap_err();
    assert!(!err.is_unique_violation());
    products.close().await.unwrap();
}

#[tokio::test]
async fn test_clear_all_empties_every_store() {
    let (_dir, stores) = test_stores().await;
    let mut conn = stores.connect(Target::Users).await.unwrap();
    insert_committed(&mut conn, &UserRecord::new(1, "Alice", "alice@example.com"))
        .await
        .unwrap();

    stores.clear_all().await.unwrap();

    let users: Vec<UserRecord> = fetch_all(&mut conn).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_reading_without_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let stores = SqliteStores::new(StoresConfig::in_dir(dir.path()));
    let mut conn = stores.connect(Target::Orders).await.unwrap();

    let err = fetch_all::<OrderRecord>(&mut conn).await.unwrap_err();
    assert_eq!(err.reason(), "no such table: orders");
}
