//! The fixed seed batches, one per target store.
//!
//! The data deliberately contains records that fail validation (an empty
//! user name, a negative price, non-positive quantities) and rows that repeat
//! earlier values under a new id.

use stores::{OrderRecord, ProductRecord, UserRecord};

/// Everything one run tries to insert.
#[derive(Debug, Clone, Default)]
pub struct SeedBatches {
    pub users: Vec<UserRecord>,
    pub products: Vec<ProductRecord>,
    pub orders: Vec<OrderRecord>,
}

impl SeedBatches {
    /// The standard seed data set.
    pub fn standard() -> Self {
        Self {
            users: users(),
            products: products(),
            orders: orders(),
        }
    }

    /// Number of records across all three batches.
    pub fn total(&self) -> usize {
        self.users.len() + self.products.len() + self.orders.len()
    }
}

pub fn users() -> Vec<UserRecord> {
    [
        (1, "Alice", "alice@example.com"),
        (2, "Bob", "bob@example.com"),
        (3, "Charlie", "charlie@example.com"),
        (4, "David", "david@example.com"),
        (5, "Eve", "eve@example.com"),
        (6, "Frank", "frank@example.com"),
        (7, "Grace", "grace@example.com"),
        (8, "Alice", "alice@example.com"),
        (9, "Henry", "henry@example.com"),
        (10, "", "jane@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| UserRecord::new(id, name, email))
    .collect()
}

pub fn products() -> Vec<ProductRecord> {
    [
        (1, "Laptop", 1000.00),
        (2, "Smartphone", 700.00),
        (3, "Headphones", 150.00),
        (4, "Monitor", 300.00),
        (5, "Keyboard", 50.00),
        (6, "Mouse", 30.00),
        (7, "Laptop", 1000.00),
        (8, "Smartwatch", 250.00),
        (9, "Gaming Chair", 500.00),
        (10, "Earbuds", -50.00),
    ]
    .into_iter()
    .map(|(id, name, price)| ProductRecord::new(id, name, price))
    .collect()
}

pub fn orders() -> Vec<OrderRecord> {
    [
        (1, 1, 1, 2),
        (2, 2, 2, 1),
        (3, 3, 3, 5),
        (4, 4, 4, 1),
        (5, 5, 5, 3),
        (6, 6, 6, 4),
        (7, 7, 7, 2),
        (8, 8, 8, 0),
        (9, 9, 1, -1),
        (10, 10, 11, 2),
    ]
    .into_iter()
    .map(|(id, user_id, product_id, quantity)| OrderRecord::new(id, user_id, product_id, quantity))
    .collect()
}
