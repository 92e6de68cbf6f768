use std::{fmt, str::FromStr};

use sqlx::FromRow;

use crate::errors::StoreError;

/// One of the three independent datastores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Users,
    Products,
    Orders,
}

impl Target {
    /// Every target, in read-back order.
    pub const ALL: [Target; 3] = [Target::Users, Target::Products, Target::Orders];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Users => "users",
            Target::Products => "products",
            Target::Orders => "orders",
        }
    }

    /// Label used for a single record of this target in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Target::Users => "User",
            Target::Products => "Product",
            Target::Orders => "Order",
        }
    }

    pub fn worker_name(&self) -> &'static str {
        match self {
            Target::Users => "UserThread",
            Target::Products => "ProductThread",
            Target::Orders => "OrderThread",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "users" => Ok(Target::Users),
            "products" => Ok(Target::Products),
            "orders" => Ok(Target::Orders),
            other => Err(StoreError::UnknownTarget(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl ProductRecord {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// An order references a user and a product by id only; neither is checked
/// for existence.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderRecord {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl OrderRecord {
    pub fn new(id: i64, user_id: i64, product_id: i64, quantity: i64) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
        }
    }
}
