use stores::{OrderRecord, ProductRecord, Table, UserRecord};

use crate::validate::{ValidationError, validate_order, validate_product, validate_user};

/// A record a worker can validate, insert and describe.
pub trait SeedRecord: Table + 'static {
    fn validate(&self) -> Result<(), ValidationError>;

    /// Key fields shown after the id in a success line.
    fn fields(&self) -> String;
}

impl SeedRecord for UserRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_user(self)
    }

    fn fields(&self) -> String {
        format!("Name='{}', Email='{}'", self.name, self.email)
    }
}

impl SeedRecord for ProductRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_product(self)
    }

    fn fields(&self) -> String {
        format!("Name='{}', Price=${:.2}", self.name, self.price)
    }
}

impl SeedRecord for OrderRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_order(self)
    }

    fn fields(&self) -> String {
        format!(
            "UserID={}, ProductID={}, Qty={}",
            self.user_id, self.product_id, self.quantity
        )
    }
}
