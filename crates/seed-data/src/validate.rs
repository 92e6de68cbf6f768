//! Field-level validation for seed records.
//!
//! Checks run in a fixed order and stop at the first failure, so a record
//! with several problems always reports the same single reason.

use stores::{OrderRecord, ProductRecord, UserRecord};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Product name cannot be empty")]
    EmptyProductName,

    #[error("Price cannot be negative (${0:.2})")]
    NegativePrice(f64),

    #[error("Price must be a number")]
    PriceNotANumber,

    #[error("Quantity must be positive (got {0})")]
    NonPositiveQuantity(i64),

    #[error("Invalid user_id ({0})")]
    InvalidUserId(i64),

    #[error("Invalid product_id ({0})")]
    InvalidProductId(i64),
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_user(user: &UserRecord) -> Result<(), ValidationError> {
    if is_blank(&user.name) {
        return Err(ValidationError::EmptyName);
    }
    if is_blank(&user.email) {
        return Err(ValidationError::EmptyEmail);
    }
    if !user.email.contains('@') {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

pub fn validate_product(product: &ProductRecord) -> Result<(), ValidationError> {
    if is_blank(&product.name) {
        return Err(ValidationError::EmptyProductName);
    }
    if product.price.is_nan() {
        return Err(ValidationError::PriceNotANumber);
    }
    if product.price < 0.0 {
        return Err(ValidationError::NegativePrice(product.price));
    }
    Ok(())
}

pub fn validate_order(order: &OrderRecord) -> Result<(), ValidationError> {
    if order.quantity <= 0 {
        return Err(ValidationError::NonPositiveQuantity(order.quantity));
    }
    if order.user_id <= 0 {
        return Err(ValidationError::InvalidUserId(order.user_id));
    }
    if order.product_id <= 0 {
        return Err(ValidationError::InvalidProductId(order.product_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        assert_eq!(
            validate_user(&UserRecord::new(1, "Alice", "alice@example.com")),
            Ok(())
        );
    }

    #[test]
    fn test_blank_user_name() {
        for name in ["", "   ", "\t\n"] {
            let user = UserRecord::new(10, name, "jane@example.com");
            assert_eq!(validate_user(&user), Err(ValidationError::EmptyName));
        }
    }

    #[test]
    fn test_user_checks_short_circuit_in_order() {
        // Blank name wins over a blank email.
        let user = UserRecord::new(1, " ", "");
        assert_eq!(validate_user(&user), Err(ValidationError::EmptyName));

        // Blank email wins over the missing '@'.
        let user = UserRecord::new(1, "Bob", "  ");
        assert_eq!(validate_user(&user), Err(ValidationError::EmptyEmail));

        let user = UserRecord::new(1, "Bob", "bob.example.com");
        assert_eq!(validate_user(&user), Err(ValidationError::InvalidEmailFormat));
    }

    #[test]
    fn test_product_rules() {
        assert_eq!(
            validate_product(&ProductRecord::new(1, "Laptop", 1000.0)),
            Ok(())
        );
        assert_eq!(validate_product(&ProductRecord::new(2, "Free", 0.0)), Ok(()));
        assert_eq!(
            validate_product(&ProductRecord::new(3, " ", -1.0)),
            Err(ValidationError::EmptyProductName)
        );
        assert_eq!(
            validate_product(&ProductRecord::new(10, "Earbuds", -50.0)),
            Err(ValidationError::NegativePrice(-50.0))
        );
        assert_eq!(
            validate_product(&ProductRecord::new(11, "Ghost", f64::NAN)),
            Err(ValidationError::PriceNotANumber)
        );
        assert_eq!(
            validate_product(&ProductRecord::new(12, "Ghost", f64::NEG_INFINITY)),
            Err(ValidationError::NegativePrice(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_order_rules() {
        assert_eq!(validate_order(&OrderRecord::new(1, 1, 1, 2)), Ok(()));
        assert_eq!(
            validate_order(&OrderRecord::new(8, 8, 8, 0)),
            Err(ValidationError::NonPositiveQuantity(0))
        );
        assert_eq!(
            validate_order(&OrderRecord::new(9, 9, 1, -1)),
            Err(ValidationError::NonPositiveQuantity(-1))
        );
        assert_eq!(
            validate_order(&OrderRecord::new(11, 0, 1, 1)),
            Err(ValidationError::InvalidUserId(0))
        );
        assert_eq!(
            validate_order(&OrderRecord::new(12, 1, -3, 1)),
            Err(ValidationError::InvalidProductId(-3))
        );
    }

    #[test]
    fn test_order_quantity_checked_first() {
        let order = OrderRecord::new(1, -1, -1, 0);
        assert_eq!(
            validate_order(&order),
            Err(ValidationError::NonPositiveQuantity(0))
        );
    }

    #[test]
    fn test_order_may_reference_unknown_product() {
        assert_eq!(validate_order(&OrderRecord::new(10, 10, 11, 2)), Ok(()));
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            ValidationError::NegativePrice(-50.0).to_string(),
            "Price cannot be negative ($-50.00)"
        );
        assert_eq!(
            ValidationError::PriceNotANumber.to_string(),
            "Price must be a number"
        );
        assert_eq!(
            ValidationError::NonPositiveQuantity(-1).to_string(),
            "Quantity must be positive (got -1)"
        );
        assert_eq!(
            ValidationError::InvalidUserId(0).to_string(),
            "Invalid user_id (0)"
        );
    }
}
