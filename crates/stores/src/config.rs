//! Connection settings for the three target stores.

use crate::models::Target;

pub const DEFAULT_USERS_URL: &str = "sqlite://users.db";
pub const DEFAULT_PRODUCTS_URL: &str = "sqlite://products.db";
pub const DEFAULT_ORDERS_URL: &str = "sqlite://orders.db";

/// Database URL for each target store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoresConfig {
    pub users_url: String,
    pub products_url: String,
    pub orders_url: String,
}

impl Default for StoresConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            orders_url: DEFAULT_ORDERS_URL.to_string(),
        }
    }
}

impl StoresConfig {
    /// Places one `<target>.db` file per store inside `dir`.
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Self {
        let url = |target: Target| {
            format!(
                "sqlite://{}",
                dir.as_ref().join(format!("{target}.db")).display()
            )
        };
        Self {
            users_url: url(Target::Users),
            products_url: url(Target::Products),
            orders_url: url(Target::Orders),
        }
    }

    pub fn url(&self, target: Target) -> &str {
        match target {
            Target::Users => &self.users_url,
            Target::Products => &self.products_url,
            Target::Orders => &self.orders_url,
        }
    }
}
