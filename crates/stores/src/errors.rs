use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unknown target: {0}")]
    UnknownTarget(String),
}

impl StoreError {
    /// True when the store rejected a write because the primary key is taken.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }

    /// The store's own message, without the driver's wrapping.
    pub fn reason(&self) -> String {
        match self {
            StoreError::Database(sqlx::Error::Database(e)) => e.message().to_string(),
            StoreError::Database(e) => e.to_string(),
            StoreError::UnknownTarget(_) => self.to_string(),
        }
    }
}
