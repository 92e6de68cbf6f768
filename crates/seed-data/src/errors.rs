use stores::StoreError;
use thiserror::Error;

use crate::validate::ValidationError;

/// Why a single record was not inserted.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Duplicate key: {}", .0.reason())]
    Conflict(StoreError),

    #[error("Write failed: {}", .0.reason())]
    Write(StoreError),
}

impl From<StoreError> for IngestError {
    fn from(err: StoreError) -> Self {
        if err.is_unique_violation() {
            IngestError::Conflict(err)
        } else {
            IngestError::Write(err)
        }
    }
}
