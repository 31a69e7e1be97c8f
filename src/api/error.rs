// API error type
// Anything a handler fails with ends up as a 500 carrying this message

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read request body: {0}")]
    Body(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
