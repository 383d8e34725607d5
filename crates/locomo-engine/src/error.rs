use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
