use thiserror::Error;

use locomo_engine::error::EngineError;
use locomo_engine::validate::ValidationError;
use locomo_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing required input: {0}")]
    Incomplete(&'static str),

    #[error("validation failed ({} issue(s))", .0.len())]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(String),
}
