use forage_core::ForageError;
use forage_log::LogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArbiterError {
    #[error(transparent)]
    Core(#[from] ForageError),

    #[error("collection log error: {0}")]
    Log(#[from] LogError),
}

pub type ArbiterResult<T> = Result<T, ArbiterError>;
