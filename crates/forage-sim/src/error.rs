use forage_arbiter::ArbiterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("roster must contain at least one agent")]
    EmptyRoster,

    #[error(transparent)]
    Arbiter(#[from] ArbiterError),
}

pub type SimResult<T> = Result<T, SimError>;
