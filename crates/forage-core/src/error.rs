//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `ForageError` via `From` impls, or keep them separate and wrap
//! `ForageError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, ResourceId};

/// The top-level error type for `forage-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ForageError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `forage-*` crates.
pub type ForageResult<T> = Result<T, ForageError>;
