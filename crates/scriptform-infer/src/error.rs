//! Inference errors

use crate::provider::ProviderError;
use thiserror::Error;

/// Errors surfaced by a schema update
#[derive(Debug, Error)]
pub enum InferError {
    /// The analyzer rejected the source; carries the analyzer's own message
    #[error("{0}")]
    InvalidSource(String),

    /// The analyzer's output did not decode as a parse outcome
    ///
    /// A contract defect in the analyzer, not a recoverable condition.
    #[error("malformed analyzer output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    /// The analyzer itself failed to initialize or run
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
