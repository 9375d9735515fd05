//! Analyzer boundary
//!
//! The static analyzers live outside this crate (WASM modules, subprocesses,
//! remote services). [`SignatureProvider`] is the seam they plug into: one
//! entry point per supported language, returning the analyzer's raw JSON
//! output for the caller to decode.

use async_trait::async_trait;
use scriptform_types::ScriptLang;
use thiserror::Error;

/// Analyzer-level failure (initialization or invocation)
///
/// Distinct from a parse rejection, which is a successful invocation whose
/// outcome says the source is invalid.
#[derive(Debug, Clone, Error)]
#[error("analyzer failure: {message}")]
pub struct ProviderError {
    /// What went wrong
    pub message: String,
}

impl ProviderError {
    /// Build an error from any message
    pub fn new(message: impl Into<String>) -> ProviderError {
        ProviderError {
            message: message.into(),
        }
    }
}

/// A language-specific signature analyzer
#[async_trait]
pub trait SignatureProvider {
    /// Prepare the analyzer for use
    ///
    /// Idempotent: a no-op after the first success, safe to await
    /// repeatedly. Must complete before [`SignatureProvider::parse`].
    async fn initialize(&mut self) -> Result<(), ProviderError>;

    /// Analyze `code` and return the raw JSON outcome document
    async fn parse(&mut self, lang: ScriptLang, code: &str) -> Result<String, ProviderError>;
}
