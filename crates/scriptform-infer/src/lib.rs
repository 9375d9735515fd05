//! scriptform inference
//!
//! Turns analyzer-produced argument signatures into a mutable argument
//! schema. The mapper converts one type descriptor into a fresh schema
//! fragment; the merger reconciles a fragment into an existing property
//! without losing user-authored metadata; [`SchemaInferrer`] orchestrates
//! the analyzer call, a last-run cache and the per-argument merge.

pub mod error;
pub mod infer;
pub mod mapper;
pub mod merge;
pub mod provider;

pub use error::InferError;
pub use infer::SchemaInferrer;
pub use mapper::schema_fragment;
pub use merge::merge_fragment;
pub use provider::{ProviderError, SignatureProvider};
