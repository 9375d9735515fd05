//! scriptform data model
//!
//! Wire types for analyzer-produced argument signatures and the mutable
//! JSON-Schema-like document they are reconciled into.

#![warn(missing_docs)]

pub mod lang;
pub mod schema;
pub mod signature;

pub use lang::ScriptLang;
pub use schema::{ItemsSpec, PropertyType, Schema, SchemaProperty};
pub use signature::{ArgumentSignature, ObjectField, ParseOutcome, TypeDescriptor};
