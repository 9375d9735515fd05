//! Schema update orchestration
//!
//! [`SchemaInferrer`] owns the analyzer and a memo of the last successful
//! parse. One inferrer per editing session; the memo is keyed by the source
//! text alone and is never persisted.

use crate::error::InferError;
use crate::mapper::schema_fragment;
use crate::merge::merge_fragment;
use crate::provider::SignatureProvider;
use scriptform_types::{ArgumentSignature, ParseOutcome, Schema, ScriptLang};

/// Last successful parse, reused while the source text is unchanged
#[derive(Debug, Clone)]
struct LastRun {
    code: String,
    args: Vec<ArgumentSignature>,
}

/// Drives schema updates from source code
///
/// Holds the analyzer and the last-run memo as plain owned state; callers
/// serialize updates per inferrer/schema pair through `&mut`.
pub struct SchemaInferrer<P> {
    provider: P,
    last_run: Option<LastRun>,
}

impl<P: SignatureProvider> SchemaInferrer<P> {
    /// Create an inferrer around an analyzer
    pub fn new(provider: P) -> SchemaInferrer<P> {
        SchemaInferrer {
            provider,
            last_run: None,
        }
    }

    /// Shared access to the analyzer
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Re-infer the argument signature of `code` and reconcile it into
    /// `schema` in place
    ///
    /// An unrecognized `language` tag leaves the schema untouched and
    /// returns `Ok`. On any error the schema is left at its prior state;
    /// merging only begins after a successful parse. A rejected parse never
    /// replaces the memo, so the previous good source keeps hitting it.
    pub async fn update(
        &mut self,
        language: &str,
        code: &str,
        schema: &mut Schema,
    ) -> Result<(), InferError> {
        let Some(lang) = ScriptLang::from_tag(language) else {
            return Ok(());
        };

        // the analyzers reject empty input outright
        let code = if code.is_empty() { " " } else { code };

        let args = match self.memoized(code) {
            Some(args) => args,
            None => {
                self.provider.initialize().await?;
                let raw = self.provider.parse(lang, code).await?;
                match ParseOutcome::from_json(&raw)? {
                    ParseOutcome::Invalid { error } => {
                        return Err(InferError::InvalidSource(error));
                    }
                    ParseOutcome::Valid { args } => {
                        self.last_run = Some(LastRun {
                            code: code.to_string(),
                            args: args.clone(),
                        });
                        args
                    }
                }
            }
        };

        apply_signature(&args, schema);
        Ok(())
    }

    fn memoized(&self, code: &str) -> Option<Vec<ArgumentSignature>> {
        self.last_run
            .as_ref()
            .filter(|run| run.code == code)
            .map(|run| run.args.clone())
    }
}

/// Rebuild `schema` from a parsed signature
///
/// Properties are rebuilt in signature order, each one merged from its
/// pre-update snapshot so user-authored metadata carries over. Snapshot
/// entries the signature no longer names are dropped with the snapshot.
fn apply_signature(args: &[ArgumentSignature], schema: &mut Schema) {
    let old_properties = std::mem::take(&mut schema.properties);
    schema.required.clear();

    for arg in args {
        let mut property = old_properties.get(&arg.name).cloned().unwrap_or_default();

        merge_fragment(&mut property, schema_fragment(&arg.typ));
        property.default = arg.default.clone();

        if !arg.has_default && !schema.required.iter().any(|name| name == &arg.name) {
            schema.required.push(arg.name.clone());
        }
        schema.properties.insert(arg.name.clone(), property);
    }
}
