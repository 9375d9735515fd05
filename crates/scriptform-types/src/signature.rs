//! Analyzer wire format
//!
//! The language analyzers emit one JSON document per parse: either a
//! rejection with a message, or the ordered list of main-function arguments
//! with their inferred type descriptors. These types decode that document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inferred shape of one value, as reported by an analyzer
///
/// The wire representation is externally tagged: bare keyword strings for the
/// primitive shapes (`"int"`, `"datetime"`, ...) and single-key maps for the
/// structured ones (`{"list": ...}`, `{"resource": "..."}`). Content outside
/// this closed set fails decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDescriptor {
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Email address string
    Email,
    /// SQL source string
    Sql,
    /// YAML source string
    Yaml,
    /// Binary payload, base64-encoded on the wire
    Bytes,
    /// Timestamp string
    Datetime,
    /// Bare `string` keyword; analyzers only emit it as a list element,
    /// a plain top-level string arrives as a choice-less [`TypeDescriptor::Enum`]
    #[serde(rename = "string")]
    Str,
    /// String with optional enumerated choices, wire key `str`
    #[serde(rename = "str")]
    Enum(Option<Vec<String>>),
    /// Object with ordered named fields
    Object(Vec<ObjectField>),
    /// Reference to an external named resource
    Resource(String),
    /// List with an optional element descriptor
    List(Option<Box<TypeDescriptor>>),
}

/// One named field of an object descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    /// Field name
    pub key: String,
    /// Field type
    pub typ: TypeDescriptor,
}

/// One argument of a script's main function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSignature {
    /// Argument name
    pub name: String,
    /// Inferred type descriptor
    pub typ: TypeDescriptor,
    /// Parsed default value, if the argument declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Whether the argument declares a default
    #[serde(default)]
    pub has_default: bool,
}

/// Analyzer verdict for one parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParseOutcome {
    /// The source did not parse
    Invalid {
        /// Analyzer's own message
        error: String,
    },
    /// The source parsed; arguments in declaration order
    Valid {
        /// Main-function arguments
        args: Vec<ArgumentSignature>,
    },
}

impl ParseOutcome {
    /// Decode a raw analyzer document
    ///
    /// A decode failure means the analyzer broke its output contract; there
    /// is no recovery path, callers propagate it.
    pub fn from_json(raw: &str) -> Result<ParseOutcome, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_primitive_keywords() {
        let typ: TypeDescriptor = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(typ, TypeDescriptor::Int);
        let typ: TypeDescriptor = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(typ, TypeDescriptor::Datetime);
        let typ: TypeDescriptor = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(typ, TypeDescriptor::Str);
    }

    #[test]
    fn test_decode_enum_choices() {
        let typ: TypeDescriptor = serde_json::from_value(json!({"str": null})).unwrap();
        assert_eq!(typ, TypeDescriptor::Enum(None));

        let typ: TypeDescriptor = serde_json::from_value(json!({"str": ["a", "b"]})).unwrap();
        assert_eq!(
            typ,
            TypeDescriptor::Enum(Some(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_decode_object_fields_keep_order() {
        let typ: TypeDescriptor = serde_json::from_value(json!({
            "object": [
                {"key": "city", "typ": {"str": null}},
                {"key": "zip", "typ": "int"},
            ]
        }))
        .unwrap();
        let TypeDescriptor::Object(fields) = typ else {
            panic!("expected object descriptor");
        };
        assert_eq!(fields[0].key, "city");
        assert_eq!(fields[1].key, "zip");
        assert_eq!(fields[1].typ, TypeDescriptor::Int);
    }

    #[test]
    fn test_decode_resource_and_list() {
        let typ: TypeDescriptor = serde_json::from_value(json!({"resource": "postgres"})).unwrap();
        assert_eq!(typ, TypeDescriptor::Resource("postgres".to_string()));

        let typ: TypeDescriptor = serde_json::from_value(json!({"list": "int"})).unwrap();
        assert_eq!(typ, TypeDescriptor::List(Some(Box::new(TypeDescriptor::Int))));

        let typ: TypeDescriptor = serde_json::from_value(json!({"list": null})).unwrap();
        assert_eq!(typ, TypeDescriptor::List(None));
    }

    #[test]
    fn test_unknown_descriptor_is_a_decode_error() {
        assert!(serde_json::from_str::<TypeDescriptor>("\"quaternion\"").is_err());
        assert!(serde_json::from_value::<TypeDescriptor>(json!({"tuple": []})).is_err());
    }

    #[test]
    fn test_decode_outcome_tags() {
        let outcome = ParseOutcome::from_json(r#"{"type": "Invalid", "error": "bad token"}"#).unwrap();
        assert_eq!(
            outcome,
            ParseOutcome::Invalid {
                error: "bad token".to_string()
            }
        );

        let outcome = ParseOutcome::from_json(
            r#"{"type": "Valid", "args": [{"name": "x", "typ": "int", "default": 3, "has_default": true}]}"#,
        )
        .unwrap();
        let ParseOutcome::Valid { args } = outcome else {
            panic!("expected valid outcome");
        };
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "x");
        assert_eq!(args[0].default, Some(json!(3)));
        assert!(args[0].has_default);
    }

    #[test]
    fn test_absent_default_fields() {
        let arg: ArgumentSignature =
            serde_json::from_value(json!({"name": "x", "typ": "bool"})).unwrap();
        assert_eq!(arg.default, None);
        assert!(!arg.has_default);
    }

    #[test]
    fn test_malformed_outcome_is_a_decode_error() {
        assert!(ParseOutcome::from_json("not json").is_err());
        assert!(ParseOutcome::from_json(r#"{"type": "Maybe"}"#).is_err());
    }
}
