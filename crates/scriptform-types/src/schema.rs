//! Mutable argument schema
//!
//! A JSON-Schema-like document describing a script's arguments. Host
//! applications let users annotate properties (descriptions, enum choices,
//! formats); re-inference mutates the document in place while keeping those
//! annotations wherever they stay structurally compatible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON type of a schema property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// `object`
    Object,
    /// `array`
    Array,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Integer => write!(f, "integer"),
            PropertyType::Number => write!(f, "number"),
            PropertyType::Boolean => write!(f, "boolean"),
            PropertyType::String => write!(f, "string"),
            PropertyType::Object => write!(f, "object"),
            PropertyType::Array => write!(f, "array"),
        }
    }
}

/// Element shape of an array property
///
/// Carries `enum` and `format` so that user-authored metadata on
/// list-of-string arguments survives re-inference verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsSpec {
    /// Element type
    #[serde(rename = "type")]
    pub typ: PropertyType,
    /// Enumerated choices for string elements
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    /// Content encoding for binary elements
    #[serde(
        rename = "contentEncoding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_encoding: Option<String>,
    /// Element format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ItemsSpec {
    /// An items spec carrying only an element type
    pub fn of(typ: PropertyType) -> ItemsSpec {
        ItemsSpec {
            typ,
            enumeration: None,
            content_encoding: None,
            format: None,
        }
    }
}

/// One argument's entry in the schema
///
/// Created empty when an argument name is first seen, then mutated in place
/// on every re-inference. `description` belongs to the user and is never
/// touched by inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// JSON type; absent on a property that has never been inferred
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<PropertyType>,
    /// Format marker (`email`, `date-time`, `resource-<name>`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Enumerated choices for string properties
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    /// Element shape for array properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSpec>,
    /// Nested properties for object properties, insertion-ordered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,
    /// Default value from the argument's declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// User-authored description
    #[serde(default)]
    pub description: String,
    /// Content encoding (`base64` for binary payloads)
    #[serde(
        rename = "contentEncoding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_encoding: Option<String>,
}

/// Argument schema for one script
///
/// `properties` is insertion-ordered and keyed by argument name; `required`
/// lists the names of arguments without defaults, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Per-argument properties, in signature order
    #[serde(default)]
    pub properties: IndexMap<String, SchemaProperty>,
    /// Names of arguments without defaults
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// An empty schema
    pub fn new() -> Schema {
        Schema::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_property_has_no_type() {
        let property = SchemaProperty::default();
        assert_eq!(property.typ, None);
        assert_eq!(property.description, "");
    }

    #[test]
    fn test_property_serialization_skips_absent_fields() {
        let mut property = SchemaProperty::default();
        property.typ = Some(PropertyType::Integer);
        property.description = "count".to_string();

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value, json!({"type": "integer", "description": "count"}));
    }

    #[test]
    fn test_schema_round_trip_keeps_property_order() {
        let raw = json!({
            "properties": {
                "zeta": {"type": "string", "description": ""},
                "alpha": {"type": "integer", "description": ""},
            },
            "required": ["zeta"],
        });

        let schema: Schema = serde_json::from_value(raw).unwrap();
        let keys: Vec<&String> = schema.properties.keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);

        let back = serde_json::to_string(&schema).unwrap();
        let zeta = back.find("zeta").unwrap();
        let alpha = back.find("alpha").unwrap();
        assert!(zeta < alpha, "serialization must keep insertion order");
    }

    #[test]
    fn test_user_edited_property_round_trip() {
        let raw = json!({
            "type": "array",
            "description": "pick some",
            "items": {"type": "string", "enum": ["a", "b"], "format": "custom"},
        });

        let property: SchemaProperty = serde_json::from_value(raw.clone()).unwrap();
        let items = property.items.as_ref().unwrap();
        assert_eq!(items.typ, PropertyType::String);
        assert_eq!(
            items.enumeration,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(serde_json::to_value(&property).unwrap(), raw);
    }
}
