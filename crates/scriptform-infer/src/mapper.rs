//! Type descriptor to schema fragment mapping

use indexmap::IndexMap;
use scriptform_types::{ItemsSpec, PropertyType, SchemaProperty, TypeDescriptor};

/// Map a type descriptor to a fresh schema fragment
///
/// Pure: the fragment depends on the descriptor alone. It carries no
/// description and no default; those belong to the merge stage and the
/// updater. Nested object fields are mapped recursively, each from an empty
/// context independent of any prior schema.
pub fn schema_fragment(typ: &TypeDescriptor) -> SchemaProperty {
    let mut fragment = SchemaProperty::default();
    match typ {
        TypeDescriptor::Int => {
            fragment.typ = Some(PropertyType::Integer);
        }
        TypeDescriptor::Float => {
            fragment.typ = Some(PropertyType::Number);
        }
        TypeDescriptor::Bool => {
            fragment.typ = Some(PropertyType::Boolean);
        }
        TypeDescriptor::Email => {
            fragment.typ = Some(PropertyType::String);
            fragment.format = Some("email".to_string());
        }
        TypeDescriptor::Sql => {
            fragment.typ = Some(PropertyType::String);
            fragment.format = Some("sql".to_string());
        }
        TypeDescriptor::Yaml => {
            fragment.typ = Some(PropertyType::String);
            fragment.format = Some("yaml".to_string());
        }
        TypeDescriptor::Bytes => {
            fragment.typ = Some(PropertyType::String);
            fragment.content_encoding = Some("base64".to_string());
        }
        TypeDescriptor::Datetime => {
            fragment.typ = Some(PropertyType::String);
            fragment.format = Some("date-time".to_string());
        }
        TypeDescriptor::Object(fields) => {
            fragment.typ = Some(PropertyType::Object);
            let mut properties = IndexMap::new();
            for field in fields {
                properties.insert(field.key.clone(), schema_fragment(&field.typ));
            }
            fragment.properties = Some(properties);
        }
        TypeDescriptor::Enum(choices) => {
            fragment.typ = Some(PropertyType::String);
            if let Some(choices) = choices {
                fragment.enumeration = Some(choices.clone());
            }
        }
        TypeDescriptor::Resource(name) => {
            fragment.typ = Some(PropertyType::Object);
            fragment.format = Some(format!("resource-{name}"));
        }
        TypeDescriptor::List(element) => {
            fragment.typ = Some(PropertyType::Array);
            fragment.items = Some(list_items(element.as_deref()));
        }
        // the bare `string` keyword only carries meaning as a list element;
        // on its own it gets the catch-all object shape
        TypeDescriptor::Str => {
            fragment.typ = Some(PropertyType::Object);
        }
    }
    fragment
}

/// Element shape for an array fragment
fn list_items(element: Option<&TypeDescriptor>) -> ItemsSpec {
    match element {
        Some(TypeDescriptor::Int) | Some(TypeDescriptor::Float) => {
            ItemsSpec::of(PropertyType::Number)
        }
        Some(TypeDescriptor::Bytes) => ItemsSpec {
            content_encoding: Some("base64".to_string()),
            ..ItemsSpec::of(PropertyType::String)
        },
        Some(TypeDescriptor::Str) => ItemsSpec::of(PropertyType::String),
        Some(TypeDescriptor::Enum(choices)) => ItemsSpec {
            enumeration: choices.clone(),
            ..ItemsSpec::of(PropertyType::String)
        },
        _ => ItemsSpec::of(PropertyType::Object),
    }
}
