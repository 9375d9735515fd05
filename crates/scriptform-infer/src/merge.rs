//! Fragment merging
//!
//! Re-inference must not destroy what users typed into the schema by hand.
//! The merger reconciles a freshly mapped fragment into the existing
//! property, field by field, invalidating only what the new type makes
//! structurally meaningless.

use scriptform_types::{ItemsSpec, PropertyType, SchemaProperty};

/// Merge a freshly mapped fragment into an existing property, in place
///
/// Rules, applied in order:
/// 1. A type change resets every field except `description`; format, enum,
///    items and nested properties may all be meaningless under the new type.
/// 2. Same type, but a `date-time` format the fragment no longer claims, is
///    dropped.
/// 3. Same type, but a different `items` element type, drops `items`.
/// 4. Exception to 3: string-to-string `items` are kept verbatim, so enum
///    choices and formats on list-of-string arguments survive re-inference.
/// 5. Fields the fragment carries overwrite; fields it does not carry leave
///    the existing value alone.
/// 6. A leftover `resource-` format on a non-object fragment type is
///    cleared; a resource tag is invalid outside an object-typed property.
///
/// `description` and `default` never flow through the merger. Merging the
/// same fragment twice is the same as merging it once.
pub fn merge_fragment(existing: &mut SchemaProperty, fragment: SchemaProperty) {
    if existing.typ != fragment.typ {
        *existing = SchemaProperty {
            description: std::mem::take(&mut existing.description),
            ..SchemaProperty::default()
        };
    } else if existing.format.as_deref() == Some("date-time")
        && fragment.format.as_deref() != Some("date-time")
    {
        existing.format = None;
    } else if items_type(&existing.items) != items_type(&fragment.items) {
        existing.items = None;
    }

    let same_string_items = items_type(&existing.items) == Some(PropertyType::String)
        && items_type(&fragment.items) == Some(PropertyType::String);
    let saved_items = if same_string_items {
        existing.items.clone()
    } else {
        None
    };

    existing.typ = fragment.typ;
    if fragment.format.is_some() {
        existing.format = fragment.format;
    }
    if fragment.enumeration.is_some() {
        existing.enumeration = fragment.enumeration;
    }
    if fragment.items.is_some() {
        existing.items = fragment.items;
    }
    if fragment.properties.is_some() {
        existing.properties = fragment.properties;
    }
    if fragment.content_encoding.is_some() {
        existing.content_encoding = fragment.content_encoding;
    }
    if saved_items.is_some() {
        existing.items = saved_items;
    }

    let leftover_resource = existing
        .format
        .as_deref()
        .is_some_and(|format| format.starts_with("resource-"));
    if leftover_resource && fragment.typ != Some(PropertyType::Object) {
        existing.format = None;
    }
}

fn items_type(items: &Option<ItemsSpec>) -> Option<PropertyType> {
    items.as_ref().map(|items| items.typ)
}
