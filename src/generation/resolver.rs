//! Type resolver - maps schema properties to resolved target types
//!
//! Resolution never fails: unknown or malformed shapes degrade to best-effort
//! named references. Nullability comes from the property's own `required`
//! flag and is never inherited from an enclosing node.

use crate::generation::sanitizers::capitalize;
use crate::generation::types::{ResolvedType, TypeKind};
use crate::infrastructure::swagger::{PropertyKind, SchemaModel, SchemaProperty};

/// Resolve a schema property to a target type.
///
/// `known_enums` carries the names of every extracted enum definition: a ref
/// to one of them resolves to the underlying primitive of the enum's backing
/// model rather than to the enum name. `definitions` is the document's
/// definition table, consulted for that backing model.
pub fn resolve(
    property: &SchemaProperty,
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> ResolvedType {
    let kind = match &property.kind {
        PropertyKind::Ref(target) => resolve_ref(target, known_enums, definitions),
        PropertyKind::Array(item) => TypeKind::List(Box::new(resolve_item(
            item,
            known_enums,
            definitions,
        ))),
        other => scalar_kind(other, property.format.as_deref()),
    };

    ResolvedType::with_required(kind, property.required)
}

/// Ref resolution: enum refs substitute the backing model's primitive, any
/// other ref keeps the reference's simple name verbatim. Invalid-identifier
/// repair is the emission sink's job, not the resolver's.
fn resolve_ref(
    target: &str,
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> TypeKind {
    if known_enums.iter().any(|name| name == target) {
        if let Some(SchemaModel::Object(backing)) = definitions
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, model)| model)
        {
            if let Some(backing_type) = backing.schema_type.as_deref() {
                return raw_scalar_kind(backing_type, backing.format.as_deref());
            }
        }
    }
    TypeKind::Named(target.to_string())
}

/// Array item resolution.
///
/// The four numeric item kinds and reference items are special-cased: the
/// item type comes from the item's own kind and format, independent of the
/// outer array's `required` flag. Reference items resolve to the bare name
/// with no enum substitution.
fn resolve_item(
    item: &SchemaProperty,
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> ResolvedType {
    let kind = match &item.kind {
        PropertyKind::Integer if item.format.as_deref() == Some("int64") => TypeKind::Int64,
        PropertyKind::Integer => TypeKind::Int32,
        PropertyKind::Number if item.format.as_deref() == Some("float") => TypeKind::Float,
        PropertyKind::Number => TypeKind::Double,
        PropertyKind::Ref(target) => TypeKind::Named(target.to_string()),
        PropertyKind::Array(nested) => TypeKind::List(Box::new(resolve_item(
            nested,
            known_enums,
            definitions,
        ))),
        other => scalar_kind(other, item.format.as_deref()),
    };
    ResolvedType::required(kind)
}

fn scalar_kind(kind: &PropertyKind, format: Option<&str>) -> TypeKind {
    match kind {
        PropertyKind::Integer if format == Some("int64") => TypeKind::Int64,
        PropertyKind::Integer => TypeKind::Int32,
        PropertyKind::Number => TypeKind::Double,
        PropertyKind::String => TypeKind::Str,
        PropertyKind::Boolean => TypeKind::Bool,
        PropertyKind::Named(raw) => TypeKind::Named(capitalize(raw)),
        // Refs and arrays are handled before scalar fallback
        PropertyKind::Ref(target) => TypeKind::Named(target.to_string()),
        PropertyKind::Array(_) => TypeKind::Named("List".to_string()),
    }
}

/// Scalar fallback over the raw type string, used for enum backing models
pub(crate) fn raw_scalar_kind(raw: &str, format: Option<&str>) -> TypeKind {
    match raw {
        "integer" if format == Some("int64") => TypeKind::Int64,
        "integer" => TypeKind::Int32,
        "number" => TypeKind::Double,
        "string" => TypeKind::Str,
        "boolean" => TypeKind::Bool,
        other => TypeKind::Named(capitalize(other)),
    }
}
