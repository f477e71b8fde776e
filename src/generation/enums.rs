//! Enum extractor - collects enumeration definitions from the schema graph
//!
//! Two independent passes over the same document, merged into one
//! order-preserving deduplicated list: path-parameter enums and model enums.
//! A failure on any single candidate skips that candidate only.

use crate::generation::sanitizers::capitalize;
use crate::generation::types::{EnumConstant, EnumDefinition, EnumValue};
use crate::infrastructure::swagger::{
    ObjectModel, ParameterLocation, PropertyKind, SchemaDocument, SchemaModel,
};

/// Extract every enumeration definition from the document.
///
/// Ordering is insertion order of first encounter; duplicate definitions are
/// suppressed and the first occurrence wins on name collision.
pub fn extract_enums(document: &SchemaDocument) -> Vec<EnumDefinition> {
    let mut enums = Vec::new();
    path_parameter_enums(document, &mut enums);
    model_enums(document, &mut enums);
    tracing::debug!(count = enums.len(), "extracted enum definitions");
    enums
}

/// Pass 1: enums declared inline on path-bound operation parameters
fn path_parameter_enums(document: &SchemaDocument, enums: &mut Vec<EnumDefinition>) {
    for item in &document.paths {
        for (_, operation) in &item.operations {
            for parameter in &operation.parameters {
                if parameter.location == ParameterLocation::Path
                    && !parameter.property.enum_values.is_empty()
                {
                    push_unique(
                        enums,
                        EnumDefinition::from_literals(
                            capitalize(&parameter.name),
                            &parameter.property.enum_values,
                        ),
                    );
                }
            }
        }
    }
}

/// Pass 2: enums declared on definition properties, inline or by reference
fn model_enums(document: &SchemaDocument, enums: &mut Vec<EnumDefinition>) {
    for (_, definition) in &document.definitions {
        let SchemaModel::Object(model) = definition else {
            continue;
        };
        for (key, property) in &model.properties {
            match &property.kind {
                PropertyKind::String if !property.enum_values.is_empty() => {
                    push_unique(
                        enums,
                        EnumDefinition::from_literals(capitalize(key), &property.enum_values),
                    );
                }
                PropertyKind::Ref(target) => {
                    // First occurrence wins by name
                    if enums.iter().any(|e| &e.name == target) {
                        continue;
                    }
                    if let Some(SchemaModel::Object(backing)) = document.definition(target) {
                        // A bad candidate skips that property, never the pass
                        if let Some(definition) = referenced_enum(target, backing) {
                            push_unique(enums, definition);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Build an enum from a referenced definition carrying an enum constraint and
/// paired name-extension metadata. Candidates without the extension, or whose
/// integer literals fail to parse, are skipped.
fn referenced_enum(name: &str, backing: &ObjectModel) -> Option<EnumDefinition> {
    if backing.enum_values.is_empty() {
        return None;
    }
    let names = backing.enum_names.as_ref()?;

    let values = parse_enum_values(backing.schema_type.as_deref(), &backing.enum_values)?;
    let constants = names
        .iter()
        .zip(values)
        .map(|(display, value)| EnumConstant {
            name: display.clone(),
            value,
        })
        .collect();

    Some(EnumDefinition {
        name: name.to_string(),
        constants,
    })
}

/// Parse stringified literals into typed values based on the backing type.
/// An unparseable integer literal invalidates the whole candidate.
fn parse_enum_values(schema_type: Option<&str>, literals: &[String]) -> Option<Vec<EnumValue>> {
    if schema_type == Some("integer") {
        literals
            .iter()
            .map(|literal| literal.parse::<i64>().ok().map(EnumValue::Int))
            .collect()
    } else {
        Some(
            literals
                .iter()
                .map(|literal| EnumValue::Str(literal.clone()))
                .collect(),
        )
    }
}

/// Suppress duplicates: first-seen wins on name collision, which also covers
/// structurally identical candidates
fn push_unique(enums: &mut Vec<EnumDefinition>, candidate: EnumDefinition) {
    if !enums.iter().any(|existing| existing.name == candidate.name) {
        enums.push(candidate);
    }
}
