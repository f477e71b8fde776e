//! Model generator - one data-model definition per schema definition
//!
//! Composed (allOf) definitions flatten their components' properties in
//! listed order; a later component's same-named field overwrites the earlier
//! type while keeping the first position. Definition keys that are not legal
//! identifiers fall back to a synthesized `Model`-prefixed name, the same
//! fallback the interface generator applies when inferring return types.

use crate::generation::resolver;
use crate::generation::sanitizers::model_name;
use crate::generation::types::{FieldDefinition, ModelDefinition};
use crate::infrastructure::swagger::{SchemaDocument, SchemaModel, SchemaProperty};

/// Generate model definitions for every document definition, in document
/// order. Returns the models alongside the list of final model names - the
/// alphabet the interface generator checks response references against.
pub fn generate_models(
    document: &SchemaDocument,
    known_enums: &[String],
) -> (Vec<ModelDefinition>, Vec<String>) {
    let mut models = Vec::new();
    let mut names = Vec::new();

    for (key, definition) in &document.definitions {
        let name = model_name(key);

        let mut properties: Vec<(String, SchemaProperty)> = Vec::new();
        collect_properties(definition, &mut properties);

        let fields = properties
            .into_iter()
            .map(|(field_name, property)| FieldDefinition {
                ty: resolver::resolve(&property, known_enums, &document.definitions),
                name: field_name,
            })
            .collect();

        names.push(name.clone());
        models.push(ModelDefinition { name, fields });
    }

    tracing::debug!(count = models.len(), "generated model definitions");
    (models, names)
}

/// Flatten a definition's effective property set in listed order.
/// Later duplicates overwrite earlier same-named entries in place.
fn collect_properties(definition: &SchemaModel, out: &mut Vec<(String, SchemaProperty)>) {
    match definition {
        SchemaModel::Object(model) => {
            for (name, property) in &model.properties {
                if let Some(existing) = out.iter_mut().find(|(key, _)| key == name) {
                    existing.1 = property.clone();
                } else {
                    out.push((name.clone(), property.clone()));
                }
            }
        }
        SchemaModel::Composed(parts) => {
            for part in parts {
                collect_properties(part, out);
            }
        }
    }
}
