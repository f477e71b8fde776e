//! Interface generator - one RPC method per schema operation
//!
//! Iterates paths and verbs in document order, skipping operations without an
//! operationId. Any failure while processing a single operation is reported
//! to the error-tracking collaborator and that operation is skipped;
//! generation always continues with the next one.

use crate::generation::config::GeneratorConfig;
use crate::generation::errors::GenerationError;
use crate::generation::resolver;
use crate::generation::sanitizers::{capitalize, flatten_dotted_name, model_name};
use crate::generation::traits::ErrorTracking;
use crate::generation::types::{
    InterfaceDefinition, MethodDefinition, MethodParameter, ResolvedType, TypeKind,
};
use crate::infrastructure::swagger::{
    BodySchema, HttpVerb, Operation, Parameter, ParameterLocation, PropertyKind, SchemaDocument,
    SchemaModel, SchemaProperty,
};

/// Status code whose response schema drives return-type inference
const OK_RESPONSE: &str = "200";

/// Generate the RPC interface definition for every operation in the document.
///
/// `model_names` is the alphabet of generated model names; a response
/// reference outside it falls back to the no-payload deferred result.
pub fn generate_interface(
    document: &SchemaDocument,
    config: &GeneratorConfig,
    model_names: &[String],
    known_enums: &[String],
    tracking: &dyn ErrorTracking,
) -> InterfaceDefinition {
    let mut methods = Vec::new();

    for item in &document.paths {
        for (verb, operation) in &item.operations {
            match build_method(
                &item.path,
                *verb,
                operation,
                config,
                model_names,
                known_enums,
                &document.definitions,
            ) {
                Ok(method) => methods.push(method),
                Err(error) => {
                    tracing::warn!(path = %item.path, %verb, %error, "skipping operation");
                    tracking.report(&error);
                }
            }
        }
    }

    tracing::debug!(count = methods.len(), "generated interface methods");
    InterfaceDefinition {
        name: format!("{}ApiInterface", config.component_name),
        methods,
    }
}

fn build_method(
    path: &str,
    verb: HttpVerb,
    operation: &Operation,
    config: &GeneratorConfig,
    model_names: &[String],
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> Result<MethodDefinition, GenerationError> {
    let name = operation
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GenerationError::MissingOperationId {
            verb: verb.to_string(),
            path: path.to_string(),
        })?;

    let parameters = method_parameters(&name, operation, known_enums, definitions)?;
    let return_type = return_type(operation, model_names);
    let headers = config
        .header_overrides
        .get(&name)
        .cloned()
        .unwrap_or_default();

    Ok(MethodDefinition {
        name,
        verb,
        path: path.trim_start_matches('/').to_string(),
        parameters,
        return_type,
        headers,
    })
}

/// Bind the operation's declared parameters.
///
/// Dotted wire names are flattened to camel-case binding identifiers while
/// the wire name stays verbatim. Parameters bound to locations other than
/// path/query/body are dropped without error.
fn method_parameters(
    operation_id: &str,
    operation: &Operation,
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> Result<Vec<MethodParameter>, GenerationError> {
    let mut bindings = Vec::new();

    for parameter in &operation.parameters {
        let ty = match parameter.location {
            ParameterLocation::Body => body_parameter_type(parameter),
            ParameterLocation::Path | ParameterLocation::Query => {
                query_or_path_type(operation_id, parameter, known_enums, definitions)?
            }
            ParameterLocation::Other => continue,
        };

        bindings.push(MethodParameter {
            binding_name: flatten_dotted_name(&parameter.name),
            wire_name: parameter.name.clone(),
            location: parameter.location,
            ty,
        });
    }

    Ok(bindings)
}

/// Resolve a path or query parameter; an array parameter with no declared
/// item shape is a malformed operation
fn query_or_path_type(
    operation_id: &str,
    parameter: &Parameter,
    known_enums: &[String],
    definitions: &[(String, SchemaModel)],
) -> Result<ResolvedType, GenerationError> {
    if let PropertyKind::Named(raw) = &parameter.property.kind {
        if raw == "object" {
            // A simple parameter with no declared type has no usable binding
            return Err(GenerationError::InvalidParameter {
                operation: operation_id.to_string(),
                reason: format!("parameter {} has no declared type", parameter.name),
            });
        }
    }
    Ok(resolver::resolve(&parameter.property, known_enums, definitions))
}

/// Resolve the target type of a body parameter from its schema.
///
/// A body parameter without a schema behaves like an undeclared inline one:
/// the binding gets a best-guess type named after the parameter itself.
fn body_parameter_type(parameter: &Parameter) -> ResolvedType {
    let required = parameter.property.required;
    match parameter.schema.as_ref() {
        Some(BodySchema::Ref(target)) => ResolvedType::with_required(
            TypeKind::Named(model_name(&capitalize(target))),
            required,
        ),
        Some(BodySchema::Array(item)) => {
            let array = SchemaProperty {
                required,
                ..SchemaProperty::new(PropertyKind::Array(Box::new(item.clone())))
            };
            resolver::resolve(&array, &[], &[])
        }
        Some(BodySchema::Inline { schema_type }) => {
            let kind = match schema_type.as_deref() {
                Some("string") => TypeKind::Str,
                Some("boolean") => TypeKind::Bool,
                // Best guess: a type named after the parameter itself
                _ => TypeKind::Named(capitalize(&parameter.name)),
            };
            ResolvedType::with_required(kind, required)
        }
        None => ResolvedType::with_required(TypeKind::Named(capitalize(&parameter.name)), required),
    }
}

/// Infer the method return type from the 200 response.
///
/// Any shape other than a direct reference or an array of references to a
/// known generated model falls back to the no-payload deferred result.
fn return_type(operation: &Operation, model_names: &[String]) -> ResolvedType {
    let Some(schema) = operation
        .response(OK_RESPONSE)
        .and_then(|response| response.schema.as_ref())
    else {
        return ResolvedType::deferred_unit();
    };

    match &schema.kind {
        PropertyKind::Ref(target) => {
            // Same identifier fallback the model generator applies, so
            // renamed models are still found in the alphabet
            let name = model_name(target);
            if model_names.contains(&name) {
                ResolvedType::deferred(ResolvedType::named(name))
            } else {
                ResolvedType::deferred_unit()
            }
        }
        PropertyKind::Array(item) => match &item.kind {
            PropertyKind::Ref(target) => {
                let name = model_name(target);
                if model_names.contains(&name) {
                    ResolvedType::deferred(ResolvedType::list_of(ResolvedType::named(name)))
                } else {
                    ResolvedType::deferred_unit()
                }
            }
            _ => ResolvedType::deferred_unit(),
        },
        _ => ResolvedType::deferred_unit(),
    }
}
