//! Swagger document parser
//!
//! Turns the raw JSON value of a Swagger/OpenAPI 2.0 spec into the typed
//! [`SchemaDocument`] consumed by the generation passes. `$ref` targets are
//! reduced to their simple (last segment) name; reference resolution against
//! the definition table happens later, in the type resolver.

use serde_json::Value as JsonValue;
use std::str::FromStr;

use super::types::{
    BodySchema, HttpVerb, ObjectModel, Operation, Parameter, ParameterLocation, PathItem,
    PropertyKind, ResponseSpec, SchemaDocument, SchemaModel, SchemaProperty,
};
use crate::generation::GenerationError;

/// Extension key carrying display names for enum-backed definitions
const ENUM_NAMES_EXTENSION: &str = "x-enumNames";

/// Swagger specification parser
pub struct SwaggerParser {
    /// The raw JSON value of the spec
    json: JsonValue,
}

impl SwaggerParser {
    /// Create a new parser from JSON content
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the specification into the typed document model
    pub fn parse(&self) -> Result<SchemaDocument, GenerationError> {
        if !self.json.is_object() {
            return Err(GenerationError::LoadError(
                "schema document root is not an object".to_string(),
            ));
        }

        let definitions = self.parse_definitions();
        let paths = self.parse_paths();
        tracing::debug!(
            definitions = definitions.len(),
            paths = paths.len(),
            "parsed schema document"
        );

        Ok(SchemaDocument { definitions, paths })
    }

    /// Parse the `definitions` table in document order.
    ///
    /// A missing or malformed table is an empty one, not an error.
    fn parse_definitions(&self) -> Vec<(String, SchemaModel)> {
        self.json
            .get("definitions")
            .and_then(JsonValue::as_object)
            .map(|defs| {
                defs.iter()
                    .map(|(name, value)| (name.clone(), self.parse_model(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parse a definition value, recursing into `allOf` compositions
    fn parse_model(&self, value: &JsonValue) -> SchemaModel {
        self.parse_model_guarded(value, 0)
    }

    fn parse_model_guarded(&self, value: &JsonValue, depth: usize) -> SchemaModel {
        // Self-referential allOf chains must not recurse forever
        if depth > 16 {
            return SchemaModel::Object(ObjectModel::default());
        }

        // A composition component may itself be a reference to a definition
        if let Some(target) = value.get("$ref").and_then(JsonValue::as_str) {
            if let Some(resolved) = target
                .strip_prefix('#')
                .and_then(|pointer| self.json.pointer(pointer))
            {
                return self.parse_model_guarded(resolved, depth + 1);
            }
            return SchemaModel::Object(ObjectModel::default());
        }

        if let Some(all_of) = value.get("allOf").and_then(JsonValue::as_array) {
            let parts = all_of
                .iter()
                .map(|part| self.parse_model_guarded(part, depth + 1))
                .collect();
            return SchemaModel::Composed(parts);
        }

        let required: Vec<&str> = value
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|arr| arr.iter().filter_map(JsonValue::as_str).collect())
            .unwrap_or_default();

        let properties = value
            .get("properties")
            .and_then(JsonValue::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, prop)| {
                        let mut property = self.parse_property(prop);
                        property.required = required.contains(&name.as_str());
                        (name.clone(), property)
                    })
                    .collect()
            })
            .unwrap_or_default();

        SchemaModel::Object(ObjectModel {
            schema_type: string_field(value, "type"),
            format: string_field(value, "format"),
            properties,
            enum_values: literal_list(value.get("enum")),
            enum_names: value
                .get(ENUM_NAMES_EXTENSION)
                .and_then(JsonValue::as_array)
                .map(|arr| {
                    arr.iter()
                        .filter_map(JsonValue::as_str)
                        .map(String::from)
                        .collect()
                }),
        })
    }

    /// Parse a property or parameter shape into the closed variant set
    fn parse_property(&self, value: &JsonValue) -> SchemaProperty {
        if let Some(target) = value.get("$ref").and_then(JsonValue::as_str) {
            return SchemaProperty::new(PropertyKind::Ref(simple_ref(target)));
        }

        let kind = match value.get("type").and_then(JsonValue::as_str) {
            Some("array") => {
                let item = value
                    .get("items")
                    .map(|items| self.parse_property(items))
                    .unwrap_or_else(|| SchemaProperty::new(PropertyKind::Named("object".into())));
                PropertyKind::Array(Box::new(item))
            }
            Some("integer") => PropertyKind::Integer,
            Some("number") => PropertyKind::Number,
            Some("string") => PropertyKind::String,
            Some("boolean") => PropertyKind::Boolean,
            Some(other) => PropertyKind::Named(other.to_string()),
            None => PropertyKind::Named("object".to_string()),
        };

        SchemaProperty {
            kind,
            format: string_field(value, "format"),
            required: false,
            enum_values: literal_list(value.get("enum")),
        }
    }

    /// Parse the `paths` table, probing each path item for every known verb
    fn parse_paths(&self) -> Vec<PathItem> {
        self.json
            .get("paths")
            .and_then(JsonValue::as_object)
            .map(|paths| {
                paths
                    .iter()
                    .map(|(path, item)| PathItem {
                        path: path.clone(),
                        operations: self.parse_operations(item),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_operations(&self, path_item: &JsonValue) -> Vec<(HttpVerb, Operation)> {
        // Path-level parameters apply to every operation under the path
        let shared = self.parse_parameters(path_item);

        HttpVerb::all()
            .iter()
            .filter_map(|verb| {
                path_item
                    .get(verb.to_string())
                    .filter(|item| item.is_object())
                    .map(|item| (*verb, self.parse_operation(item, &shared)))
            })
            .collect()
    }

    fn parse_operation(&self, item: &JsonValue, shared: &[Parameter]) -> Operation {
        let mut parameters = shared.to_vec();
        parameters.extend(self.parse_parameters(item));

        let responses = item
            .get("responses")
            .and_then(JsonValue::as_object)
            .map(|map| {
                map.iter()
                    .map(|(code, response)| (code.clone(), self.parse_response(response)))
                    .collect()
            })
            .unwrap_or_default();

        Operation {
            id: string_field(item, "operationId"),
            parameters,
            responses,
        }
    }

    /// Parse a `parameters` array, resolving `$ref` entries against the
    /// document and skipping entries with no name
    fn parse_parameters(&self, item: &JsonValue) -> Vec<Parameter> {
        item.get("parameters")
            .and_then(JsonValue::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|param| {
                        if let Some(target) = param.get("$ref").and_then(JsonValue::as_str) {
                            let pointer = target.strip_prefix('#')?;
                            self.json
                                .pointer(pointer)
                                .and_then(|resolved| self.parse_parameter(resolved))
                        } else {
                            self.parse_parameter(param)
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_parameter(&self, param: &JsonValue) -> Option<Parameter> {
        let name = param.get("name").and_then(JsonValue::as_str)?.to_string();

        let location = match param.get("in").and_then(JsonValue::as_str) {
            Some("path") => ParameterLocation::Path,
            Some("query") => ParameterLocation::Query,
            Some("body") => ParameterLocation::Body,
            _ => ParameterLocation::Other,
        };

        let mut property = self.parse_property(param);
        property.required = param
            .get("required")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);

        let schema = param.get("schema").map(|schema| self.parse_body_schema(schema));

        Some(Parameter {
            name,
            location,
            property,
            schema,
        })
    }

    fn parse_body_schema(&self, schema: &JsonValue) -> BodySchema {
        if let Some(target) = schema.get("$ref").and_then(JsonValue::as_str) {
            return BodySchema::Ref(simple_ref(target));
        }
        if schema.get("type").and_then(JsonValue::as_str) == Some("array") {
            let item = schema
                .get("items")
                .map(|items| self.parse_property(items))
                .unwrap_or_else(|| SchemaProperty::new(PropertyKind::Named("object".into())));
            return BodySchema::Array(item);
        }
        BodySchema::Inline {
            schema_type: string_field(schema, "type"),
        }
    }

    fn parse_response(&self, response: &JsonValue) -> ResponseSpec {
        ResponseSpec {
            schema: response.get("schema").map(|schema| self.parse_property(schema)),
        }
    }
}

/// Reduce a `$ref` target to its simple name, e.g. `#/definitions/Pet` -> `Pet`
fn simple_ref(target: &str) -> String {
    target.rsplit('/').next().unwrap_or(target).to_string()
}

fn string_field(value: &JsonValue, key: &str) -> Option<String> {
    value.get(key).and_then(JsonValue::as_str).map(String::from)
}

/// Stringify an enum literal list; non-string literals keep their JSON text
fn literal_list(value: Option<&JsonValue>) -> Vec<String> {
    value
        .and_then(JsonValue::as_array)
        .map(|arr| {
            arr.iter()
                .map(|literal| match literal {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

impl FromStr for SchemaDocument {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let json = serde_json::from_str(s).map_err(GenerationError::SerializationError)?;
        SwaggerParser::new(json).parse()
    }
}
