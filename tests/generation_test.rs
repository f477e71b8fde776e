//! End-to-end generation tests over the petstore fixture

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use apiwire::generation::{
    ApiBuilder, EnumValue, ErrorTracking, GenerationError, GeneratorConfig, ResolvedType, TypeKind,
};
use apiwire::infrastructure::swagger::{HttpVerb, ParameterLocation, SchemaDocument};

struct RecordingTracking {
    reports: Mutex<Vec<String>>,
}

impl RecordingTracking {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            reports: Mutex::new(Vec::new()),
        })
    }

    fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl ErrorTracking for RecordingTracking {
    fn report(&self, failure: &GenerationError) {
        self.reports.lock().unwrap().push(failure.to_string());
    }
}

fn petstore() -> SchemaDocument {
    SchemaDocument::from_str(include_str!("fixtures/petstore.swagger.v2.json"))
        .expect("fixture parses")
}

fn config() -> GeneratorConfig {
    GeneratorConfig::new("com.example.petstore", "Petstore", "petstore", "petstore.json")
}

#[test]
fn empty_document_generates_empty_collections() {
    let surface = ApiBuilder::new(config()).build(&SchemaDocument::default());

    assert!(surface.models.is_empty());
    assert!(surface.enums.is_empty());
    assert!(surface.interface.methods.is_empty());
}

#[test]
fn petstore_models_follow_document_order() {
    let surface = ApiBuilder::new(config()).build(&petstore());

    let names: Vec<&str> = surface.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Category",
            "Tag",
            "Pet",
            "OrderStatus",
            "Order",
            "Dog",
            "ModelApi-response"
        ]
    );
}

#[test]
fn pet_model_fields_and_nullability() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let pet = surface.models.iter().find(|m| m.name == "Pet").unwrap();

    let id = pet.fields.iter().find(|f| f.name == "id").unwrap();
    assert_eq!(id.ty.kind, TypeKind::Int64);
    assert!(id.ty.nullable);

    let name = pet.fields.iter().find(|f| f.name == "name").unwrap();
    assert_eq!(name.ty.kind, TypeKind::Str);
    assert!(!name.ty.nullable);

    let tags = pet.fields.iter().find(|f| f.name == "tags").unwrap();
    assert_eq!(
        tags.ty.kind,
        TypeKind::List(Box::new(ResolvedType::named("Tag")))
    );

    let category = pet.fields.iter().find(|f| f.name == "category").unwrap();
    assert_eq!(category.ty.kind, TypeKind::Named("Category".to_string()));
}

#[test]
fn enum_backed_reference_field_uses_underlying_primitive() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let order = surface.models.iter().find(|m| m.name == "Order").unwrap();

    // Order.status references the OrderStatus enum, whose backing model is an
    // integer, so the field resolves to the primitive rather than the name
    let status = order.fields.iter().find(|f| f.name == "status").unwrap();
    assert_eq!(status.ty.kind, TypeKind::Int32);
}

#[test]
fn extracted_enums_and_dedup() {
    let surface = ApiBuilder::new(config()).build(&petstore());

    let names: Vec<&str> = surface.enums.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Kind", "Status", "OrderStatus"]);

    let status = &surface.enums[1];
    assert_eq!(status.constants.len(), 3);
    assert_eq!(status.constants[0].name, "available");

    let order_status = &surface.enums[2];
    assert_eq!(order_status.constants[0].name, "Placed");
    assert_eq!(order_status.constants[0].value, EnumValue::Int(0));
    assert_eq!(order_status.constants[2].value, EnumValue::Int(2));
}

#[test]
fn composed_model_flattens_with_last_component_winning() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let dog = surface.models.iter().find(|m| m.name == "Dog").unwrap();

    // Pet's properties come through the allOf reference
    assert!(dog.fields.iter().any(|f| f.name == "name"));
    assert!(dog.fields.iter().any(|f| f.name == "barks"));

    // Pet declares status as a string enum, the Dog component redeclares it
    // as boolean; exactly one field remains and the last declaration wins
    let statuses: Vec<_> = dog.fields.iter().filter(|f| f.name == "status").collect();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].ty.kind, TypeKind::Bool);
}

#[test]
fn round_trip_get_pet_by_id() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let method = surface
        .interface
        .methods
        .iter()
        .find(|m| m.name == "getPetById")
        .unwrap();

    assert_eq!(method.verb, HttpVerb::Get);
    assert_eq!(method.path, "pet/{petId}");
    assert_eq!(method.parameters.len(), 1);

    let pet_id = &method.parameters[0];
    assert_eq!(pet_id.binding_name, "petId");
    assert_eq!(pet_id.location, ParameterLocation::Path);
    assert_eq!(pet_id.ty.kind, TypeKind::Int32);
    assert!(!pet_id.ty.nullable);

    assert_eq!(
        method.return_type,
        ResolvedType::deferred(ResolvedType::named("Pet"))
    );
}

#[test]
fn array_response_returns_deferred_list() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let method = surface
        .interface
        .methods
        .iter()
        .find(|m| m.name == "findPetsByStatus")
        .unwrap();

    assert_eq!(
        method.return_type,
        ResolvedType::deferred(ResolvedType::list_of(ResolvedType::named("Pet")))
    );

    // Dotted query name flattens for the binding while the wire name is kept
    let filter = &method.parameters[0];
    assert_eq!(filter.binding_name, "filterStatus");
    assert_eq!(filter.wire_name, "filter.status");

    let tags = &method.parameters[1];
    assert_eq!(
        tags.ty.kind,
        TypeKind::List(Box::new(ResolvedType::required(TypeKind::Str)))
    );
    assert!(tags.ty.nullable);
}

#[test]
fn primitive_response_falls_back_to_no_payload() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let method = surface
        .interface
        .methods
        .iter()
        .find(|m| m.name == "getInventory")
        .unwrap();

    assert_eq!(method.return_type, ResolvedType::deferred_unit());
}

#[test]
fn unresolvable_response_reference_falls_back_to_no_payload() {
    let document = SchemaDocument::from_str(
        r##"{
            "swagger": "2.0",
            "paths": {
                "/ghosts": {
                    "get": {
                        "operationId": "listGhosts",
                        "responses": {
                            "200": { "schema": { "$ref": "#/definitions/Ghost" } }
                        }
                    }
                }
            }
        }"##,
    )
    .unwrap();

    let surface = ApiBuilder::new(config()).build(&document);
    assert_eq!(
        surface.interface.methods[0].return_type,
        ResolvedType::deferred_unit()
    );
}

#[test]
fn body_parameter_binds_model_type() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let method = surface
        .interface
        .methods
        .iter()
        .find(|m| m.name == "addPet")
        .unwrap();

    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.parameters[0].location, ParameterLocation::Body);
    assert_eq!(
        method.parameters[0].ty.kind,
        TypeKind::Named("Pet".to_string())
    );
    assert!(!method.parameters[0].ty.nullable);
}

#[test]
fn schemaless_body_parameter_still_generates_method() {
    let document = SchemaDocument::from_str(
        r#"{
            "swagger": "2.0",
            "paths": {
                "/things": {
                    "post": {
                        "operationId": "addThing",
                        "parameters": [{ "name": "body", "in": "body" }],
                        "responses": {}
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let tracking = RecordingTracking::new();
    let surface = ApiBuilder::with_tracking(config(), tracking.clone()).build(&document);

    assert_eq!(surface.interface.methods.len(), 1);
    assert_eq!(
        surface.interface.methods[0].parameters[0].ty.kind,
        TypeKind::Named("Body".to_string())
    );
    assert_eq!(tracking.count(), 0);
}

#[test]
fn header_parameters_are_dropped() {
    let surface = ApiBuilder::new(config()).build(&petstore());
    let method = surface
        .interface
        .methods
        .iter()
        .find(|m| m.name == "deletePet")
        .unwrap();

    // The shared path parameter binds; the header parameter does not
    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.parameters[0].binding_name, "petId");
}

#[test]
fn header_overrides_attach_to_named_operation_only() {
    let config = config().with_headers("getPetById", vec!["X-No-Auth: X".to_string()]);
    let surface = ApiBuilder::new(config).build(&petstore());

    for method in &surface.interface.methods {
        if method.name == "getPetById" {
            assert_eq!(method.headers, vec!["X-No-Auth: X".to_string()]);
        } else {
            assert!(method.headers.is_empty(), "{} has headers", method.name);
        }
    }
}

#[test]
fn operation_without_id_is_reported_and_skipped() {
    let tracking = RecordingTracking::new();
    let surface = ApiBuilder::with_tracking(config(), tracking.clone()).build(&petstore());

    // /health GET has no operationId; every other operation generates
    assert_eq!(surface.interface.methods.len(), 7);
    assert_eq!(tracking.count(), 1);
    assert!(
        tracking.reports.lock().unwrap()[0].contains("operationId"),
        "report names the missing id"
    );
}

#[test]
fn failure_isolation_keeps_valid_operations() {
    // One malformed operation (query parameter with no declared type) among
    // valid ones
    let document = SchemaDocument::from_str(
        r#"{
            "swagger": "2.0",
            "paths": {
                "/a": { "get": { "operationId": "opA", "responses": {} } },
                "/b": {
                    "get": {
                        "operationId": "opB",
                        "parameters": [{ "name": "filter", "in": "query" }],
                        "responses": {}
                    }
                },
                "/c": { "get": { "operationId": "opC", "responses": {} } }
            }
        }"#,
    )
    .unwrap();

    let tracking = RecordingTracking::new();
    let surface = ApiBuilder::with_tracking(config(), tracking.clone()).build(&document);

    let names: Vec<&str> = surface
        .interface
        .methods
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["opA", "opC"]);
    assert_eq!(tracking.count(), 1);
}

#[test]
fn invalid_definition_name_round_trips_through_return_type() {
    let document = SchemaDocument::from_str(
        r##"{
            "swagger": "2.0",
            "definitions": {
                "api-response": {
                    "type": "object",
                    "properties": { "code": { "type": "integer" } }
                }
            },
            "paths": {
                "/status": {
                    "get": {
                        "operationId": "getStatus",
                        "responses": {
                            "200": { "schema": { "$ref": "#/definitions/api-response" } }
                        }
                    }
                }
            }
        }"##,
    )
    .unwrap();

    let surface = ApiBuilder::new(config()).build(&document);

    // The renamed model is still found by applying the same fallback
    assert_eq!(surface.models[0].name, "ModelApi-response");
    assert_eq!(
        surface.interface.methods[0].return_type,
        ResolvedType::deferred(ResolvedType::named("ModelApi-response"))
    );
}
