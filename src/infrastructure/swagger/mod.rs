//! Schema document acquisition and parsing

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod parser;
pub mod types;

pub use composite_loader::CompositeSchemaLoader;
pub use file_loader::FileSchemaLoader;
pub use http_loader::HttpSchemaLoader;
pub use parser::SwaggerParser;
pub use types::{
    BodySchema, HttpVerb, ObjectModel, Operation, Parameter, ParameterLocation, PathItem,
    PropertyKind, ResponseSpec, SchemaDocument, SchemaModel, SchemaProperty,
};

use crate::generation::{ErrorTracking, SchemaLoader};

/// Load a schema document, substituting the empty document on failure.
///
/// Acquisition failures (unreachable source, missing file, malformed document)
/// are reported to the error-tracking collaborator and never surface to the
/// caller; the empty document is valid input that generates empty outputs.
pub async fn load_document_or_empty(
    loader: &dyn SchemaLoader,
    source: &str,
    tracking: &dyn ErrorTracking,
) -> SchemaDocument {
    match loader.load(source).await {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(source, %error, "schema acquisition failed, using empty document");
            tracking.report(&error);
            SchemaDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationError;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    struct RecordingTracking {
        reports: Mutex<Vec<String>>,
    }

    impl RecordingTracking {
        fn new() -> Self {
            Self {
                reports: Mutex::new(Vec::new()),
            }
        }
    }

    impl ErrorTracking for RecordingTracking {
        fn report(&self, failure: &GenerationError) {
            self.reports.lock().unwrap().push(failure.to_string());
        }
    }

    #[tokio::test]
    async fn test_file_loader_json() {
        let loader = FileSchemaLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let spec_json = r#"{
            "swagger": "2.0",
            "definitions": {
                "Pet": { "type": "object", "properties": { "name": { "type": "string" } } }
            },
            "paths": {
                "/pets": { "get": { "operationId": "listPets", "responses": {} } }
            }
        }"#;

        temp_file
            .write_all(spec_json.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let doc = loader
            .load(temp_file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(doc.definitions.len(), 1);
        assert_eq!(doc.paths.len(), 1);
    }

    #[tokio::test]
    async fn test_file_loader_yaml() {
        let loader = FileSchemaLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let spec_yaml = r#"swagger: "2.0"
definitions:
  Pet:
    type: object
paths: {}"#;

        temp_file
            .write_all(spec_yaml.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let doc = loader
            .load(temp_file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(doc.definitions.len(), 1);
    }

    #[tokio::test]
    async fn test_file_loader_not_found() {
        let loader = FileSchemaLoader::new();
        assert!(loader.load("/nonexistent/file.yaml").await.is_err());
    }

    #[tokio::test]
    async fn test_load_or_empty_substitutes_and_reports() {
        let loader = CompositeSchemaLoader::new();
        let tracking = RecordingTracking::new();

        let doc = load_document_or_empty(&loader, "/nonexistent/file.json", &tracking).await;

        assert!(doc.definitions.is_empty());
        assert!(doc.paths.is_empty());
        assert_eq!(tracking.reports.lock().unwrap().len(), 1);
    }
}
