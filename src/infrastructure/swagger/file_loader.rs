//! File-based schema loader
//!
//! This loader handles only file I/O. The actual parsing is done by the SwaggerParser.

use async_trait::async_trait;
use tokio::fs;

use super::parser::SwaggerParser;
use crate::generation::{GenerationError, SchemaLoader};
use crate::infrastructure::swagger::SchemaDocument;

/// Loads schema documents from local files
pub struct FileSchemaLoader;

impl FileSchemaLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SchemaLoader for FileSchemaLoader {
    async fn load(&self, source: &str) -> Result<SchemaDocument, GenerationError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(GenerationError::IoError)?;

        // Parse content as JSON or YAML
        let spec_value = if source.ends_with(".json") {
            serde_json::from_str(&content).map_err(GenerationError::SerializationError)?
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(&content)
                .map_err(|e| GenerationError::LoadError(format!("Failed to parse YAML: {e}")))?
        } else {
            // Try JSON first, then YAML
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| {
                    GenerationError::LoadError(format!("Failed to parse schema document: {e}"))
                })?
        };

        SwaggerParser::new(spec_value).parse()
    }
}

impl Default for FileSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}
