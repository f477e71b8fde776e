//! Composite schema loader that picks a loading strategy per source

use async_trait::async_trait;
use url::Url;

use crate::generation::{GenerationError, SchemaLoader};
use crate::infrastructure::swagger::SchemaDocument;

/// Composite loader dispatching between HTTP and file loading
pub struct CompositeSchemaLoader {
    http: super::HttpSchemaLoader,
    file: super::FileSchemaLoader,
}

impl CompositeSchemaLoader {
    pub fn new() -> Self {
        Self {
            http: super::HttpSchemaLoader::new(),
            file: super::FileSchemaLoader::new(),
        }
    }
}

impl Default for CompositeSchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// A source is remote when it parses as an http(s) URL; everything else is a
/// file path
fn is_remote(source: &str) -> bool {
    Url::parse(source)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[async_trait]
impl SchemaLoader for CompositeSchemaLoader {
    async fn load(&self, source: &str) -> Result<SchemaDocument, GenerationError> {
        if is_remote(source) {
            tracing::debug!(source, "loading schema over HTTP");
            self.http.load(source).await
        } else {
            tracing::debug!(source, "loading schema from file");
            self.file.load(source).await
        }
    }
}
