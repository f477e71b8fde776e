//! Generation orchestration - runs the passes over one schema document

use std::sync::Arc;

use crate::generation::config::GeneratorConfig;
use crate::generation::traits::{ErrorTracking, NoopTracking};
use crate::generation::types::ApiSurface;
use crate::generation::{enums, interface, models};
use crate::infrastructure::swagger::SchemaDocument;

/// Builds the typed client surface for a schema document.
///
/// One builder runs one synchronous, pure pass sequence: enum extraction,
/// then model generation, then interface generation. Each run owns its
/// output collections exclusively and hands them, fully built, to the
/// caller.
pub struct ApiBuilder {
    config: GeneratorConfig,
    tracking: Arc<dyn ErrorTracking>,
}

impl ApiBuilder {
    /// Create a builder with the default no-op error tracking
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_tracking(config, Arc::new(NoopTracking))
    }

    /// Create a builder reporting recoverable failures to `tracking`
    pub fn with_tracking(config: GeneratorConfig, tracking: Arc<dyn ErrorTracking>) -> Self {
        Self { config, tracking }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run generation over the document.
    ///
    /// Never fails: malformed fragments contribute nothing to the output and
    /// the empty document produces empty collections.
    pub fn build(&self, document: &SchemaDocument) -> ApiSurface {
        tracing::debug!(
            definitions = document.definitions.len(),
            paths = document.paths.len(),
            "starting generation run"
        );

        let enums = enums::extract_enums(document);
        let enum_names: Vec<String> = enums.iter().map(|e| e.name.clone()).collect();

        let (models, model_names) = models::generate_models(document, &enum_names);

        let interface = interface::generate_interface(
            document,
            &self.config,
            &model_names,
            &enum_names,
            &*self.tracking,
        );

        ApiSurface {
            interface,
            models,
            enums,
        }
    }
}
