//! Port interfaces for the generation domain

use async_trait::async_trait;

use crate::generation::{ApiSurface, GenerationError, GeneratorConfig};
use crate::infrastructure::swagger::SchemaDocument;

/// Loads schema documents
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    /// Load a schema document from a source path or URL
    async fn load(&self, source: &str) -> Result<SchemaDocument, GenerationError>;
}

/// Sink for recoverable per-item failures.
///
/// Implementations must never abort generation; reporting is fire-and-forget.
pub trait ErrorTracking: Send + Sync {
    fn report(&self, failure: &GenerationError);
}

/// Default tracking: discard every report
pub struct NoopTracking;

impl ErrorTracking for NoopTracking {
    fn report(&self, _failure: &GenerationError) {}
}

/// Tracking that surfaces reports through the tracing subscriber
pub struct LogTracking;

impl ErrorTracking for LogTracking {
    fn report(&self, failure: &GenerationError) {
        tracing::warn!(%failure, "recoverable generation failure");
    }
}

/// Renders the produced descriptors to their final form and writes them out.
///
/// Source-text emission lives behind this seam; the core only ever hands over
/// the finished [`ApiSurface`].
pub trait EmissionSink {
    fn emit(&self, surface: &ApiSurface, config: &GeneratorConfig) -> Result<(), GenerationError>;
}
