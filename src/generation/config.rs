//! Generator configuration - the explicit value object supplied by the caller

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::generation::{GenerationError, sanitizers};

/// Configuration for one generation run.
///
/// Only `header_overrides` is consumed by the core passes; the remaining
/// fields ride along for the emission sink (target package, component and
/// module naming).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target package/namespace for emitted sources
    pub package_name: String,
    /// Prefix for the generated interface name
    pub component_name: String,
    /// Module the generated sources belong to
    pub module_name: String,
    /// Path or URL of the schema document
    pub schema_source: String,
    /// Raw header lines to attach per operationId
    pub header_overrides: HashMap<String, Vec<String>>,
}

impl GeneratorConfig {
    pub fn new(
        package_name: impl Into<String>,
        component_name: impl Into<String>,
        module_name: impl Into<String>,
        schema_source: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            component_name: component_name.into(),
            module_name: module_name.into(),
            schema_source: schema_source.into(),
            header_overrides: HashMap::new(),
        }
    }

    /// Attach raw header lines to the operation with the given id
    pub fn with_headers(mut self, operation_id: impl Into<String>, headers: Vec<String>) -> Self {
        self.header_overrides.insert(operation_id.into(), headers);
        self
    }

    /// Validate the configuration before a run
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.component_name.is_empty() {
            return Err(GenerationError::InvalidConfiguration(
                "component name cannot be empty".to_string(),
            ));
        }
        if !sanitizers::is_valid_identifier(&self.component_name) {
            return Err(GenerationError::InvalidConfiguration(format!(
                "component name must be a legal identifier: {}",
                self.component_name
            )));
        }
        Ok(())
    }
}
