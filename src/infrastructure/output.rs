//! Descriptor output - JSON rendering of a generated surface
//!
//! The only sink shipped with the crate. It serializes the descriptor
//! collections verbatim; source-text emission is left to external sinks.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::generation::{ApiSurface, EmissionSink, GenerationError, GeneratorConfig};

/// Emits the surface as pretty-printed JSON to a file or stdout
pub struct JsonSink {
    output: Option<PathBuf>,
}

impl JsonSink {
    /// Sink writing to the given file, or stdout when `None`
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl EmissionSink for JsonSink {
    fn emit(&self, surface: &ApiSurface, config: &GeneratorConfig) -> Result<(), GenerationError> {
        let payload = serde_json::json!({
            "package": config.package_name,
            "module": config.module_name,
            "interface": surface.interface,
            "models": surface.models,
            "enums": surface.enums,
        });
        let rendered = serde_json::to_string_pretty(&payload)?;

        match &self.output {
            Some(path) => fs::write(path, rendered)?,
            None => {
                let stdout = std::io::stdout();
                writeln!(stdout.lock(), "{rendered}")?;
            }
        }
        Ok(())
    }
}
