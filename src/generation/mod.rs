//! Generation domain - compiles a schema document into a typed client surface
//!
//! The passes run leaf-first: the enum extractor and model generator consult
//! the type resolver, and the interface generator consumes the model-name
//! alphabet both produce. Everything returned is an immutable descriptor;
//! rendering belongs to the emission sink.

pub mod builder;
pub mod config;
pub mod enums;
pub mod errors;
pub mod interface;
pub mod models;
pub mod resolver;
pub mod sanitizers;
pub mod traits;
pub mod types;

pub use builder::ApiBuilder;
pub use config::GeneratorConfig;
pub use errors::GenerationError;
pub use traits::{EmissionSink, ErrorTracking, LogTracking, NoopTracking, SchemaLoader};
pub use types::*;
