//! apiwire - typed client surface generation from Swagger/OpenAPI specs
//!
//! The crate walks a parsed schema document and derives three descriptor
//! collections: data model definitions, enumeration definitions, and one RPC
//! interface definition whose methods mirror the document's operations. The
//! descriptors are pure data; rendering them to source text is the job of an
//! [`generation::EmissionSink`] implementation supplied by the caller.

#![deny(unsafe_code)]

pub mod generation;
pub mod infrastructure;

pub use generation::{ApiBuilder, ApiSurface, GenerationError, GeneratorConfig};
pub use infrastructure::swagger::SchemaDocument;
