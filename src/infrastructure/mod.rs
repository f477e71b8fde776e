//! Infrastructure layer - concrete implementations of domain ports

pub mod output;
pub mod swagger;

pub use output::JsonSink;
pub use swagger::*;
