//! In-memory representation of a parsed Swagger/OpenAPI document
//!
//! The document model is a closed set of tagged variants: every schema node is
//! a ref, an array, a primitive, or an object known by name. It is produced
//! once by the parser and treated as read-only input by the generation passes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs recognized in a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpVerb {
    /// Get all HTTP verbs as an array
    pub fn all() -> &'static [HttpVerb] {
        &[
            HttpVerb::Get,
            HttpVerb::Post,
            HttpVerb::Put,
            HttpVerb::Patch,
            HttpVerb::Delete,
            HttpVerb::Head,
            HttpVerb::Options,
        ]
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => write!(f, "get"),
            HttpVerb::Post => write!(f, "post"),
            HttpVerb::Put => write!(f, "put"),
            HttpVerb::Patch => write!(f, "patch"),
            HttpVerb::Delete => write!(f, "delete"),
            HttpVerb::Head => write!(f, "head"),
            HttpVerb::Options => write!(f, "options"),
        }
    }
}

impl FromStr for HttpVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            "post" => Ok(HttpVerb::Post),
            "put" => Ok(HttpVerb::Put),
            "patch" => Ok(HttpVerb::Patch),
            "delete" => Ok(HttpVerb::Delete),
            "head" => Ok(HttpVerb::Head),
            "options" => Ok(HttpVerb::Options),
            _ => Err(format!("unknown HTTP verb: {s}")),
        }
    }
}

/// Root of a parsed schema document.
///
/// Definitions and paths keep document order. The empty document is valid
/// input and produces empty outputs from every generation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub definitions: Vec<(String, SchemaModel)>,
    pub paths: Vec<PathItem>,
}

impl SchemaDocument {
    /// Look up a definition by its simple name
    pub fn definition(&self, name: &str) -> Option<&SchemaModel> {
        self.definitions
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, model)| model)
    }
}

/// One path template and the operations bound to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathItem {
    pub path: String,
    pub operations: Vec<(HttpVerb, Operation)>,
}

/// A schema definition: either a plain object model or an allOf composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchemaModel {
    Object(ObjectModel),
    Composed(Vec<SchemaModel>),
}

/// A plain (non-composed) model definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectModel {
    /// Declared primitive type, when the definition is an enum-backed scalar
    pub schema_type: Option<String>,
    pub format: Option<String>,
    /// Property order follows the document
    pub properties: Vec<(String, SchemaProperty)>,
    /// Enum constraint literals, stringified
    pub enum_values: Vec<String>,
    /// Display names from the `x-enumNames` extension, paired with `enum_values`
    pub enum_names: Option<Vec<String>>,
}

/// One property of a model, or the declared shape of a simple parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    pub kind: PropertyKind,
    pub format: Option<String>,
    pub required: bool,
    /// Inline enum constraint, if any
    pub enum_values: Vec<String>,
}

impl SchemaProperty {
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            format: None,
            required: false,
            enum_values: Vec::new(),
        }
    }
}

/// The closed set of schema node shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Reference to another definition by simple name
    Ref(String),
    /// Array with a recursive item property
    Array(Box<SchemaProperty>),
    Integer,
    Number,
    String,
    Boolean,
    /// Object known only by its raw type name, or an unrecognized type string
    Named(String),
}

/// One HTTP operation declared under a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Operations without an id are skipped by the interface generator
    pub id: Option<String>,
    pub parameters: Vec<Parameter>,
    /// Status code to response, document order
    pub responses: Vec<(String, ResponseSpec)>,
}

impl Operation {
    /// The response declared for a given status code
    pub fn response(&self, status: &str) -> Option<&ResponseSpec> {
        self.responses
            .iter()
            .find(|(code, _)| code == status)
            .map(|(_, spec)| spec)
    }
}

/// A declared response, carrying at most a schema property
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSpec {
    pub schema: Option<SchemaProperty>,
}

/// Where an operation parameter is bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    /// header, formData, cookie - dropped by the interface generator
    Other,
}

/// One declared operation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    /// Declared shape for path/query parameters
    pub property: SchemaProperty,
    /// Body schema, present only for body parameters
    pub schema: Option<BodySchema>,
}

/// The schema attached to a body parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BodySchema {
    /// Direct reference to a definition by simple name
    Ref(String),
    /// Array schema with its item property
    Array(SchemaProperty),
    /// Inline schema without a reference
    Inline { schema_type: Option<String> },
}
