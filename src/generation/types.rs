//! Output descriptors for the generation domain
//!
//! Everything produced by a generation run is a pure data descriptor: no
//! behavior, ordered collections, renderable to any target source syntax by
//! an emission sink.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::infrastructure::swagger::{HttpVerb, ParameterLocation};

// Re-export the document model so callers reach it through the generation
// domain, the way the passes themselves do.
pub use crate::infrastructure::swagger::{
    BodySchema, ObjectModel, Operation, Parameter, PathItem, PropertyKind, ResponseSpec,
    SchemaDocument, SchemaModel, SchemaProperty,
};

/// A resolved target-language type, independent of any concrete syntax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedType {
    pub kind: TypeKind,
    pub nullable: bool,
}

/// The closed set of resolved type shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeKind {
    Int32,
    Int64,
    Float,
    Double,
    Str,
    Bool,
    /// Named reference to a generated or opaque type
    Named(String),
    List(Box<ResolvedType>),
    /// The asynchronous-result wrapper used by every generated method
    Deferred(Box<ResolvedType>),
    /// "no payload"
    Unit,
}

impl ResolvedType {
    /// A required (non-nullable) type of the given kind
    pub fn required(kind: TypeKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    /// Mark nullable when the source declares `required=false`
    pub fn with_required(kind: TypeKind, required: bool) -> Self {
        Self {
            kind,
            nullable: !required,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::required(TypeKind::Named(name.into()))
    }

    pub fn list_of(item: ResolvedType) -> Self {
        Self::required(TypeKind::List(Box::new(item)))
    }

    pub fn deferred(payload: ResolvedType) -> Self {
        Self::required(TypeKind::Deferred(Box::new(payload)))
    }

    /// The no-payload deferred result
    pub fn deferred_unit() -> Self {
        Self::deferred(Self::required(TypeKind::Unit))
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Int32 => write!(f, "int32")?,
            TypeKind::Int64 => write!(f, "int64")?,
            TypeKind::Float => write!(f, "float")?,
            TypeKind::Double => write!(f, "double")?,
            TypeKind::Str => write!(f, "string")?,
            TypeKind::Bool => write!(f, "bool")?,
            TypeKind::Named(name) => write!(f, "{name}")?,
            TypeKind::List(item) => write!(f, "list<{item}>")?,
            TypeKind::Deferred(payload) => write!(f, "deferred<{payload}>")?,
            TypeKind::Unit => write!(f, "unit")?,
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// The literal value behind one enum constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnumValue {
    Str(String),
    Int(i64),
}

/// One constant of a generated enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    pub value: EnumValue,
}

/// A generated enumeration type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    pub constants: Vec<EnumConstant>,
}

impl EnumDefinition {
    /// Enum whose constant names are the literal values themselves
    pub fn from_literals(name: impl Into<String>, literals: &[String]) -> Self {
        Self {
            name: name.into(),
            constants: literals
                .iter()
                .map(|literal| EnumConstant {
                    name: literal.clone(),
                    value: EnumValue::Str(literal.clone()),
                })
                .collect(),
        }
    }
}

/// One field of a generated data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: ResolvedType,
}

/// A generated data model type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

/// One parameter binding of a generated method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodParameter {
    /// Identifier used in the generated signature (dotted names flattened)
    pub binding_name: String,
    /// Name sent on the wire, kept verbatim
    pub wire_name: String,
    pub location: ParameterLocation,
    pub ty: ResolvedType,
}

/// One generated RPC method mirroring a schema operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    pub verb: HttpVerb,
    /// Path template with the leading slash stripped
    pub path: String,
    pub parameters: Vec<MethodParameter>,
    pub return_type: ResolvedType,
    /// Raw header lines from the caller's configuration; empty if none
    pub headers: Vec<String>,
}

/// The generated RPC interface: one per run, containing all methods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDefinition {
    pub name: String,
    pub methods: Vec<MethodDefinition>,
}

/// The full output of a generation run, handed wholesale to the emission sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSurface {
    pub interface: InterfaceDefinition,
    pub models: Vec<ModelDefinition>,
    pub enums: Vec<EnumDefinition>,
}
