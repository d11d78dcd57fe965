#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! The subset of the OpenAPI 3.0 object model this generator emits.
//!
//! Field declaration order is serialization order, so the rendered document
//! reads `openapi, info, servers, paths` at the top level.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path template ➜ path item, in insertion order.
pub type Paths = IndexMap<String, PathItem>;

/// Lowercase HTTP method ➜ operation.
pub type PathItem = IndexMap<String, Operation>;

/// Status code ➜ response stub.
pub type Responses = IndexMap<String, Response>;

/// Root OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version string.
    pub openapi: String,
    /// Document metadata.
    pub info: Info,
    /// Single-element server list holding the site base URL.
    pub servers: Vec<Server>,
    /// Translated routes.
    pub paths: Paths,
}

/// The `info` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version (not the OpenAPI version).
    pub version: String,
    /// Free-form description.
    pub description: String,
}

/// A server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Base URL, used verbatim.
    pub url: String,
}

/// One HTTP method on one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// `"{METHOD} {path}"`.
    pub summary: String,
    /// Route-level description.
    pub description: String,
    /// Path parameters first, then declared arguments.
    pub parameters: Vec<Parameter>,
    /// Fixed response stubs.
    pub responses: Responses,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Templated path segment.
    Path,
    /// Query string.
    Query,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, unique within an operation.
    pub name: String,
    /// Location (`in`).
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Value schema.
    pub schema: ParameterSchema,
    /// Free-form description.
    pub description: String,
}

/// Minimal schema: a type name and optional enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// JSON Schema type name.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Allowed values, copied verbatim from WordPress.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Value>,
}

impl ParameterSchema {
    /// A plain `{type: string}` schema.
    pub fn string() -> Self {
        Self {
            schema_type: "string".to_string(),
            enum_values: None,
        }
    }
}

/// A response stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Response description.
    pub description: String,
}
