#![deny(missing_docs)]

//! # OpenAPI Generation Module
//!
//! - **models**: Output object model.
//! - **paths**: Route pattern ➜ path template translation.
//! - **params**: Parameter list synthesis.
//! - **operations**: Per-method operation assembly.
//! - **document**: Top-level envelope.

pub mod document;
pub mod models;
pub mod operations;
pub mod params;
pub mod paths;

pub use document::{
    generate_openapi_spec, generate_openapi_spec_with_config, Generation, GeneratorConfig,
};
pub use models::{
    Info, OpenApiDocument, Operation, ParamLocation, Parameter, ParameterSchema, PathItem, Paths,
    Response, Server,
};
pub use paths::{translate_route, TranslatedPath};
