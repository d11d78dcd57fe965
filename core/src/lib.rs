#![deny(missing_docs)]

//! # WP OpenAPI Core
//!
//! Translates the WordPress REST API route index (`/wp-json`) into an
//! OpenAPI 3.0 document. No network access and no console output happen here.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) generation.
pub mod oas;

/// Diagnostics collected during generation.
pub mod report;

/// WordPress discovery input.
pub mod wp;

/// YAML / JSON output.
pub mod writer;

pub use error::{AppError, AppResult};
pub use oas::{
    generate_openapi_spec, generate_openapi_spec_with_config, translate_route, Generation,
    GeneratorConfig, OpenApiDocument, TranslatedPath,
};
pub use report::{Diagnostic, GenerationReport, Severity};
pub use wp::{parse_discovery_document, DiscoveryDocument, RouteMap};
pub use writer::{render_document, write_document, OutputFormat};
