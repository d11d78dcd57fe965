#![deny(missing_docs)]

//! # WordPress Discovery Input
//!
//! - **discovery**: Parsing of the `/wp-json` index body.
//! - **shapes**: Typed views over untyped route metadata.

pub mod discovery;
pub mod shapes;

pub use discovery::{parse_discovery_document, DiscoveryDocument, RouteMap};
pub use shapes::{ArgSpec, EndpointEntry, RouteMetadata, Shape};
