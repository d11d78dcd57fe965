#![deny(missing_docs)]

//! # Discovery Document
//!
//! Parses the JSON index served at `{site}/wp-json`.
//! Malformed bodies yield an empty route map plus a diagnostic, never an error.

use crate::report::Diagnostic;
use crate::wp::shapes::Shape;
use serde_json::{Map, Value};

/// Route pattern ➜ raw route metadata, in server order.
pub type RouteMap = Map<String, Value>;

/// The parts of the discovery index this tool cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryDocument {
    /// Site name, if advertised.
    pub name: Option<String>,
    /// Site tagline, if advertised.
    pub description: Option<String>,
    /// Registered REST namespaces (e.g. `wp/v2`, `oembed/1.0`).
    pub namespaces: Vec<String>,
    /// The `routes` mapping.
    pub routes: RouteMap,
    /// Why `routes` is empty, when parsing degraded.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a discovery body.
pub fn parse_discovery_document(body: &str) -> DiscoveryDocument {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => from_value(value),
        Err(e) => DiscoveryDocument {
            diagnostics: vec![Diagnostic::warning(
                None,
                format!("Error parsing JSON response: {}", e),
            )],
            ..Default::default()
        },
    }
}

/// Builds a [`DiscoveryDocument`] from an already-parsed JSON value.
pub fn from_value(value: Value) -> DiscoveryDocument {
    let mut doc = DiscoveryDocument::default();

    let mut index = match value {
        Value::Object(index) => index,
        _ => {
            doc.diagnostics.push(Diagnostic::warning(
                None,
                "Discovery response is not a JSON object.",
            ));
            return doc;
        }
    };

    doc.name = index.get("name").and_then(Value::as_str).map(String::from);
    doc.description = index
        .get("description")
        .and_then(Value::as_str)
        .map(String::from);
    if let Some(Shape::Sequence(items)) = index.get("namespaces").map(Shape::from) {
        doc.namespaces = items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();
    }

    match index.remove("routes") {
        Some(Value::Object(routes)) => doc.routes = routes,
        Some(_) => doc.diagnostics.push(Diagnostic::warning(
            None,
            "The 'routes' key is not a JSON object.",
        )),
        None => doc
            .diagnostics
            .push(Diagnostic::warning(None, "No 'routes' key found in response.")),
    }

    doc
}
