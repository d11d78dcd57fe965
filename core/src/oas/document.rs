#![deny(missing_docs)]

//! # OpenAPI Document Generation
//!
//! Top-level assembly: wraps the translated `paths` in the fixed envelope
//! (`openapi`, `info`, `servers`). Generation is infallible; every malformed
//! input degrades to omission or defaulting and is noted in the report.

use crate::oas::models::{Info, OpenApiDocument, Paths, Server};
use crate::oas::operations::build_path_item;
use crate::oas::paths::translate_route;
use crate::report::{Diagnostic, GenerationReport};
use crate::wp::discovery::RouteMap;
use crate::wp::shapes::RouteMetadata;

/// Envelope settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Value of the `openapi` field.
    pub openapi_version: String,
    /// `info.title`.
    pub title: String,
    /// `info.version`.
    pub api_version: String,
    /// `info.description`.
    pub description: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            openapi_version: "3.0.0".to_string(),
            title: "WordPress REST API".to_string(),
            api_version: "1.0.0".to_string(),
            description: "Auto-generated OpenAPI spec for WordPress REST API".to_string(),
        }
    }
}

impl GeneratorConfig {
    fn info(&self) -> Info {
        Info {
            title: self.title.clone(),
            version: self.api_version.clone(),
            description: self.description.clone(),
        }
    }
}

/// A generated document and what happened while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// The OpenAPI document.
    pub document: OpenApiDocument,
    /// Counters and diagnostics.
    pub report: GenerationReport,
}

/// Generates a document with the default envelope.
pub fn generate_openapi_spec(base_url: &str, routes: &RouteMap) -> Generation {
    generate_openapi_spec_with_config(&GeneratorConfig::default(), base_url, routes)
}

/// Generates a document with a custom envelope.
pub fn generate_openapi_spec_with_config(
    config: &GeneratorConfig,
    base_url: &str,
    routes: &RouteMap,
) -> Generation {
    let mut report = GenerationReport {
        routes_seen: routes.len(),
        ..Default::default()
    };
    let mut paths = Paths::new();

    for (route, value) in routes {
        let Some(metadata) = RouteMetadata::from_value(value) else {
            report.push(Diagnostic::info(
                Some(route.as_str()),
                "skipped: no endpoints declared",
            ));
            continue;
        };

        let translated = translate_route(route);
        let item = build_path_item(route, &metadata, &translated, &mut report);
        if item.is_empty() {
            report.push(Diagnostic::info(
                Some(route.as_str()),
                "omitted: endpoints declared no methods",
            ));
            continue;
        }

        match paths.insert(translated.path.clone(), item) {
            None => report.routes_translated += 1,
            Some(_) => report.push(Diagnostic::warning(
                Some(route.as_str()),
                format!("replaces an earlier route that also maps to {}", translated.path),
            )),
        }
    }

    report.operations = paths.values().map(|item| item.len()).sum();
    if paths.is_empty() {
        report.push(Diagnostic::warning(
            None,
            "No API paths were extracted. The OpenAPI specification will be empty.",
        ));
    }

    let document = OpenApiDocument {
        openapi: config.openapi_version.clone(),
        info: config.info(),
        servers: vec![Server {
            url: base_url.to_string(),
        }],
        paths,
    };

    Generation { document, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use serde_json::json;

    fn routes(value: serde_json::Value) -> RouteMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("routes must be an object"),
        }
    }

    #[test]
    fn test_envelope_defaults() {
        let gen = generate_openapi_spec("https://example.com", &RouteMap::new());
        assert_eq!(gen.document.openapi, "3.0.0");
        assert_eq!(gen.document.info.title, "WordPress REST API");
        assert_eq!(gen.document.info.version, "1.0.0");
        assert_eq!(gen.document.servers.len(), 1);
        assert_eq!(gen.document.servers[0].url, "https://example.com");
        assert!(gen.document.paths.is_empty());
        assert_eq!(gen.report.warnings().count(), 1);
    }

    #[test]
    fn test_custom_config() {
        let config = GeneratorConfig {
            title: "Blog".into(),
            api_version: "2.1.0".into(),
            ..Default::default()
        };
        let gen = generate_openapi_spec_with_config(&config, "http://x", &RouteMap::new());
        assert_eq!(gen.document.info.title, "Blog");
        assert_eq!(gen.document.info.version, "2.1.0");
        assert_eq!(gen.document.openapi, "3.0.0");
    }

    #[test]
    fn test_routes_without_endpoints_skipped() {
        let input = routes(json!({
            "/": {"namespace": "", "methods": ["GET"]},
            "/wp/v2": "not a mapping",
            "/wp/v2/posts": {"endpoints": [{"methods": ["GET"]}]}
        }));
        let gen = generate_openapi_spec("https://example.com", &input);
        let keys: Vec<_> = gen.document.paths.keys().cloned().collect();
        assert_eq!(keys, vec!["/posts"]);
        assert_eq!(gen.report.routes_seen, 3);
        assert_eq!(gen.report.routes_translated, 1);
        assert_eq!(gen.report.operations, 1);
        let infos = gen
            .report
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .count();
        assert_eq!(infos, 2);
    }

    #[test]
    fn test_colliding_paths_later_wins_in_place() {
        let input = routes(json!({
            "/wp/v2/posts": {"description": "core", "endpoints": [{"methods": ["GET"]}]},
            "/wp/v2/pages": {"endpoints": [{"methods": ["GET"]}]},
            "/posts": {"description": "plugin", "endpoints": [{"methods": ["POST"]}]}
        }));
        let gen = generate_openapi_spec("https://example.com", &input);
        let keys: Vec<_> = gen.document.paths.keys().cloned().collect();
        assert_eq!(keys, vec!["/posts", "/pages"]);
        let posts = &gen.document.paths["/posts"];
        assert!(posts.contains_key("post"));
        assert!(!posts.contains_key("get"));
        assert_eq!(gen.report.warnings().count(), 1);
        assert_eq!(gen.report.routes_seen, 3);
        assert_eq!(gen.report.routes_translated, gen.document.paths.len());
    }
}
