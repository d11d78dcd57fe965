#![deny(missing_docs)]

//! # Operation Assembler
//!
//! Builds one operation per `(path, method)` pair of a route.
//!
//! When several endpoints of the same route declare the same method the later
//! one replaces the earlier (last-write-wins) and a warning is recorded.

use crate::oas::models::{Operation, PathItem, Response, Responses};
use crate::oas::params::build_parameters;
use crate::oas::paths::TranslatedPath;
use crate::report::{Diagnostic, GenerationReport};
use crate::wp::shapes::{EndpointEntry, RouteMetadata};

/// The response stubs attached to every operation.
pub const STANDARD_RESPONSES: [(&str, &str); 4] = [
    ("200", "Successful response"),
    ("400", "Bad request"),
    ("401", "Unauthorized"),
    ("404", "Resource not found"),
];

/// Fresh copy of [`STANDARD_RESPONSES`].
pub fn standard_responses() -> Responses {
    STANDARD_RESPONSES
        .iter()
        .map(|(code, description)| {
            (
                code.to_string(),
                Response {
                    description: description.to_string(),
                },
            )
        })
        .collect()
}

/// Builds the operation for `method` (any case) on `translated`.
pub fn build_operation(
    method: &str,
    translated: &TranslatedPath,
    description: &str,
    endpoint: &EndpointEntry<'_>,
) -> Operation {
    Operation {
        summary: format!("{} {}", method.to_uppercase(), translated.path),
        description: description.to_string(),
        parameters: build_parameters(&translated.params, endpoint),
        responses: standard_responses(),
    }
}

/// Builds every operation of a route. May return an empty item.
pub fn build_path_item(
    route: &str,
    metadata: &RouteMetadata<'_>,
    translated: &TranslatedPath,
    report: &mut GenerationReport,
) -> PathItem {
    let mut item = PathItem::new();

    for endpoint in metadata.endpoints() {
        for method in endpoint.methods() {
            let key = method.to_lowercase();
            let operation = build_operation(method, translated, metadata.description(), &endpoint);
            if item.insert(key, operation).is_some() {
                report.push(Diagnostic::warning(
                    Some(route),
                    format!(
                        "{} declared by more than one endpoint; the last one wins",
                        method.to_uppercase()
                    ),
                ));
            }
        }
    }

    item
}
