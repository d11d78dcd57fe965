#![deny(missing_docs)]

//! # Path Translation
//!
//! Rewrites WordPress route patterns such as `/wp/v2/posts/(?P<id>[\d]+)` into
//! OpenAPI path templates such as `/posts/{id}`.
//!
//! Two passes run in order: the digit-class idiom first, then any other named
//! group. The translator does not validate regex syntax; nested or malformed
//! groups are rewritten best-effort.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Namespace prefix removed from every route.
pub const WP_NAMESPACE: &str = "/wp/v2";

fn numeric_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/?\(\?P<([^>]+)>\[\\d\]\+\)").expect("Invalid regex"))
}

fn named_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/?\(\?P<([^>]+)>[^)]+\)").expect("Invalid regex"))
}

fn template_param() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"))
}

/// Output of [`translate_route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedPath {
    /// OpenAPI path template, always starting with `/`.
    pub path: String,
    /// Brace parameters in first-occurrence order, without duplicates.
    pub params: Vec<String>,
}

/// Converts a route pattern into a path template.
///
/// A group is joined to the preceding segment with exactly one `/`.
pub fn normalize_path(route: &str) -> String {
    let stripped = route.replace(WP_NAMESPACE, "");
    let as_template = |caps: &Captures| format!("/{{{}}}", &caps[1]);

    let numeric = numeric_group().replace_all(&stripped, as_template);
    let path = named_group().replace_all(&numeric, as_template);

    if path.starts_with('/') {
        path.into_owned()
    } else {
        format!("/{}", path)
    }
}

/// Brace-style parameter names in `path`, deduplicated, in order.
pub fn extract_path_params(path: &str) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    for caps in template_param().captures_iter(path) {
        let name = &caps[1];
        if !params.iter().any(|p| p == name) {
            params.push(name.to_string());
        }
    }
    params
}

/// Normalizes `route` and extracts its path parameters.
pub fn translate_route(route: &str) -> TranslatedPath {
    let path = normalize_path(route);
    let params = extract_path_params(&path);
    TranslatedPath { path, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_strip() {
        assert_eq!(normalize_path("/wp/v2/posts"), "/posts");
        assert_eq!(normalize_path("/wp/v2"), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn test_namespace_strip_is_not_prefix_only() {
        assert_eq!(normalize_path("/plugin/wp/v2/items"), "/plugin/items");
    }

    #[test]
    fn test_other_namespaces_untouched() {
        assert_eq!(normalize_path("/oembed/1.0/embed"), "/oembed/1.0/embed");
    }

    #[test]
    fn test_numeric_group() {
        let t = translate_route(r"/wp/v2/posts/(?P<id>[\d]+)");
        assert_eq!(t.path, "/posts/{id}");
        assert_eq!(t.params, vec!["id"]);
    }

    #[test]
    fn test_generic_group() {
        let t = translate_route(r"/wp/v2/users/(?P<user_id>[^/]+)");
        assert_eq!(t.path, "/users/{user_id}");
        assert_eq!(t.params, vec!["user_id"]);
    }

    #[test]
    fn test_multiple_groups() {
        let t = translate_route(r"/wp/v2/posts/(?P<parent>[\d]+)/revisions/(?P<id>[\d]+)");
        assert_eq!(t.path, "/posts/{parent}/revisions/{id}");
        assert_eq!(t.params, vec!["parent", "id"]);

        let t = translate_route(r"/wp/v2/block-types/(?P<namespace>[a-zA-Z0-9_-]+)/(?P<name>[a-zA-Z0-9_-]+)");
        assert_eq!(t.path, "/block-types/{namespace}/{name}");
    }

    #[test]
    fn test_group_without_separator_gets_one() {
        assert_eq!(normalize_path(r"/wp/v2/posts(?P<id>[\d]+)"), "/posts/{id}");
    }

    #[test]
    fn test_leading_slash_added() {
        assert_eq!(normalize_path("posts"), "/posts");
        assert_eq!(normalize_path(r"(?P<slug>[\w-]+)"), "/{slug}");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_duplicate_params_deduplicated() {
        assert_eq!(
            extract_path_params("/a/{id}/b/{id}/c/{slug}"),
            vec!["id", "slug"]
        );
    }

    #[test]
    fn test_nested_group_best_effort() {
        let t = translate_route(r"/wp/v2/plugins/(?P<plugin>[^.\/]+(?:\/[^.\/]+)?)");
        assert!(t.path.starts_with("/plugins/{plugin}"));
        assert_eq!(t.params, vec!["plugin"]);
    }

    #[test]
    fn test_translation_is_pure() {
        let route = r"/wp/v2/comments/(?P<id>[\d]+)";
        assert_eq!(translate_route(route), translate_route(route));
    }
}
