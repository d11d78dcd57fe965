#![deny(missing_docs)]

//! # Route Sources
//!
//! Where the discovery document comes from: a live site or a saved file.

use crate::error::{CliError, CliResult};
use std::fs;
use std::path::PathBuf;
use wp_openapi_core::{parse_discovery_document, DiscoveryDocument};

/// Interface for obtaining the discovery document.
///
/// Abstracted so the pipeline can run in tests without network access.
pub trait RouteSource {
    /// Loads the discovery document for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be retrieved at all.
    /// Malformed content is not an error; it yields empty routes.
    fn load(&self, base_url: &str) -> CliResult<DiscoveryDocument>;
}

/// Reads a discovery document saved from `{site}/wp-json`.
pub struct FileSource {
    /// Path to the saved JSON body.
    pub path: PathBuf,
}

impl RouteSource for FileSource {
    fn load(&self, _base_url: &str) -> CliResult<DiscoveryDocument> {
        tracing::info!("Reading API routes from {:?}", self.path);
        let body = fs::read_to_string(&self.path).map_err(|e| {
            CliError::General(format!("Failed to read discovery file {:?}: {}", self.path, e))
        })?;
        Ok(parse_discovery_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_source_reads_routes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wp-json.json");
        fs::write(&path, r#"{"routes": {"/wp/v2/posts": {"endpoints": []}}}"#).unwrap();

        let doc = FileSource { path }.load("https://example.com").unwrap();
        assert_eq!(doc.routes.len(), 1);
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileSource {
            path: dir.path().join("absent.json"),
        };
        let err = source.load("https://example.com").unwrap_err();
        assert!(err.to_string().contains("Failed to read discovery file"));
    }
}
