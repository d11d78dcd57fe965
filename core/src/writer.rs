#![deny(missing_docs)]

//! # Document Writer
//!
//! Renders an [`OpenApiDocument`] to YAML or JSON and writes it to disk.

use crate::error::AppResult;
use crate::oas::models::OpenApiDocument;
use std::fs;
use std::path::Path;

/// Serialization format of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML (default).
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// JSON for a `.json` extension, YAML otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }
}

/// Renders `document` as text.
///
/// # Errors
///
/// Returns `AppError::Yaml` or `AppError::Json` when serialization fails.
pub fn render_document(document: &OpenApiDocument, format: OutputFormat) -> AppResult<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(document)?;
            text.push('\n');
            text
        }
    };
    Ok(text)
}

/// Renders `document` and writes it to `path`, creating parent directories.
///
/// # Errors
///
/// Propagates serialization errors, and `AppError::Io` when the directory or
/// file cannot be written.
pub fn write_document(
    document: &OpenApiDocument,
    path: &Path,
    format: OutputFormat,
) -> AppResult<()> {
    let text = render_document(document, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
