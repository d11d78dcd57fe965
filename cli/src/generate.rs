#![deny(missing_docs)]

//! # Generate Command
//!
//! Implements the pipeline: discovery document -> route translation -> file.

use crate::error::CliResult;
use crate::logging::{log_diagnostic, log_report};
use crate::source::RouteSource;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use wp_openapi_core::{
    generate_openapi_spec_with_config, write_document, GeneratorConfig, OutputFormat,
};

/// Output format selector.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments for generating a document.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Base URL of the WordPress site (e.g. https://example.com).
    #[clap(env = "WP_OPENAPI_BASE_URL")]
    pub base_url: String,

    /// Output file name for the OpenAPI document.
    #[clap(short, long, env = "WP_OPENAPI_OUTPUT", default_value = "wordpress_openapi.yaml")]
    pub output: PathBuf,

    /// Read a saved `/wp-json` response instead of fetching it.
    #[clap(short, long, env = "WP_OPENAPI_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format. Inferred from the output extension when omitted.
    #[clap(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Request timeout in seconds.
    #[clap(
        long,
        env = "WP_OPENAPI_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Override `info.title`.
    #[clap(long, env = "WP_OPENAPI_TITLE")]
    pub title: Option<String>,

    /// Override `info.version`.
    #[clap(long, env = "WP_OPENAPI_API_VERSION")]
    pub api_version: Option<String>,
}

impl GenerateArgs {
    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }

    /// Envelope settings with any overrides applied.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(version) = &self.api_version {
            config.api_version = version.clone();
        }
        config
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Where the document was written.
    pub output: PathBuf,
    /// Number of entries in `paths`.
    pub paths: usize,
}

/// Executes the pipeline.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `source` - Where the discovery document comes from.
pub fn execute(args: &GenerateArgs, source: &impl RouteSource) -> CliResult<GenerateOutcome> {
    let base_url = args.normalized_base_url();

    let discovery = source.load(base_url)?;
    for diagnostic in &discovery.diagnostics {
        log_diagnostic(diagnostic);
    }
    if let Some(name) = &discovery.name {
        info!("Site: {}", name);
    }
    let routes: Vec<&String> = discovery.routes.keys().collect();
    debug!("Found routes: {:#?}", routes);

    let config = args.generator_config();
    let generation = generate_openapi_spec_with_config(&config, base_url, &discovery.routes);
    log_report(&generation.report);

    write_document(&generation.document, &args.output, args.output_format())?;

    let paths = generation.document.paths.len();
    info!(
        "OpenAPI specification has been generated and saved to {}",
        args.output.display()
    );
    info!("Found {} API paths", paths);

    Ok(GenerateOutcome {
        output: args.output.clone(),
        paths,
    })
}
