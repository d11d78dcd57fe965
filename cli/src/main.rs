#![deny(missing_docs)]

//! # WP OpenAPI CLI
//!
//! Generates an OpenAPI 3.0 document from a WordPress site's REST API index.
//!
//! ```text
//! wp-openapi https://example.com -o wordpress_openapi.yaml
//! wp-openapi https://example.com --input saved-wp-json.json -o api.json
//! ```

use clap::Parser;
use std::process::ExitCode;

mod error;
mod fetch;
mod generate;
mod logging;
mod source;

use crate::error::CliResult;
use crate::generate::GenerateArgs;
use crate::source::FileSource;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Generate an OpenAPI spec from the WordPress REST API"
)]
struct Cli {
    #[clap(flatten)]
    generate: GenerateArgs,

    /// Enable verbose output (repeat for more).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli.generate) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &GenerateArgs) -> CliResult<generate::GenerateOutcome> {
    if let Some(path) = &args.input {
        return generate::execute(args, &FileSource { path: path.clone() });
    }
    fetch_and_generate(args)
}

#[cfg(feature = "client")]
fn fetch_and_generate(args: &GenerateArgs) -> CliResult<generate::GenerateOutcome> {
    let options = fetch::FetchOptions {
        timeout: args.timeout(),
        ..Default::default()
    };
    generate::execute(args, &fetch::HttpSource { options })
}

#[cfg(not(feature = "client"))]
fn fetch_and_generate(_args: &GenerateArgs) -> CliResult<generate::GenerateOutcome> {
    Err(error::CliError::General(
        "built without the `client` feature; pass --input with a saved /wp-json response".into(),
    ))
}
