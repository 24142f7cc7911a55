//! CLI for the repository file auditor.
//!
//! Reports which public repositories of a GitHub organization are missing a
//! given file.

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use repo_file_audit::{AuditReport, AuditRequest, Runner, RunnerError, DEFAULT_REFERENCE};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Check which public repositories of a GitHub organization are missing a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// GitHub API token (mandatory).
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, value_parser = NonEmptyStringValueParser::new())]
    token: String,

    /// Name of GitHub organization (mandatory).
    #[arg(long, env = "GITHUB_ORG", value_parser = NonEmptyStringValueParser::new())]
    org: String,

    /// Branch, tag or commit the file is looked up at.
    #[arg(long = "ref", default_value = DEFAULT_REFERENCE, value_parser = NonEmptyStringValueParser::new())]
    reference: String,

    /// Alternate GitHub API root, e.g. for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Path of the file every repository should contain.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    filename: String,

    /// Print version and exit.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    _version: (),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse arguments before anything touches the network
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };

    init_tracing();

    // Only fails if a provider is already installed
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    match run(args).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Audit failed");
            ExitCode::from(1)
        }
    }
}

/// Prints a parse error (with usage) or help/version text.
///
/// Help and version exit with `0`, every other parse failure with `1`.
fn usage_error(e: clap::Error) -> ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(0),
        _ => ExitCode::from(1),
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Keep stdout for progress lines and the report
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<AuditReport, RunnerError> {
    let mut request =
        AuditRequest::new(args.org, args.filename, args.token)?.with_reference(args.reference)?;
    if let Some(api_url) = args.api_url {
        request = request.with_api_url(api_url);
    }
    let runner = Runner::new(request)?;
    runner.run().await
}
