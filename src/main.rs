//! Command-line interface for the galaxy profile generator.
//!
//! The binary loads the YAML configuration, fetches profile data from GitHub,
//! and writes the four SVG cards into the output directory. Configuration
//! problems terminate the process with exit status 1 before anything is
//! written; network problems only degrade the rendered data.

use std::{io, path::PathBuf, process, time::Duration};

use clap::{ArgAction, Parser};
use galaxy_profile::{
    Error, GenerateOptions, GenerationReport, GitHubClient, generate, load_config,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Command line interface for generating profile cards.
#[derive(Debug, Parser,)]
#[command(name = "galaxy-profile", version, about = "Generate galaxy-themed GitHub profile SVGs")]
struct Cli
{
    /// Path to the YAML configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = "config.yml")]
    config: PathBuf,

    /// Directory that will receive the generated SVG files.
    #[arg(long = "output", value_name = "DIR", default_value = "assets/generated")]
    output: PathBuf,

    /// GitHub token used to raise API rate limits.
    #[arg(long = "token", value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String,>,

    /// Alternative GitHub REST API root.
    #[arg(long = "api-url", value_name = "URL", env = "GITHUB_API_URL")]
    api_url: Option<String,>,

    /// Upper bound in seconds for each GitHub fetch.
    #[arg(long = "timeout-secs", value_name = "SECONDS", default_value_t = 30)]
    timeout_secs: u64,

    /// Render the cards without writing them.
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Print a JSON summary of the run to stdout.
    #[arg(long = "report", action = ArgAction::SetTrue)]
    report: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),
        )
        .with_writer(io::stderr,)
        .init();

    let cli = Cli::parse();

    if let Err(error,) = run(cli,).await {
        if let Error::Io {
            source, ..
        } = &error
            && source.kind() == io::ErrorKind::NotFound
        {
            error!("Configuration file not found. Copy config.example.yml to config.yml and edit it.");
        }
        error!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the pipeline using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, client setup and artifact write errors. Fetch
/// failures are absorbed by [`generate`].
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = load_config(&cli.config,)?;

    let token = cli.token.as_deref();
    let client = match cli.api_url.as_deref().map(str::trim,).filter(|url| !url.is_empty(),) {
        Some(url,) => GitHubClient::with_base_uri(url, token,)?,
        None => GitHubClient::new(token,)?,
    };

    let options = GenerateOptions {
        output_dir:    cli.output,
        fetch_timeout: Duration::from_secs(cli.timeout_secs,),
        dry_run:       cli.dry_run,
    };

    let report = generate(&config, &client, &options,).await?;

    if cli.report {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&mut handle, &report,)?;
    }

    Ok((),)
}

fn write_report<W: io::Write,>(writer: &mut W, report: &GenerationReport,) -> Result<(), Error,>
{
    serde_json::to_writer_pretty(&mut *writer, report,)?;
    writer.write_all(b"\n",).map_err(serde_json::Error::io,)?;
    Ok((),)
}
