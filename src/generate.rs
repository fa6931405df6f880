// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Pipeline that turns a validated configuration into the four SVG files.
//!
//! Fetch failures never abort generation: each failed call is logged and its
//! result replaced with the zero/empty default. Only writing the artifacts
//! can fail at this stage.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use masterror::AppError;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::{
    config::ProfileConfig,
    error::{self, Error},
    github::ProfileSource,
    profile::{Languages, Stats},
    render::{
        render_galaxy_header, render_projects_constellation, render_stats_card, render_tech_stack,
    },
};

/// File name of the banner artifact.
pub const HEADER_FILE: &str = "galaxy-header.svg";
/// File name of the counters card.
pub const STATS_FILE: &str = "stats-card.svg";
/// File name of the language breakdown card.
pub const TECH_STACK_FILE: &str = "tech-stack.svg";
/// File name of the projects card.
pub const CONSTELLATION_FILE: &str = "projects-constellation.svg";

/// Upper bound applied to each fetch unless overridden.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30,);

/// Rendered document waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Artifact
{
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// SVG document.
    pub contents:  String,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize,)]
pub struct GenerationReport
{
    /// Login the cards were generated for.
    pub username:       String,
    /// Counters used for rendering, zero when fetching failed.
    pub stats:          Stats,
    /// Number of distinct languages fetched.
    pub language_count: usize,
    /// Files written, in generation order. Empty on dry runs.
    pub written:        Vec<PathBuf,>,
}

/// Options for [`generate`].
#[derive(Debug, Clone,)]
pub struct GenerateOptions
{
    /// Directory receiving the SVG files.
    pub output_dir:    PathBuf,
    /// Upper bound for each individual fetch.
    pub fetch_timeout: Duration,
    /// Render without writing anything.
    pub dry_run:       bool,
}

impl GenerateOptions
{
    /// Options writing into `output_dir` with the default timeout.
    pub fn new(output_dir: impl Into<PathBuf,>,) -> Self
    {
        Self {
            output_dir: output_dir.into(), fetch_timeout: DEFAULT_FETCH_TIMEOUT, dry_run: false,
        }
    }
}

/// Fetches stats and languages for `username`, falling back to defaults.
///
/// The two calls run one after the other. Each is bounded by
/// `fetch_timeout`; an elapsed timeout is handled like any other failure.
pub async fn collect_profile<S,>(
    source: &S,
    username: &str,
    fetch_timeout: Duration,
) -> (Stats, Languages,)
where
    S: ProfileSource,
{
    info!("Fetching stats...");
    let stats = match bounded(fetch_timeout, "stats", source.fetch_stats(username,),).await {
        Ok(stats,) => stats,
        Err(error,) => {
            warn!("Could not fetch stats ({}). Using defaults.", error);
            Stats::default()
        }
    };

    info!("Fetching languages...");
    let languages =
        match bounded(fetch_timeout, "languages", source.fetch_languages(username,),).await {
            Ok(languages,) => languages,
            Err(error,) => {
                warn!("Could not fetch languages ({}). Using defaults.", error);
                Languages::new()
            }
        };

    info!("Stats: {}", stats);
    info!("Languages: {} found", languages.len());

    (stats, languages,)
}

async fn bounded<T, F,>(limit: Duration, label: &str, future: F,) -> Result<T, AppError,>
where
    F: Future<Output = Result<T, AppError,>,>,
{
    match timeout(limit, future,).await {
        Ok(result,) => result,
        Err(_,) => Err(AppError::service(format!(
            "fetching {label} timed out after {}s",
            limit.as_secs()
        ),),),
    }
}

/// Renders the four documents in their fixed order.
pub fn render_artifacts(
    config: &ProfileConfig,
    stats: &Stats,
    languages: &Languages,
) -> Vec<Artifact,>
{
    vec![
        Artifact {
            file_name: HEADER_FILE, contents: render_galaxy_header(config, stats,),
        },
        Artifact {
            file_name: STATS_FILE, contents: render_stats_card(config, stats,),
        },
        Artifact {
            file_name: TECH_STACK_FILE, contents: render_tech_stack(config, languages,),
        },
        Artifact {
            file_name: CONSTELLATION_FILE, contents: render_projects_constellation(config,),
        },
    ]
}

/// Writes `artifacts` into `output_dir`, replacing existing files.
///
/// # Errors
///
/// Returns [`Error::SvgIo`] naming the directory or file that could not be
/// written.
pub fn write_artifacts(artifacts: &[Artifact], output_dir: &Path,) -> Result<Vec<PathBuf,>, Error,>
{
    fs::create_dir_all(output_dir,).map_err(|source| error::svg_io_error(output_dir, source,),)?;

    let mut written = Vec::with_capacity(artifacts.len(),);
    for artifact in artifacts {
        let path = output_dir.join(artifact.file_name,);
        write_svg(&path, &artifact.contents,)?;
        info!("Wrote {}", path.display());
        written.push(path,);
    }

    Ok(written,)
}

fn write_svg(path: &Path, contents: &str,) -> Result<(), Error,>
{
    let file = File::create(path,).map_err(|source| error::svg_io_error(path, source,),)?;
    let mut writer = BufWriter::new(file,);
    writer.write_all(contents.as_bytes(),).map_err(|source| error::svg_io_error(path, source,),)?;
    writer.flush().map_err(|source| error::svg_io_error(path, source,),)
}

/// Runs the whole pipeline for an already validated configuration.
///
/// # Errors
///
/// Only write failures are reported; fetch failures fall back to defaults.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use galaxy_profile::{GenerateOptions, GitHubClient, generate, load_config};
///
/// # async fn example() -> Result<(), galaxy_profile::Error> {
/// let config = load_config(Path::new("config.yml",),)?;
/// let client = GitHubClient::new(None,)?;
/// let report = generate(&config, &client, &GenerateOptions::new("assets/generated",),).await?;
/// println!("{} files written", report.written.len());
/// # Ok(())
/// # }
/// ```
pub async fn generate<S,>(
    config: &ProfileConfig,
    source: &S,
    options: &GenerateOptions,
) -> Result<GenerationReport, Error,>
where
    S: ProfileSource,
{
    info!("Generating profile SVGs for @{}...", config.username);

    let (stats, languages,) = collect_profile(source, &config.username, options.fetch_timeout,).await;
    let artifacts = render_artifacts(config, &stats, &languages,);

    let written = if options.dry_run {
        for artifact in &artifacts {
            debug!("{}: {} bytes", artifact.file_name, artifact.contents.len());
            info!("Dry run: skipped {}", artifact.file_name);
        }
        Vec::new()
    } else {
        write_artifacts(&artifacts, &options.output_dir,)?
    };

    info!("Done! {} SVGs generated.", artifacts.len());

    Ok(GenerationReport {
        username: config.username.clone(),
        stats,
        language_count: languages.len(),
        written,
    },)
}
