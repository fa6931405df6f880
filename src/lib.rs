//! Generates galaxy-themed SVG cards summarizing a GitHub profile.
//!
//! The library loads a YAML configuration describing the profile, fetches
//! activity counters and language usage from the GitHub REST API, and
//! renders four deterministic SVG documents: a header banner, a stats card,
//! a tech-stack breakdown and a projects constellation. Network failures are
//! downgraded to empty data so generation always completes once the
//! configuration is valid.

mod config;
mod error;
mod generate;
mod github;
mod languages;
mod profile;
mod render;
mod svg;

pub use config::{LanguageOptions, ProfileConfig, ProjectEntry, Theme, load_config, parse_config};
pub use error::{Error, io_error, svg_io_error};
pub use generate::{
    Artifact, CONSTELLATION_FILE, DEFAULT_FETCH_TIMEOUT, GenerateOptions, GenerationReport,
    HEADER_FILE, STATS_FILE, TECH_STACK_FILE, collect_profile, generate, render_artifacts,
    write_artifacts,
};
pub use github::{GitHubClient, ProfileSource};
pub use languages::{LanguageShare, OTHER_LABEL, language_shares};
pub use profile::{Languages, Stats};
pub use render::{
    render_galaxy_header, render_projects_constellation, render_stats_card, render_tech_stack,
};
