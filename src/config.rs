// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document describing the profile to render.
//!
//! The types mirror the structure of the YAML file consumed by the CLI. Every
//! key except `username` is optional and falls back to the galaxy theme
//! defaults. The document is validated once by [`parse_config`] and treated as
//! immutable afterwards.

use std::{fs, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// GitHub logins: alphanumerics with single inner hyphens.
const LOGIN_PATTERN: &str = r"^[A-Za-z0-9](?:-?[A-Za-z0-9]){0,38}$";
const COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";
const MAX_LOGIN_LENGTH: usize = 39;
const DEFAULT_MAX_DISPLAY: usize = 8;

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use galaxy_profile::parse_config;
///
/// let config = parse_config("username: octocat\n",).expect("valid configuration",);
/// assert_eq!(config.username, "octocat");
/// assert_eq!(config.display_name(), "octocat");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
pub struct ProfileConfig
{
    /// GitHub login whose activity is summarized.
    #[serde(default, alias = "user")]
    pub username: String,

    /// Optional name shown in the header instead of the login.
    #[serde(default, alias = "name")]
    pub display_name: Option<String,>,

    /// Optional one-line description rendered under the header title.
    #[serde(default)]
    pub tagline: Option<String,>,

    /// Color palette shared by all cards.
    #[serde(default)]
    pub theme: Theme,

    /// Options controlling the tech-stack breakdown.
    #[serde(default)]
    pub languages: LanguageOptions,

    /// Projects drawn in the constellation card.
    #[serde(default)]
    pub projects: Vec<ProjectEntry,>,
}

impl ProfileConfig
{
    /// Checks the invariants the renderers rely on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self,) -> Result<(), Error,>
    {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(Error::validation("username must be provided",),);
        }

        let login = Regex::new(LOGIN_PATTERN,)
            .map_err(|e| Error::validation(format!("invalid login pattern: {e}"),),)?;
        if username.len() > MAX_LOGIN_LENGTH || !login.is_match(username,) {
            return Err(Error::validation(format!(
                "username '{username}' is not a valid GitHub login"
            ),),);
        }

        let color = Regex::new(COLOR_PATTERN,)
            .map_err(|e| Error::validation(format!("invalid color pattern: {e}"),),)?;
        for (field, value,) in self.theme.fields() {
            if !color.is_match(value,) {
                return Err(Error::validation(format!(
                    "theme.{field} must be a #rrggbb color, got '{value}'"
                ),),);
            }
        }

        if self.languages.max_display == 0 {
            return Err(Error::validation("languages.max_display must be greater than zero",),);
        }

        if let Some(index,) =
            self.projects.iter().position(|project| project.name.trim().is_empty(),)
        {
            return Err(Error::validation(format!("projects[{index}].name must not be empty"),),);
        }

        Ok((),)
    }

    /// Name displayed in the header, falling back to the login.
    pub fn display_name(&self,) -> &str
    {
        self.display_name
            .as_deref()
            .map(str::trim,)
            .filter(|name| !name.is_empty(),)
            .unwrap_or(self.username.as_str(),)
    }

    /// Tagline displayed in the header, empty when not configured.
    pub fn tagline(&self,) -> &str
    {
        self.tagline.as_deref().map(str::trim,).unwrap_or_default()
    }
}

/// Color palette applied to every card.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(default)]
pub struct Theme
{
    /// Card background.
    pub background: String,
    /// Main accent used for titles and bars.
    pub primary:    String,
    /// Secondary accent used for gradients and links.
    pub secondary:  String,
    /// Highlight used for stars and emphasis.
    pub accent:     String,
    /// Body text color.
    pub text:       String,
}

impl Default for Theme
{
    fn default() -> Self
    {
        Self {
            background: "#0d1117".to_owned(),
            primary:    "#58a6ff".to_owned(),
            secondary:  "#bc8cff".to_owned(),
            accent:     "#f0883e".to_owned(),
            text:       "#c9d1d9".to_owned(),
        }
    }
}

impl Theme
{
    fn fields(&self,) -> [(&'static str, &str,); 5]
    {
        [
            ("background", self.background.as_str(),),
            ("primary", self.primary.as_str(),),
            ("secondary", self.secondary.as_str(),),
            ("accent", self.accent.as_str(),),
            ("text", self.text.as_str(),),
        ]
    }

    /// Colors cycled through for languages without a well-known color.
    pub fn palette(&self,) -> [&str; 4]
    {
        [
            self.primary.as_str(),
            self.secondary.as_str(),
            self.accent.as_str(),
            self.text.as_str(),
        ]
    }
}

/// Options controlling which languages appear in the tech-stack card.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(default)]
pub struct LanguageOptions
{
    /// Number of languages listed before the remainder is folded into
    /// `Other`.
    pub max_display: usize,
    /// Languages dropped before percentages are computed. Matching ignores
    /// ASCII case.
    pub exclude:     Vec<String,>,
}

impl Default for LanguageOptions
{
    fn default() -> Self
    {
        Self {
            max_display: DEFAULT_MAX_DISPLAY, exclude: Vec::new(),
        }
    }
}

/// Project rendered as a star in the constellation card.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
pub struct ProjectEntry
{
    /// Project label.
    pub name:        String,
    /// Optional short description shown under the label.
    #[serde(default)]
    pub description: Option<String,>,
    /// Optional link wrapped around the star.
    #[serde(default)]
    pub url:         Option<String,>,
}

/// Loads and validates the configuration file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Parse`] when
/// the YAML is malformed, and [`Error::Validation`] when invariants fail.
pub fn load_config(path: &Path,) -> Result<ProfileConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses and validates a configuration document.
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the YAML cannot be decoded and
/// [`Error::Validation`] when required entries are missing.
pub fn parse_config(contents: &str,) -> Result<ProfileConfig, Error,>
{
    let mut config: ProfileConfig = serde_yaml::from_str(contents,)?;
    config.username = config.username.trim().to_owned();
    config.validate()?;
    Ok(config,)
}
