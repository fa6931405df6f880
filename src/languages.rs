// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aggregation of raw language byte counts into percentage shares.
//!
//! Shares are ordered by weight descending with ties broken by name, so the
//! tech-stack card is stable for a given input. Languages beyond the display
//! limit are folded into a single [`OTHER_LABEL`] share, which keeps the
//! percentages summing to 100.

use serde::Serialize;

use crate::{config::LanguageOptions, profile::Languages};

/// Label of the share that aggregates languages past the display limit.
pub const OTHER_LABEL: &str = "Other";

/// One language's slice of the total.
#[derive(Debug, Clone, PartialEq, Serialize,)]
pub struct LanguageShare
{
    /// Language name, or [`OTHER_LABEL`] for the folded remainder.
    pub name:    String,
    /// Bytes attributed to the language.
    pub bytes:   u64,
    /// Share of the retained total, in percent.
    pub percent: f64,
}

/// Computes display shares for `languages`.
///
/// Excluded and zero-weight languages are dropped before the total is
/// computed. An empty result means there is nothing to chart.
///
/// # Examples
///
/// ```
/// use galaxy_profile::{LanguageOptions, Languages, language_shares};
///
/// let languages = Languages::from([("Rust".to_owned(), 300,), ("Go".to_owned(), 100,),],);
/// let shares = language_shares(&languages, &LanguageOptions::default(),);
///
/// assert_eq!(shares[0].name, "Rust");
/// assert_eq!(shares[0].percent, 75.0);
/// ```
pub fn language_shares(languages: &Languages, options: &LanguageOptions,) -> Vec<LanguageShare,>
{
    let mut entries: Vec<(&str, u64,),> = languages
        .iter()
        .filter(|(name, bytes,)| **bytes > 0 && !is_excluded(name, &options.exclude,),)
        .map(|(name, bytes,)| (name.as_str(), *bytes,),)
        .collect();

    let total = entries.iter().fold(0u64, |sum, (_, bytes,)| sum.saturating_add(*bytes,),);
    if total == 0 {
        return Vec::new();
    }

    entries.sort_by(|left, right| right.1.cmp(&left.1,).then_with(|| left.0.cmp(right.0,),),);

    let limit = options.max_display.max(1,);
    let mut shares: Vec<LanguageShare,> =
        entries.iter().take(limit,).map(|(name, bytes,)| share(name, *bytes, total,),).collect();

    let remainder =
        entries.iter().skip(limit,).fold(0u64, |sum, (_, bytes,)| sum.saturating_add(*bytes,),);
    if remainder > 0 {
        shares.push(share(OTHER_LABEL, remainder, total,),);
    }

    shares
}

fn is_excluded(name: &str, exclude: &[String],) -> bool
{
    exclude.iter().any(|candidate| candidate.trim().eq_ignore_ascii_case(name,),)
}

fn share(name: &str, bytes: u64, total: u64,) -> LanguageShare
{
    LanguageShare {
        name: name.to_owned(),
        bytes,
        percent: bytes as f64 * 100.0 / total as f64,
    }
}
