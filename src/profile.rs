// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Profile data fetched from GitHub and fed to the renderers.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language name mapped to the number of bytes written in it.
///
/// The map is ordered by name only so that logs and reports are stable;
/// renderers impose their own ordering by weight.
pub type Languages = BTreeMap<String, u64,>;

/// Aggregate activity counters for a GitHub account.
///
/// [`Stats::default`] is all-zero and is used whenever fetching fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,)]
pub struct Stats
{
    /// Commits authored by the user, as reported by commit search.
    pub commits: u64,
    /// Stars earned across owned, non-fork repositories.
    pub stars:   u64,
    /// Pull requests opened by the user.
    pub prs:     u64,
    /// Issues opened by the user.
    pub issues:  u64,
    /// Public repositories owned by the user.
    pub repos:   u64,
}

impl Stats
{
    /// Returns `true` when every counter is zero.
    pub fn is_empty(&self,) -> bool
    {
        *self == Self::default()
    }
}

impl std::fmt::Display for Stats
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(
            f,
            "{} commits, {} stars, {} PRs, {} issues, {} repos",
            self.commits, self.stars, self.prs, self.issues, self.repos
        )
    }
}
