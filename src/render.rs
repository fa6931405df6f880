// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Renderers for the four profile cards.
//!
//! Each renderer is a pure function of the configuration and the fetched
//! data and returns a complete SVG document. None of them can fail: missing
//! data is drawn as an explicit placeholder instead.

mod constellation;
mod header;
mod stats_card;
mod tech_stack;

pub use constellation::render_projects_constellation;
pub use header::render_galaxy_header;
pub use stats_card::render_stats_card;
pub use tech_stack::render_tech_stack;
