// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Card listing the five activity counters.
use std::fmt::Write as _;

use crate::{
    config::ProfileConfig,
    profile::Stats,
    svg::{self, FONT_FAMILY},
};

const WIDTH: u32 = 495;
const HEIGHT: u32 = 215;
const FIRST_ROW_Y: u32 = 72;
const ROW_HEIGHT: u32 = 28;

/// Renders `stats-card.svg`.
pub fn render_stats_card(config: &ProfileConfig, stats: &Stats,) -> String
{
    let theme = &config.theme;
    let title = format!("{}'s Galaxy Stats", config.display_name());
    let mut buffer = svg::open_document(WIDTH, HEIGHT, &title, theme,);

    svg::push_starfield(
        &mut buffer,
        &format!("{}-stats", config.username),
        24,
        WIDTH,
        HEIGHT,
        &theme.text,
    );

    let _ = writeln!(
        buffer,
        "  <text x=\"25\" y=\"38\" font-family=\"{FONT_FAMILY}\" font-size=\"20\" font-weight=\"700\" fill=\"{}\">{}</text>",
        theme.primary,
        svg::escape_xml(&title,),
    );

    let rows = [
        ("Total Commits", stats.commits,),
        ("Stars Earned", stats.stars,),
        ("Pull Requests", stats.prs,),
        ("Issues Opened", stats.issues,),
        ("Public Repositories", stats.repos,),
    ];

    for (index, (label, value,),) in (0u32..).zip(rows,) {
        let y = FIRST_ROW_Y + index * ROW_HEIGHT;
        let _ = writeln!(
            buffer,
            "  <g transform=\"translate(25 {y})\">\n    <path d=\"M6 0 L7.8 4.2 L12 6 L7.8 7.8 L6 12 L4.2 7.8 L0 6 L4.2 4.2 Z\" fill=\"{}\"/>\n    <text x=\"24\" y=\"11\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" fill=\"{}\">{label}:</text>\n    <text x=\"420\" y=\"11\" text-anchor=\"end\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" font-weight=\"700\" fill=\"{}\">{}</text>\n  </g>",
            theme.accent,
            theme.text,
            theme.primary,
            svg::format_count(value,),
        );
    }

    svg::close_document(buffer,)
}
