// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Galaxy banner shown at the top of the profile README.
use std::fmt::Write as _;

use crate::{
    config::ProfileConfig,
    profile::Stats,
    svg::{self, FONT_FAMILY},
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 220;
const STAR_COUNT: usize = 90;

/// Renders `galaxy-header.svg`.
///
/// # Example
///
/// ```
/// use galaxy_profile::{Stats, parse_config, render_galaxy_header};
///
/// let config = parse_config("username: octocat\n",).expect("valid configuration",);
/// let svg = render_galaxy_header(&config, &Stats::default(),);
/// assert!(svg.contains("octocat"));
/// ```
pub fn render_galaxy_header(config: &ProfileConfig, stats: &Stats,) -> String
{
    let theme = &config.theme;
    let title = format!("{} - GitHub profile", config.display_name());
    let mut buffer = svg::open_document(WIDTH, HEIGHT, &title, theme,);

    let _ = writeln!(
        buffer,
        "  <defs>\n    <linearGradient id=\"galaxy-nebula\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\n      <stop offset=\"0%\" stop-color=\"{}\" stop-opacity=\"0.35\"/>\n      <stop offset=\"100%\" stop-color=\"{}\" stop-opacity=\"0.05\"/>\n    </linearGradient>\n    <radialGradient id=\"galaxy-planet\" cx=\"35%\" cy=\"35%\" r=\"65%\">\n      <stop offset=\"0%\" stop-color=\"{}\"/>\n      <stop offset=\"100%\" stop-color=\"{}\"/>\n    </radialGradient>\n  </defs>",
        theme.primary, theme.secondary, theme.accent, theme.secondary,
    );
    let _ = writeln!(
        buffer,
        "  <ellipse cx=\"400\" cy=\"110\" rx=\"380\" ry=\"90\" fill=\"url(#galaxy-nebula)\" transform=\"rotate(-8 400 110)\"/>",
    );

    svg::push_starfield(&mut buffer, &config.username, STAR_COUNT, WIDTH, HEIGHT, &theme.text,);

    let _ = writeln!(
        buffer,
        "  <circle cx=\"690\" cy=\"78\" r=\"34\" fill=\"url(#galaxy-planet)\"/>\n  <ellipse cx=\"690\" cy=\"78\" rx=\"58\" ry=\"12\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-opacity=\"0.7\" transform=\"rotate(-18 690 78)\"/>",
        theme.accent,
    );

    let _ = writeln!(
        buffer,
        "  <text x=\"40\" y=\"100\" font-family=\"{FONT_FAMILY}\" font-size=\"40\" font-weight=\"700\" fill=\"{}\">{}</text>",
        theme.primary,
        svg::escape_xml(config.display_name(),),
    );

    let tagline = config.tagline();
    if !tagline.is_empty() {
        let _ = writeln!(
            buffer,
            "  <text x=\"40\" y=\"138\" font-family=\"{FONT_FAMILY}\" font-size=\"18\" fill=\"{}\">{}</text>",
            theme.text,
            svg::escape_xml(&svg::truncate(tagline, 70,),),
        );
    }

    let _ = writeln!(
        buffer,
        "  <text x=\"40\" y=\"185\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" fill=\"{}\" opacity=\"0.8\">@{} \u{00b7} {} repositories \u{00b7} {} stars</text>",
        theme.text,
        svg::escape_xml(&config.username,),
        svg::format_count(stats.repos,),
        svg::format_count(stats.stars,),
    );

    svg::close_document(buffer,)
}
