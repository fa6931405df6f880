// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Tech-stack card charting language shares.
use std::fmt::Write as _;

use crate::{
    config::ProfileConfig,
    languages::{LanguageShare, language_shares},
    profile::Languages,
    svg::{self, FONT_FAMILY},
};

const WIDTH: u32 = 495;
const HEADER_HEIGHT: u32 = 84;
const ROW_HEIGHT: u32 = 30;
const EMPTY_HEIGHT: u32 = 120;
const SUMMARY_X: f64 = 25.0;
const SUMMARY_WIDTH: f64 = 445.0;
const BAR_X: f64 = 190.0;
const BAR_WIDTH: f64 = 210.0;

/// Renders `tech-stack.svg`.
///
/// Languages are ordered by weight; see [`language_shares`] for the
/// exclusion and folding rules.
pub fn render_tech_stack(config: &ProfileConfig, languages: &Languages,) -> String
{
    let shares = language_shares(languages, &config.languages,);
    let theme = &config.theme;
    let height = if shares.is_empty() {
        EMPTY_HEIGHT
    } else {
        HEADER_HEIGHT + ROW_HEIGHT * shares.len() as u32 + 10
    };
    let mut buffer = svg::open_document(WIDTH, height, "Tech Stack", theme,);

    let _ = writeln!(
        buffer,
        "  <text x=\"25\" y=\"38\" font-family=\"{FONT_FAMILY}\" font-size=\"20\" font-weight=\"700\" fill=\"{}\">Tech Stack</text>",
        theme.primary,
    );

    if shares.is_empty() {
        let _ = writeln!(
            buffer,
            "  <text x=\"25\" y=\"80\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" fill=\"{}\" opacity=\"0.8\">No language data available</text>",
            theme.text,
        );
        return svg::close_document(buffer,);
    }

    push_summary_bar(&mut buffer, &shares, config,);

    for (index, share,) in (0u32..).zip(&shares,) {
        let y = HEADER_HEIGHT + index * ROW_HEIGHT;
        let color = svg::language_color(&share.name, theme,);
        let filled = BAR_WIDTH * share.percent / 100.0;
        let _ = writeln!(
            buffer,
            "  <g transform=\"translate(0 {y})\">\n    <circle cx=\"31\" cy=\"6\" r=\"5\" fill=\"{color}\"/>\n    <text x=\"44\" y=\"11\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" fill=\"{}\">{}</text>\n    <rect x=\"{BAR_X:.1}\" y=\"2\" width=\"{BAR_WIDTH:.1}\" height=\"8\" rx=\"4\" fill=\"{}\" opacity=\"0.15\"/>\n    <rect x=\"{BAR_X:.1}\" y=\"2\" width=\"{filled:.1}\" height=\"8\" rx=\"4\" fill=\"{color}\"/>\n    <text x=\"470\" y=\"11\" text-anchor=\"end\" font-family=\"{FONT_FAMILY}\" font-size=\"13\" fill=\"{}\">{:.1}%</text>\n  </g>",
            theme.text,
            svg::escape_xml(&svg::truncate(&share.name, 18,),),
            theme.text,
            theme.text,
            share.percent,
        );
    }

    svg::close_document(buffer,)
}

fn push_summary_bar(buffer: &mut String, shares: &[LanguageShare], config: &ProfileConfig,)
{
    let _ = writeln!(
        buffer,
        "  <clipPath id=\"tech-stack-summary\">\n    <rect x=\"{SUMMARY_X:.1}\" y=\"52\" width=\"{SUMMARY_WIDTH:.1}\" height=\"10\" rx=\"5\"/>\n  </clipPath>\n  <g clip-path=\"url(#tech-stack-summary)\">",
    );

    let mut offset = SUMMARY_X;
    for share in shares {
        let width = SUMMARY_WIDTH * share.percent / 100.0;
        let _ = writeln!(
            buffer,
            "    <rect x=\"{offset:.1}\" y=\"52\" width=\"{width:.1}\" height=\"10\" fill=\"{}\"/>",
            svg::language_color(&share.name, &config.theme,),
        );
        offset += width;
    }

    buffer.push_str("  </g>\n",);
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn tech_stack_lists_languages_by_weight()
    {
        let svg = render_tech_stack(&fixtures::config(), &fixtures::languages(),);

        let rust = svg.find(">Rust</text>",).expect("Rust row",);
        let python = svg.find(">Python</text>",).expect("Python row",);
        let shell = svg.find(">Shell</text>",).expect("Shell row",);
        assert!(rust < python && python < shell);

        assert!(svg.contains(">60.0%</text>"));
        assert!(svg.contains(">25.0%</text>"));
        assert!(svg.contains(">10.0%</text>"));
        assert!(svg.contains(">5.0%</text>"));
        assert!(svg.contains("#dea584"));
    }

    #[test]
    fn tech_stack_folds_languages_past_limit()
    {
        let mut config = fixtures::config();
        config.languages.max_display = 2;

        let svg = render_tech_stack(&config, &fixtures::languages(),);
        assert!(svg.contains(">Other</text>"));
        assert!(svg.contains(">15.0%</text>"));
        assert!(!svg.contains(">Shell</text>"));
    }

    #[test]
    fn tech_stack_renders_placeholder_without_data()
    {
        let svg = render_tech_stack(&fixtures::config(), &Languages::new(),);

        assert!(svg.contains("No language data available"));
        assert!(svg.contains("height=\"120\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn tech_stack_escapes_language_names()
    {
        let languages = Languages::from([("F<#>".to_owned(), 10,)],);
        let svg = render_tech_stack(&fixtures::config(), &languages,);
        assert!(svg.contains(">F&lt;#&gt;</text>"));
    }

    #[test]
    fn tech_stack_is_deterministic()
    {
        let config = fixtures::config();
        let languages = fixtures::languages();
        assert_eq!(render_tech_stack(&config, &languages,), render_tech_stack(&config, &languages,));
    }
}
