// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Shared SVG building blocks for the profile cards.
//!
//! Everything here is deterministic: the starfield is driven by a generator
//! seeded from a string, and floating point coordinates are always printed
//! with one decimal so repeated renders produce identical bytes.

use std::{borrow::Cow, fmt::Write as _};

use crate::config::Theme;

/// Font stack shared by every card.
pub const FONT_FAMILY: &str = "'Segoe UI', 'SF Pro Display', Ubuntu, sans-serif";

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Escapes the five XML special characters.
///
/// Returns the input unchanged when nothing needs escaping.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len());
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

/// Formats a counter compactly: `999`, `1.2k`, `3M`.
pub fn format_count(value: u64) -> String {
    const SCALES: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "k")];

    for (scale, suffix) in SCALES {
        if value >= scale {
            let scaled = format!("{:.1}", value as f64 / scale as f64);
            let trimmed = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{trimmed}{suffix}");
        }
    }

    value.to_string()
}

/// FNV-1a hash of `value`, used to seed layout decisions.
pub fn hash_str(value: &str) -> u64 {
    value.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Small linear congruential generator for reproducible decoration.
#[derive(Debug, Clone)]
pub struct Scatter {
    state: u64
}

impl Scatter {
    /// Creates a generator whose sequence depends only on `seed`.
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_str(seed)
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Next value in `[low, high)`.
    pub fn next_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }
}

/// Opens an SVG document with a rounded background panel.
///
/// `title` is escaped and exposed both as `aria-label` and `<title>`.
pub fn open_document(width: u32, height: u32, title: &str, theme: &Theme) -> String {
    let mut buffer = String::with_capacity(4096);
    let title = escape_xml(title);

    let _ = writeln!(
        buffer,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"{title}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    );
    let _ = writeln!(buffer, "  <title>{title}</title>");
    let _ = writeln!(
        buffer,
        "  <rect x=\"0.5\" y=\"0.5\" width=\"{}\" height=\"{}\" rx=\"12\" fill=\"{}\" stroke=\"{}\" stroke-opacity=\"0.35\"/>",
        width.saturating_sub(1),
        height.saturating_sub(1),
        theme.background,
        theme.primary,
    );

    buffer
}

/// Closes a document opened with [`open_document`].
pub fn close_document(mut buffer: String) -> String {
    buffer.push_str("</svg>\n");
    buffer
}

/// Appends `count` stars scattered over a `width` x `height` area.
pub fn push_starfield(
    buffer: &mut String,
    seed: &str,
    count: usize,
    width: u32,
    height: u32,
    color: &str
) {
    let mut scatter = Scatter::new(seed);

    buffer.push_str("  <g class=\"starfield\">\n");
    for _ in 0..count {
        let x = scatter.next_range(4.0, f64::from(width) - 4.0);
        let y = scatter.next_range(4.0, f64::from(height) - 4.0);
        let radius = scatter.next_range(0.4, 1.6);
        let opacity = scatter.next_range(0.3, 0.9);
        let _ = writeln!(
            buffer,
            "    <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{radius:.1}\" fill=\"{color}\" opacity=\"{opacity:.1}\"/>",
        );
    }
    buffer.push_str("  </g>\n");
}

/// Color used for `language` in the tech-stack card.
///
/// Well-known languages use their GitHub linguist color; the rest cycle
/// through the theme palette.
pub fn language_color<'a>(language: &str, theme: &'a Theme) -> &'a str {
    let known = match language.to_ascii_lowercase().as_str() {
        "rust" => Some("#dea584"),
        "python" => Some("#3572a5"),
        "javascript" => Some("#f1e05a"),
        "typescript" => Some("#3178c6"),
        "go" => Some("#00add8"),
        "java" => Some("#b07219"),
        "kotlin" => Some("#a97bff"),
        "c" => Some("#555555"),
        "c++" => Some("#f34b7d"),
        "c#" => Some("#178600"),
        "ruby" => Some("#701516"),
        "php" => Some("#4f5d95"),
        "swift" => Some("#f05138"),
        "shell" => Some("#89e051"),
        "html" => Some("#e34c26"),
        "css" => Some("#563d7c"),
        "lua" => Some("#000080"),
        "haskell" => Some("#5e5086"),
        "dart" => Some("#00b4ab"),
        "nix" => Some("#7e7eff"),
        _ => None
    };

    known.unwrap_or_else(|| {
        let palette = theme.palette();
        let index = (hash_str(language) % palette.len() as u64) as usize;
        palette[index]
    })
}

/// Shortens `value` to at most `max_chars` characters, appending an
/// ellipsis when truncated.
pub fn truncate(value: &str, max_chars: usize) -> Cow<'_, str> {
    if value.chars().count() <= max_chars {
        return Cow::Borrowed(value);
    }

    let mut shortened: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    shortened.push('\u{2026}');
    Cow::Owned(shortened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_xml_handles_all_special_characters() {
        let result = escape_xml("&<>\"'normal");
        assert_eq!(result, "&amp;&lt;&gt;&quot;&apos;normal");
    }

    #[test]
    fn escape_xml_returns_borrowed_when_no_escaping_needed() {
        match escape_xml("plain text") {
            Cow::Borrowed(value) => assert_eq!(value, "plain text"),
            Cow::Owned(_) => panic!("expected borrowed variant")
        }
    }

    #[test]
    fn format_count_uses_compact_suffixes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1k");
        assert_eq!(format_count(1_234), "1.2k");
        assert_eq!(format_count(15_060), "15.1k");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(3_000_000), "3M");
    }

    #[test]
    fn scatter_is_reproducible_and_bounded() {
        let mut first = Scatter::new("octocat");
        let mut second = Scatter::new("octocat");

        for _ in 0..100 {
            let value = first.next_unit();
            assert_eq!(value, second.next_unit());
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn scatter_depends_on_seed() {
        let mut first = Scatter::new("octocat");
        let mut second = Scatter::new("hubot");
        assert_ne!(first.next_unit(), second.next_unit());
    }

    #[test]
    fn starfield_emits_requested_number_of_stars() {
        let mut buffer = String::new();
        push_starfield(&mut buffer, "seed", 12, 200, 100, "#ffffff");
        assert_eq!(buffer.matches("<circle").count(), 12);
    }

    #[test]
    fn document_helpers_wrap_content() {
        let theme = Theme::default();
        let svg = close_document(open_document(100, 50, "A & B", &theme));

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("aria-label=\"A &amp; B\""));
        assert!(svg.contains("<title>A &amp; B</title>"));
        assert!(svg.contains("fill=\"#0d1117\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn language_color_prefers_known_colors() {
        let theme = Theme::default();
        assert_eq!(language_color("Rust", &theme), "#dea584");
        assert_eq!(language_color("TypeScript", &theme), "#3178c6");
    }

    #[test]
    fn language_color_falls_back_to_palette() {
        let theme = Theme::default();
        let color = language_color("Zig-but-unknown", &theme);
        assert!(theme.palette().contains(&color));
        assert_eq!(color, language_color("Zig-but-unknown", &theme));
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 8), "a very \u{2026}");
    }
}
