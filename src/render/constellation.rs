// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Constellation card drawing configured projects as linked stars.
use std::{f64::consts::TAU, fmt::Write as _};

use crate::{
    config::{ProfileConfig, ProjectEntry},
    svg::{self, FONT_FAMILY, Scatter},
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 420;
const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 235.0;
const RADIUS_X: f64 = 300.0;
const RADIUS_Y: f64 = 125.0;
const LABEL_MARGIN: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq,)]
struct Point
{
    x: f64,
    y: f64,
}

/// Renders `projects-constellation.svg`.
pub fn render_projects_constellation(config: &ProfileConfig,) -> String
{
    let theme = &config.theme;
    let mut buffer = svg::open_document(WIDTH, HEIGHT, "Projects Constellation", theme,);

    svg::push_starfield(
        &mut buffer,
        &format!("{}-constellation", config.username),
        70,
        WIDTH,
        HEIGHT,
        &theme.text,
    );

    let _ = writeln!(
        buffer,
        "  <text x=\"30\" y=\"42\" font-family=\"{FONT_FAMILY}\" font-size=\"22\" font-weight=\"700\" fill=\"{}\">Projects Constellation</text>",
        theme.primary,
    );

    if config.projects.is_empty() {
        let _ = writeln!(
            buffer,
            "  <text x=\"400\" y=\"230\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"16\" fill=\"{}\" opacity=\"0.8\">No projects configured</text>",
            theme.text,
        );
        return svg::close_document(buffer,);
    }

    let points = layout(&config.projects,);

    if points.len() > 1 {
        let element = if points.len() > 2 { "polygon" } else { "polyline" };
        let path: Vec<String,> =
            points.iter().map(|point| format!("{:.1},{:.1}", point.x, point.y),).collect();
        let _ = writeln!(
            buffer,
            "  <{element} points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" stroke-opacity=\"0.55\" stroke-dasharray=\"4 6\"/>",
            path.join(" ",),
            theme.secondary,
        );
    }

    for (project, point,) in config.projects.iter().zip(&points,) {
        push_star(&mut buffer, project, *point, config,);
    }

    svg::close_document(buffer,)
}

/// Places projects on a jittered ellipse, starting at the top and going
/// clockwise. A single project sits in the center.
fn layout(projects: &[ProjectEntry],) -> Vec<Point,>
{
    if projects.len() == 1 {
        return vec![Point {
            x: CENTER_X, y: CENTER_Y,
        }];
    }

    let step = TAU / projects.len() as f64;
    (0u32..)
        .zip(projects,)
        .map(|(index, project,)| {
            let mut scatter = Scatter::new(&project.name,);
            let angle = -TAU / 4.0 + step * f64::from(index,) + scatter.next_range(-0.15, 0.15,);
            let reach = scatter.next_range(0.75, 1.0,);
            Point {
                x: (CENTER_X + RADIUS_X * reach * angle.cos())
                    .clamp(LABEL_MARGIN, f64::from(WIDTH,) - LABEL_MARGIN,),
                y: CENTER_Y + RADIUS_Y * reach * angle.sin(),
            }
        },)
        .collect()
}

fn push_star(buffer: &mut String, project: &ProjectEntry, point: Point, config: &ProfileConfig,)
{
    let theme = &config.theme;
    let Point { x, y, } = point;

    let link = project.url.as_deref().map(str::trim,).filter(|url| !url.is_empty(),);
    if let Some(url,) = link {
        let _ = writeln!(buffer, "  <a href=\"{}\">", svg::escape_xml(url,));
    }

    let _ = writeln!(
        buffer,
        "  <g class=\"project\">\n    <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"11\" fill=\"{}\" opacity=\"0.25\"/>\n    <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4.5\" fill=\"{}\"/>\n    <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"14\" font-weight=\"600\" fill=\"{}\">{}</text>",
        theme.accent,
        theme.accent,
        y + 26.0,
        theme.primary,
        svg::escape_xml(&svg::truncate(project.name.trim(), 24,),),
    );

    if let Some(description,) =
        project.description.as_deref().map(str::trim,).filter(|text| !text.is_empty(),)
    {
        let _ = writeln!(
            buffer,
            "    <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"11\" fill=\"{}\" opacity=\"0.8\">{}</text>",
            y + 42.0,
            theme.text,
            svg::escape_xml(&svg::truncate(description, 36,),),
        );
    }

    buffer.push_str("  </g>\n",);
    if link.is_some() {
        buffer.push_str("  </a>\n",);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn constellation_renders_placeholder_without_projects()
    {
        let svg = render_projects_constellation(&fixtures::config(),);

        assert!(svg.contains("No projects configured"));
        assert!(!svg.contains("class=\"project\""));
    }

    #[test]
    fn constellation_draws_each_project()
    {
        let config = fixtures::config_with_projects(&[
            ("alpha", Some("First project",), Some("https://example.com/alpha?a=1&b=2",),),
            ("beta", None, None,),
            ("gamma", Some("   ",), None,),
        ],);
        let svg = render_projects_constellation(&config,);

        assert_eq!(svg.matches("class=\"project\"").count(), 3);
        assert!(svg.contains("<polygon points="));
        assert!(svg.contains(">First project</text>"));
        assert!(svg.contains("href=\"https://example.com/alpha?a=1&amp;b=2\""));
        assert_eq!(svg.matches("<a href").count(), 1);
        assert_eq!(svg.matches("</a>").count(), 1);
        assert_eq!(svg.matches("opacity=\"0.8\">").count(), 1);
    }

    #[test]
    fn two_projects_are_joined_by_a_polyline()
    {
        let config = fixtures::config_with_projects(&[("one", None, None,), ("two", None, None,),],);
        let svg = render_projects_constellation(&config,);

        assert!(svg.contains("<polyline points="));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn single_project_sits_in_the_center()
    {
        let config = fixtures::config_with_projects(&[("solo", None, None,),],);
        let points = layout(&config.projects,);

        assert_eq!(points, vec![Point {
            x: CENTER_X, y: CENTER_Y,
        }]);
        let svg = render_projects_constellation(&config,);
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn layout_keeps_stars_inside_the_card()
    {
        let names: Vec<String,> = (0..16).map(|index| format!("project-{index}"),).collect();
        let entries: Vec<(&str, Option<&str,>, Option<&str,>,),> =
            names.iter().map(|name| (name.as_str(), None, None,),).collect();
        let config = fixtures::config_with_projects(&entries,);

        for point in layout(&config.projects,) {
            assert!(point.x >= LABEL_MARGIN && point.x <= f64::from(WIDTH,) - LABEL_MARGIN);
            assert!(point.y > 60.0 && point.y < f64::from(HEIGHT,) - 60.0);
        }
    }

    #[test]
    fn constellation_is_deterministic()
    {
        let config = fixtures::config_with_projects(&[
            ("alpha", Some("First",), None,),
            ("beta", Some("Second",), None,),
        ],);
        assert_eq!(render_projects_constellation(&config,), render_projects_constellation(&config,));
    }
}
