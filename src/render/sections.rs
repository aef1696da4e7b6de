//! Section renderers.
//!
//! Page order follows the classic single-page portfolio: hero, about
//! (education + work), skill tiles, strengths, interests, counters,
//! radar chart, projects, contact, footer. Sections with no content
//! collapse to nothing rather than rendering empty headings.

use console::style;
use itertools::Itertools;

use crate::chart::canvas::RadarGrid;
use crate::chart::radar::{RADIAL_MAX, build_radar};
use crate::content::{Content, ProjectCategory};
use crate::render::RenderOptions;

const TILE_BAR_WIDTH: usize = 10;

/// Compose the full page.
#[must_use]
pub fn render_page(content: &Content, opts: &RenderOptions) -> Vec<String> {
    join_blocks(
        vec![
            hero(content),
            about(content, opts),
            skill_tiles(content, opts),
            strengths(content),
            interests(content),
            counters(content),
            radar_section(content, opts),
            projects(content, opts),
            contact(content),
            footer(content),
        ],
        opts,
    )
}

/// Stitch section blocks together with separators, dropping empty ones.
#[must_use]
pub fn join_blocks(blocks: Vec<Vec<String>>, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        if block.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
            lines.push(separator(opts));
            lines.push(String::new());
        }
        lines.extend(block);
    }
    lines
}

#[must_use]
pub fn hero(content: &Content) -> Vec<String> {
    let profile = &content.profile;
    let mut lines = Vec::new();
    if !profile.name.is_empty() {
        lines.push(style(format!("Hi, I'm {}", profile.name)).bold().to_string());
    }
    if !profile.tagline.is_empty() {
        lines.push(profile.tagline.clone());
    }
    lines
}

#[must_use]
pub fn about(content: &Content, opts: &RenderOptions) -> Vec<String> {
    let profile = &content.profile;
    if profile.summary.is_empty() && content.education.is_empty() && content.experience.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("About Me")];
    if !profile.summary.is_empty() {
        lines.push(String::new());
        lines.extend(wrap(&profile.summary, opts.width));
    }

    if !content.education.is_empty() {
        lines.push(String::new());
        lines.push(subheading("Education"));
        for entry in &content.education {
            let note = entry
                .note
                .as_deref()
                .map(|note| format!(" ({note})"))
                .unwrap_or_default();
            lines.push(format!("- {}, {}{note}", entry.degree, entry.institution));
        }
    }

    if !content.experience.is_empty() {
        lines.push(String::new());
        lines.push(subheading("Work Experience"));
        for entry in &content.experience {
            lines.push(format!(
                "{} | {}",
                style(format!("{} - {}", entry.role, entry.company)).bold(),
                entry.period
            ));
            for highlight in &entry.highlights {
                for (i, wrapped) in wrap(highlight, opts.width.saturating_sub(2))
                    .into_iter()
                    .enumerate()
                {
                    if i == 0 {
                        lines.push(format!("- {wrapped}"));
                    } else {
                        lines.push(format!("  {wrapped}"));
                    }
                }
            }
        }
    }

    lines
}

#[must_use]
pub fn skill_tiles(content: &Content, opts: &RenderOptions) -> Vec<String> {
    if content.skills.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("Technical Skills"), String::new()];
    let name_width = content
        .skills
        .iter()
        .map(|skill| skill.name.chars().count())
        .max()
        .unwrap_or(0);

    for skill in &content.skills {
        let value = skill.proficiency.clamp(0, RADIAL_MAX);
        lines.push(format!(
            "{:<name_width$}  {}  {:>3}%",
            skill.name,
            proficiency_bar(value, TILE_BAR_WIDTH, opts.unicode),
            value,
        ));
    }
    lines
}

#[must_use]
pub fn strengths(content: &Content) -> Vec<String> {
    if content.strengths.is_empty() && content.passions.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("Strengths & Passion"), String::new()];
    for item in &content.strengths {
        lines.push(format!("- {item}"));
    }
    if !content.passions.is_empty() {
        if !content.strengths.is_empty() {
            lines.push(String::new());
        }
        for item in &content.passions {
            lines.push(format!("- {item}"));
        }
    }
    lines
}

#[must_use]
pub fn interests(content: &Content) -> Vec<String> {
    if content.interests.is_empty() {
        return Vec::new();
    }
    vec![
        heading("Personal Interests"),
        String::new(),
        content.interests.iter().join("  |  "),
    ]
}

/// Counter strip at final values. Animated playback happens in the CLI
/// layer; this section is the static fallback it settles into.
#[must_use]
pub fn counters(content: &Content) -> Vec<String> {
    if content.counters.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("Milestones"), String::new()];
    for entry in &content.counters {
        lines.push(counter_line(entry.target.max(0) as u64, &entry.label));
    }
    lines
}

/// A single counter display line, shared with the animated path so the
/// final frame matches the static rendering.
#[must_use]
pub fn counter_line(value: u64, label: &str) -> String {
    format!("{}  {label}", style(format!("{value:>4}")).bold())
}

#[must_use]
pub fn radar_section(content: &Content, opts: &RenderOptions) -> Vec<String> {
    if content.skills.is_empty() {
        return Vec::new();
    }

    let mut spec = build_radar(&content.skills);
    spec.filled = opts.chart_fill;

    let mut lines = vec![heading("Skills & Tools"), String::new()];
    let grid = RadarGrid::new(opts.chart_width, opts.chart_height, opts.unicode);
    lines.extend(grid.render(&spec));
    lines.push(String::new());

    let degree = if opts.unicode { "\u{00b0}" } else { " deg" };
    for point in spec.vertices() {
        lines.push(format!(
            "{:<14} {:>6.1}{degree}  {:>3}",
            point.label, point.angle_degrees, point.radius
        ));
    }
    lines
}

#[must_use]
pub fn projects(content: &Content, opts: &RenderOptions) -> Vec<String> {
    if content.projects.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("Projects Portfolio")];
    for category in [ProjectCategory::Coding, ProjectCategory::DataScience] {
        let group: Vec<_> = content
            .projects
            .iter()
            .filter(|project| project.category == category)
            .collect();
        if group.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(subheading(category.heading()));
        for project in group {
            lines.push(style(&project.title).bold().to_string());
            lines.extend(wrap(&project.summary, opts.width));
            if let Some(url) = &project.demo_url {
                lines.push(format!("  demo: {url}"));
            }
            if let Some(url) = &project.repo_url {
                lines.push(format!("  code: {url}"));
            }
        }
    }
    lines
}

#[must_use]
pub fn contact(content: &Content) -> Vec<String> {
    if content.contact.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![heading("Contact Me"), String::new()];
    let label_width = content
        .contact
        .iter()
        .map(|link| link.label.chars().count())
        .max()
        .unwrap_or(0);

    for link in &content.contact {
        match &link.url {
            Some(url) if *url != link.value => {
                lines.push(format!(
                    "{:<label_width$}  {} <{url}>",
                    link.label, link.value
                ));
            }
            _ => lines.push(format!("{:<label_width$}  {}", link.label, link.value)),
        }
    }
    lines
}

#[must_use]
pub fn footer(content: &Content) -> Vec<String> {
    match &content.footer {
        Some(text) => vec![style(text).dim().to_string()],
        None => Vec::new(),
    }
}

fn heading(text: &str) -> String {
    style(text).bold().underlined().to_string()
}

fn subheading(text: &str) -> String {
    style(text).bold().to_string()
}

#[must_use]
pub fn separator(opts: &RenderOptions) -> String {
    let ch = if opts.unicode { '\u{2500}' } else { '-' };
    ch.to_string().repeat(opts.width)
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(20))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn proficiency_bar(value: i32, width: usize, unicode: bool) -> String {
    let filled = (f64::from(value) / f64::from(RADIAL_MAX) * width as f64).round() as usize;
    let filled = filled.min(width);
    let (fill, empty) = if unicode {
        ('\u{2588}', '\u{2591}')
    } else {
        ('#', '-')
    };
    format!(
        "[{}{}]",
        fill.to_string().repeat(filled),
        empty.to_string().repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn plain_opts() -> RenderOptions {
        RenderOptions {
            unicode: false,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn page_contains_every_section_heading() {
        let page = render_page(&Content::sample(), &plain_opts()).join("\n");
        for needle in [
            "About Me",
            "Technical Skills",
            "Strengths & Passion",
            "Personal Interests",
            "Milestones",
            "Skills & Tools",
            "Projects Portfolio",
            "Contact Me",
        ] {
            assert!(page.contains(needle), "missing section: {needle}");
        }
    }

    #[test]
    fn empty_content_renders_nothing() {
        let page = render_page(&Content::default(), &plain_opts());
        assert!(page.is_empty());
    }

    #[test]
    fn sections_collapse_when_their_data_is_missing() {
        let mut content = Content::sample();
        content.projects.clear();
        content.counters.clear();
        let page = render_page(&content, &plain_opts()).join("\n");
        assert!(!page.contains("Projects Portfolio"));
        assert!(!page.contains("Milestones"));
        assert!(page.contains("Contact Me"));
    }

    #[test]
    fn skill_tiles_show_clamped_percentages() {
        let mut content = Content::sample();
        content.skills[0].proficiency = 400;
        let lines = skill_tiles(&content, &plain_opts());
        assert!(lines.iter().any(|line| line.contains("100%")));
        assert!(!lines.iter().any(|line| line.contains("400")));
    }

    #[test]
    fn proficiency_bar_is_full_at_max() {
        assert_eq!(proficiency_bar(100, 10, false), "[##########]");
        assert_eq!(proficiency_bar(0, 10, false), "[----------]");
        assert_eq!(proficiency_bar(50, 10, false), "[#####-----]");
    }

    #[test]
    fn counter_line_matches_static_section() {
        let mut content = Content::sample();
        content.counters.truncate(1);
        let section = counters(&content);
        assert_eq!(section.last().unwrap(), &counter_line(8, "Projects Completed"));
    }

    #[test]
    fn radar_section_lists_every_vertex() {
        let content = Content::sample();
        let lines = radar_section(&content, &plain_opts());
        let tail = lines.join("\n");
        for skill in &content.skills {
            assert!(tail.contains(&skill.name));
        }
    }
}
