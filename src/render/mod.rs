//! Page assembly.
//!
//! Every section is a pure function from [`Content`] to lines of text;
//! [`sections::render_page`] composes them in page order. Nothing here
//! touches process-wide state, so sections can be rendered and tested in
//! isolation. Machine output uses [`page_model`], the serializable page
//! description (content plus the derived radar spec and final counter
//! values).

pub mod sections;

use serde::Serialize;

use crate::chart::radar::{RadarSpec, build_radar};
use crate::config::Config;
use crate::content::Content;
use crate::counter::Frame;

pub use sections::render_page;

/// Presentation knobs shared by every section renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Wrap width for prose.
    pub width: usize,
    pub unicode: bool,
    pub chart_width: usize,
    pub chart_height: usize,
    pub chart_fill: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: 72,
            unicode: config.output.unicode,
            chart_width: config.chart.width,
            chart_height: config.chart.height,
            chart_fill: config.chart.fill,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Serializable description of the whole page.
#[derive(Debug, Serialize)]
pub struct PageModel<'a> {
    pub content: &'a Content,
    pub radar: RadarSpec,
    pub counters: Vec<Frame>,
}

/// Derive the machine-readable page: the source content, the radar spec
/// built from its skills, and each counter at its final value.
#[must_use]
pub fn page_model(content: &Content) -> PageModel<'_> {
    let counters = content
        .counters
        .iter()
        .map(|entry| Frame {
            value: entry.target.max(0) as u64,
            label: entry.label.clone(),
        })
        .collect();

    PageModel {
        content,
        radar: build_radar(&content.skills),
        counters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_model_derives_radar_from_skills() {
        let content = Content::sample();
        let model = page_model(&content);
        assert_eq!(model.radar.vertex_count(), content.skills.len());
        assert_eq!(model.counters.len(), content.counters.len());
        assert_eq!(model.counters[0].value, 8);
    }

    #[test]
    fn page_model_serializes() {
        let content = Content::sample();
        let json = serde_json::to_value(page_model(&content)).unwrap();
        assert!(json["radar"]["points"].is_array());
        assert_eq!(json["content"]["profile"]["name"], "Alex Rivera");
    }
}
