//! folio radar - plot the skill-proficiency chart

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::chart::radar::{RadarPoint, build_radar};
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::render::{RenderOptions, sections};

#[derive(Args, Debug)]
pub struct RadarArgs {
    /// Plot width in columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Plot height in rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Outline only, no area shading
    #[arg(long)]
    pub no_fill: bool,
}

pub fn run(ctx: &AppContext, args: &RadarArgs) -> Result<()> {
    let content = ctx.load_content()?;

    if ctx.output_format.is_json() {
        let mut spec = build_radar(&content.skills);
        if args.no_fill {
            spec.filled = false;
        }
        let report = RadarReport {
            vertex_count: spec.vertex_count(),
            filled: spec.filled,
            points: spec.points,
        };
        return emit_json(&robot_ok(report));
    }

    let mut opts = RenderOptions::from_config(&ctx.config);
    if let Some(width) = args.width {
        opts.chart_width = width;
    }
    if let Some(height) = args.height {
        opts.chart_height = height;
    }
    if args.no_fill {
        opts.chart_fill = false;
    }
    if !ctx.output_format.is_human() {
        opts.unicode = false;
    }

    let mut layout = HumanLayout::new();
    layout.extend(sections::radar_section(&content, &opts));
    emit_human(layout);
    Ok(())
}

#[derive(Serialize)]
struct RadarReport {
    vertex_count: usize,
    filled: bool,
    points: Vec<RadarPoint>,
}
