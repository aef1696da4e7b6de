//! folio count - play one counter reveal

use clap::Args;
use console::Term;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::commands::{LineSink, TermSink};
use crate::cli::output::{emit_json, robot_ok};
use crate::counter::{self, CounterSpec, Frame};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Caption shown under the counter
    pub label: String,

    /// Value to count up to
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Total reveal duration in seconds (default from config)
    #[arg(long)]
    pub duration: Option<f64>,
}

pub fn run(ctx: &AppContext, args: &CountArgs) -> Result<()> {
    let duration = args
        .duration
        .unwrap_or(ctx.config.counter.duration_secs);
    let spec = CounterSpec::new(&args.label, args.target, duration);

    if ctx.output_format.is_json() {
        // Machine consumers get the full frame list at once; pacing is a
        // terminal concern.
        let frames: Vec<Frame> = counter::play(&spec)?.collect();
        let report = CountReport {
            label: spec.label.clone(),
            target: spec.target,
            interval_secs: spec.interval().as_secs_f64(),
            frames,
        };
        return emit_json(&robot_ok(report));
    }

    if ctx.output_format.is_human() && Term::stdout().is_term() {
        let mut sink = TermSink::stdout();
        counter::run(&spec, &mut sink)?;
        sink.finish()?;
    } else {
        counter::run(&spec, &mut LineSink)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CountReport {
    label: String,
    target: i64,
    interval_secs: f64,
    frames: Vec<Frame>,
}
