//! folio render - the full portfolio page

use clap::Args;
use console::Term;

use crate::app::AppContext;
use crate::cli::commands::TermSink;
use crate::cli::output::{emit_json, robot_ok};
use crate::counter::CounterSpec;
use crate::error::Result;
use crate::render::{RenderOptions, page_model, sections};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Print final counter values instead of animating them
    #[arg(long)]
    pub no_animate: bool,
}

pub fn run(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let content = ctx.load_content()?;

    if ctx.output_format.is_json() {
        return emit_json(&robot_ok(page_model(&content)));
    }

    let mut opts = RenderOptions::from_config(&ctx.config);
    if !ctx.output_format.is_human() {
        opts.unicode = false;
    }

    let animate = ctx.output_format.is_human()
        && !args.no_animate
        && !content.counters.is_empty()
        && Term::stdout().is_term();

    if !animate {
        for line in sections::render_page(&content, &opts) {
            println!("{line}");
        }
        return Ok(());
    }

    // Interactive page: same section order as render_page, with the
    // milestone strip revealed in place.
    let before = sections::join_blocks(
        vec![
            sections::hero(&content),
            sections::about(&content, &opts),
            sections::skill_tiles(&content, &opts),
            sections::strengths(&content),
            sections::interests(&content),
        ],
        &opts,
    );
    for line in &before {
        println!("{line}");
    }
    if !before.is_empty() {
        println!("\n{}\n", sections::separator(&opts));
    }

    println!("{}", console::style("Milestones").bold().underlined());
    println!();
    for entry in &content.counters {
        let spec = CounterSpec::new(
            &entry.label,
            entry.target,
            ctx.config.counter.duration_secs,
        );
        let mut sink = TermSink::stdout();
        crate::counter::run(&spec, &mut sink)?;
        sink.finish()?;
    }

    let after = sections::join_blocks(
        vec![
            sections::radar_section(&content, &opts),
            sections::projects(&content, &opts),
            sections::contact(&content),
            sections::footer(&content),
        ],
        &opts,
    );
    if !after.is_empty() {
        println!("\n{}\n", sections::separator(&opts));
    }
    for line in &after {
        println!("{line}");
    }
    Ok(())
}
