//! Command handlers.

pub mod count;
pub mod init;
pub mod radar;
pub mod render;
pub mod validate;

use console::Term;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::counter::{Frame, FrameSink};
use crate::error::Result;
use crate::render::sections;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::run_without_context(ctx.output_format, args),
        Commands::Render(args) => render::run(ctx, args),
        Commands::Radar(args) => radar::run(ctx, args),
        Commands::Count(args) => count::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
    }
}

/// Sink that redraws a single terminal line per frame, the in-place
/// reveal the page uses for counters.
pub(crate) struct TermSink {
    term: Term,
}

impl TermSink {
    pub(crate) fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Move past the finished counter line.
    pub(crate) fn finish(&self) -> Result<()> {
        self.term.write_line("")?;
        Ok(())
    }
}

impl FrameSink for TermSink {
    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.term.clear_line()?;
        self.term
            .write_str(&sections::counter_line(frame.value, &frame.label))?;
        Ok(())
    }
}

/// Sink that prints one line per frame, for non-interactive terminals.
pub(crate) struct LineSink;

impl FrameSink for LineSink {
    fn frame(&mut self, frame: &Frame) -> Result<()> {
        println!("{}", sections::counter_line(frame.value, &frame.label));
        Ok(())
    }
}
