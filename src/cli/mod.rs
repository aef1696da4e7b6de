//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// folio - render a personal portfolio as rich terminal output
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Portfolio document path (default: ./portfolio.toml)
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Effective output format.
    ///
    /// Priority: `--plain`, then explicit `--output-format`, then
    /// `--machine`, then the human default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }
        if let Some(format) = self.output_format {
            return format;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }

    /// Check if plain mode is forced via CLI flags or color mode.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter portfolio.toml and config.toml
    Init(commands::init::InitArgs),

    /// Render the full portfolio page
    Render(commands::render::RenderArgs),

    /// Plot the skill-proficiency radar chart
    Radar(commands::radar::RadarArgs),

    /// Play one counter reveal
    Count(commands::count::CountArgs),

    /// Check the portfolio document for common mistakes
    Validate(commands::validate::ValidateArgs),
}
