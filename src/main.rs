//! folio - portfolio renderer CLI
//!
//! Render a single-page personal portfolio as rich terminal output.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio::Result;
use folio::app::AppContext;
use folio::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.force_plain() {
        console::set_colors_enabled(false);
    } else if cli.color == Some(folio::cli::ColorMode::Always) {
        console::set_colors_enabled(true);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.output_format().is_json() {
                // Machine mode: JSON error envelope on stdout
                let (code, message) = match &e {
                    folio::FolioError::InvalidSpec(msg) => ("invalid_spec", msg.clone()),
                    folio::FolioError::Content(msg) => ("content", msg.clone()),
                    _ => ("error", e.to_string()),
                };
                let error_json = serde_json::json!({
                    "error": true,
                    "code": code,
                    "message": message,
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init(args) = &cli.command {
        return folio::cli::commands::init::run_without_context(cli.output_format(), args);
    }
    let ctx = AppContext::from_cli(cli)?;
    folio::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,folio=info",
        1 => "info,folio=debug",
        2 => "debug,folio=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_json() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
