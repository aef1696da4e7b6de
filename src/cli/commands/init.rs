//! folio init - write starter portfolio and config documents

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::content::Content;
use crate::error::{FolioError, Result};

const CONFIG_TEMPLATE: &str = "\
# folio configuration

[chart]
width = 57
height = 19
fill = true

[counter]
duration_secs = 2.0

[output]
unicode = true
";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Target directory (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

/// Runs before an `AppContext` exists: init is what creates the files the
/// context would be resolved from.
pub fn run_without_context(format: OutputFormat, args: &InitArgs) -> Result<()> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)?;

    let portfolio_path = dir.join("portfolio.toml");
    let config_path = dir.join("config.toml");

    for path in [&portfolio_path, &config_path] {
        if path.exists() && !args.force {
            return Err(FolioError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
    }

    std::fs::write(&portfolio_path, Content::sample().to_toml()?)?;
    std::fs::write(&config_path, CONFIG_TEMPLATE)?;
    info!(dir = %dir.display(), "initialized portfolio");

    if format.is_json() {
        let report = InitReport {
            created: vec![
                portfolio_path.display().to_string(),
                config_path.display().to_string(),
            ],
        };
        return emit_json(&robot_ok(report));
    }

    let mut layout = HumanLayout::new();
    layout.title("Initialized");
    layout.kv("Portfolio", &portfolio_path.display().to_string());
    layout.kv("Config", &config_path.display().to_string());
    layout.blank();
    layout.bullet("edit portfolio.toml, then run: folio render");
    emit_human(layout);
    Ok(())
}

#[derive(Serialize)]
struct InitReport {
    created: Vec<String>,
}
