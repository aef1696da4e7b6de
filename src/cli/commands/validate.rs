//! folio validate - check the portfolio document

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::content::ContentWarning;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ValidateArgs {}

pub fn run(ctx: &AppContext, _args: &ValidateArgs) -> Result<()> {
    let content = ctx.load_content()?;
    let warnings = content.validate();

    if ctx.output_format.is_json() {
        let report = ValidateReport {
            path: ctx.content_path.display().to_string(),
            clean: warnings.is_empty(),
            warnings,
        };
        return emit_json(&report);
    }

    let mut layout = HumanLayout::new();
    layout.title("Validation");
    layout.kv("Path", &ctx.content_path.display().to_string());

    if warnings.is_empty() {
        layout.section("Status");
        layout.bullet("OK");
    } else {
        layout.section("Warnings");
        for warning in &warnings {
            layout.bullet(&format!("{}: {}", warning.field, warning.message));
        }
    }

    emit_human(layout);
    Ok(())
}

#[derive(Serialize)]
struct ValidateReport {
    path: String,
    clean: bool,
    warnings: Vec<ContentWarning>,
}
