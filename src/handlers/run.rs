//! Headless compile-and-run: prints the code pane and the output pane.

use anyhow::{bail, Result};

use crate::printer::{print_numbered, TextPrinter};
use crate::runner::{RunPhase, Runner};

pub async fn run(runner: &Runner, label: &str, code: &str) -> Result<()> {
    print_numbered(&format!("Code Content ({label})"), code, Some("cyan"));

    let status = TextPrinter { color: Some("yellow") };
    let outcome = runner
        .run_with_progress(code, |phase| match phase {
            RunPhase::Compiling => status.print("Compiling…"),
            RunPhase::Executing => status.print("Executing…"),
        })
        .await?;

    let color = if outcome.is_success() { "green" } else { "red" };
    print_numbered("Code Output", &outcome.render(), Some(color));

    if !outcome.is_success() {
        bail!("{}", outcome.summary());
    }
    Ok(())
}
