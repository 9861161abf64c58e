use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::FlattenArgs;
use crate::config::build_assemble_config;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::create_output;
use crate::util::text::plural;

use super::assemble_root;

const TOTAL_STEPS: u8 = 2;

pub fn run_flatten(args: FlattenArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive && args.output.is_some(), TOTAL_STEPS);

    progress.step("Expanding includes");
    let monolith = assemble_root(&args.root, build_assemble_config(&args.include))?;
    progress.complete_step(
        "Expanding includes",
        &[
            format!("Root: {}", args.root.display()),
            plural(monolith.line_count(), "line", "lines"),
        ],
    );

    progress.step("Writing monolith");
    let mut out = create_output(args.output.as_deref())?;
    out.write_all(monolith.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write flattened topology")?;

    let target = args
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    progress.complete_step("Writing monolith", &[format!("Output: {target}")]);

    progress.finish();
    Ok(())
}
