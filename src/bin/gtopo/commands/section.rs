use std::io::Write;

use anyhow::{Context, Result, bail};
use gmx_topo::io::find_section_streaming;

use crate::cli::SectionArgs;
use crate::config::build_assemble_config;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::{create_output, open_topology};

use super::assemble_root;

const TOTAL_STEPS: u8 = 1;

pub fn run_section(args: SectionArgs, ctx: DisplayContext) -> Result<()> {
    let lines = if args.raw {
        let mut reader = open_topology(&args.root)?;
        find_section_streaming(&mut reader, &args.name)
            .with_context(|| format!("Failed to read {}", args.root.display()))?
    } else {
        let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
        progress.step("Expanding includes");
        let monolith = assemble_root(&args.root, build_assemble_config(&args.include))?;
        progress.complete_step("Expanding includes", &[]);
        progress.finish();

        monolith
            .section(&args.name)
            .map(|section| section.lines().into_iter().map(|(_, line)| line).collect())
    };

    let Some(lines) = lines else {
        bail!("No [ {} ] section in {}", args.name, args.root.display());
    };
    tracing::debug!(name = %args.name, lines = lines.len(), "section extracted");

    let mut out = create_output(None)?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
