use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::InfoArgs;
use crate::config::build_assemble_config;
use crate::display::{
    Context as DisplayContext, Progress, print_molecules, print_monolith_info, print_sections,
    print_summary,
};

use super::assemble_root;

const TOTAL_STEPS: u8 = 2;

pub fn run_info(args: InfoArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Expanding includes");
    let monolith = assemble_root(&args.root, build_assemble_config(&args.include))?;
    progress.complete_step("Expanding includes", &[]);

    progress.step("Reading directives");
    let topology = monolith
        .topology()
        .context("Failed to read topology directives")?;
    progress.complete_step(
        "Reading directives",
        &[
            "[ system ]".to_string(),
            "[ molecules ]".to_string(),
            "#define".to_string(),
        ],
    );
    progress.finish();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_monolith_info(&mut out, &args.root.display().to_string(), &monolith);
    print_summary(&mut out, &topology);
    print_molecules(&mut out, &topology.molecules);
    print_sections(&mut out, &monolith);
    out.flush()?;
    Ok(())
}
