mod flatten;
mod info;
mod section;

use flatten::run_flatten;
use info::run_info;
use section::run_section;

use anyhow::{Context, Result};
use gmx_topo::Monolith;
use gmx_topo::io::{AssembleConfig, Assembler};
use std::path::Path;

use crate::cli::Command;
use crate::display::Context as DisplayContext;
use crate::util::path::split_root;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Flatten(args) => run_flatten(args, ctx),
        Command::Section(args) => run_section(args, ctx),
        Command::Info(args) => run_info(args, ctx),
    }
}

fn assemble_root(root: &Path, config: AssembleConfig) -> Result<Monolith> {
    let (base_dir, file) = split_root(root);
    Assembler::new(base_dir)
        .config(config)
        .assemble(&file)
        .with_context(|| format!("Failed to flatten topology: {}", root.display()))
}
