use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gtopo",
    about = "Flatten and inspect GROMACS-style topology files",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve all #include lines into one flat topology
    #[command(visible_alias = "f")]
    Flatten(FlattenArgs),

    /// Print the content lines of one [ section ]
    #[command(visible_alias = "s")]
    Section(SectionArgs),

    /// Summarize title, molecules, defines and sections
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Include expansion options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Include Expansion")]
pub struct IncludeOptions {
    /// Maximum #include nesting below the root file
    #[arg(
        long = "max-depth",
        value_name = "N",
        default_value_t = gmx_topo::io::DEFAULT_MAX_DEPTH,
        conflicts_with = "no_depth_limit"
    )]
    pub max_depth: usize,

    /// Disable the nesting limit (include cycles are still rejected)
    #[arg(long = "no-depth-limit")]
    pub no_depth_limit: bool,
}

#[derive(Args)]
pub struct FlattenArgs {
    /// Root topology file; includes resolve against its directory
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub include: IncludeOptions,
}

#[derive(Args)]
pub struct SectionArgs {
    /// Root topology file
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Directive name, e.g. molecules
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Read the root file directly without expanding includes
    #[arg(long, conflicts_with_all = ["max_depth", "no_depth_limit"])]
    pub raw: bool,

    #[command(flatten)]
    pub include: IncludeOptions,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Root topology file
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    #[command(flatten)]
    pub include: IncludeOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
