use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Polyarch Developers",
    version,
    about = "polyarch - build, validate, unroll and expand branched polymer architectures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a topology and report its arms, grafts, chain types and validity.
    Check(CheckArgs),
    /// Print the nested graft occurrences of one chain type as JSON.
    Enumerate(EnumerateArgs),
    /// Fully enumerate a topology so that no arm is shared, and save it.
    Unroll(UnrollArgs),
    /// Expand chain types to per-bead node and bond lists.
    Expand(ExpandArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input topology: a `.json` record or a TOML architecture file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `enumerate` subcommand.
#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Input topology: a `.json` record or a TOML architecture file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Name of the chain type whose grafts are enumerated.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub chain: String,
}

/// Arguments for the `unroll` subcommand.
#[derive(Args, Debug)]
pub struct UnrollArgs {
    /// Input topology: a `.json` record or a TOML architecture file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the unrolled topology record (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `expand` subcommand.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Input topology: a `.json` record or a TOML architecture file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the bead graphs (JSON).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override `expansion.unroll` from the architecture file.
    #[command(flatten)]
    pub unroll: UnrollMode,

    /// Expand only the named chain type. Can be used multiple times.
    /// Overrides `expansion.chains` from the architecture file.
    #[arg(short, long = "chain", value_name = "NAME")]
    pub chains: Vec<String>,
}

/// A group to handle mutually exclusive flags for unrolling before expansion.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct UnrollMode {
    /// Fully enumerate the topology before expanding it.
    #[arg(long)]
    pub unroll: bool,
    /// Expand the topology as given, even if the file asks for unrolling.
    #[arg(long)]
    pub no_unroll: bool,
}

impl UnrollMode {
    /// The value requested on the command line, if any.
    pub fn requested(self) -> Option<bool> {
        match (self.unroll, self.no_unroll) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}
