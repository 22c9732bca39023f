use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wrapper used when invoked by cargo as `cargo cratecheck`
#[derive(Parser, Debug)]
#[command(bin_name = "cargo")]
#[command(version, propagate_version = true)]
pub struct Cargo {
    #[command(subcommand)]
    pub command: CargoCommand,
}

#[derive(Subcommand, Debug)]
pub enum CargoCommand {
    #[command(name = "cratecheck")]
    #[command(about = "Check whether a crate is ready for a crates.io release")]
    Cratecheck(Args),
}

/// Check whether a Rust crate is ready for a crates.io release
#[derive(Parser, Debug, Clone)]
#[command(name = "cratecheck")]
#[command(version, about, long_about = None)]
#[command(after_help = "CHECKS:
    • Compilation and testing
    • Code quality (fmt, clippy)
    • Documentation generation
    • Package validation
    • Metadata verification

Exits 0 only when every check passes with no failures or warnings.

ENVIRONMENT:
    RUST_LOG=debug    Enable debug logging
    NO_COLOR=1        Disable colored output")]
pub struct Args {
    /// Project directory to check (defaults to the current directory)
    #[arg(short = 'C', long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Per-command timeout in seconds [default: 300, or timeout_secs from .cratecheck.json]
    #[arg(short, long, value_name = "SECS", env = "CRATECHECK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also show the output of passing commands
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the checklist without running anything
    #[arg(short, long)]
    pub list: bool,
}

/// Parse process arguments, accepting both `cratecheck [OPTIONS]` and
/// `cargo cratecheck [OPTIONS]` (where cargo passes `cratecheck` as the first argument).
pub fn parse_args() -> Args {
    parse_args_from(std::env::args_os().collect::<Vec<_>>())
}

pub fn parse_args_from<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();

    if args.get(1).is_some_and(|arg| arg == "cratecheck") {
        let CargoCommand::Cratecheck(args) = Cargo::parse_from(args).command;
        args
    } else {
        Args::parse_from(args)
    }
}
