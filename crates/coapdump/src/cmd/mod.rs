use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod normalize;
pub mod parse;
pub mod version;

/// Where the device debug tooling writes its dump.
pub const DEFAULT_DUMP_PATH: &str = "/tmp/coap_output.txt";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a hex byte list into canonical form.
    Normalize(NormalizeArgs),
    /// Parse and validate a CoAP debug dump.
    Parse(ParseArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: Option<OutputFormat>) -> CliResult<i32> {
    match command {
        Command::Normalize(args) => normalize::run(args, format.unwrap_or(OutputFormat::Raw)),
        Command::Parse(args) => parse::run(args, format.unwrap_or(OutputFormat::Pretty)),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Hex tokens separated by commas and/or whitespace (e.g. "0x51,01,0x8A").
    pub input: String,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Dump file to read ("-" for stdin).
    #[arg(env = "COAPDUMP_DUMP_PATH", default_value = DEFAULT_DUMP_PATH)]
    pub path: PathBuf,
    /// Print a confirmation for every check that passes.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
