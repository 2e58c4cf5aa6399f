mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::exit::USAGE;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "coapdump", version, about = "CoAP debug dump decoder")]
struct Cli {
    /// Output format (default depends on the command).
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "COAPDUMP_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not usage errors.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE);
        }
    };
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command, cli.format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_normalize_subcommand() {
        let cli = Cli::try_parse_from(["coapdump", "normalize", "0x51,01,0x0 4"])
            .expect("normalize args should parse");

        match cli.command {
            Command::Normalize(args) => assert_eq!(args.input, "0x51,01,0x0 4"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_subcommand_takes_path_and_verbose() {
        let cli = Cli::try_parse_from(["coapdump", "parse", "/tmp/dump.txt", "--verbose"])
            .expect("parse args should parse");

        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.path, std::path::PathBuf::from("/tmp/dump.txt"));
                assert!(args.verbose);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn normalize_requires_input() {
        let err = Cli::try_parse_from(["coapdump", "normalize"])
            .expect_err("missing input should fail");

        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn format_is_global() {
        let cli = Cli::try_parse_from(["coapdump", "parse", "-", "--format", "json"])
            .expect("global format should parse after subcommand");
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }
}
