use std::io::Read;
use std::path::Path;

use coapdump_record::{parse_and_validate, ValidationReport, ValidatorConfig};

use crate::cmd::ParseArgs;
use crate::exit::{io_error, record_error, validation_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat};

pub fn run(args: ParseArgs, format: OutputFormat) -> CliResult<i32> {
    let text = read_dump(&args.path)?;
    let config = ValidatorConfig {
        verbose: args.verbose,
        ..ValidatorConfig::default()
    };
    let report = parse_and_validate(&text, &config)
        .map_err(|err| record_error("parse failed", err))?;

    if args.verbose {
        print_confirmations(&report);
    }

    let record = report.into_result().map_err(|failure| {
        for violation in failure.violations() {
            eprintln!("error: {violation}");
        }
        validation_error("validation failed", &failure)
    })?;
    print_record(&record, format);
    Ok(SUCCESS)
}

fn read_dump(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(text);
    }

    tracing::debug!(path = %path.display(), "reading debug dump");
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

fn print_confirmations(report: &ValidationReport) {
    for confirmation in report.confirmations() {
        println!("Check OK: {confirmation}");
    }
}
