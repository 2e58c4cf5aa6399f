use crate::cmd::NormalizeArgs;
use crate::exit::{hex_error, CliResult, SUCCESS};
use crate::output::{print_normalized, OutputFormat};

pub fn run(args: NormalizeArgs, format: OutputFormat) -> CliResult<i32> {
    let normalized = coapdump_hex::normalize(&args.input)
        .map_err(|err| hex_error("normalize failed", err))?;
    tracing::debug!(
        tokens = normalized.split_whitespace().count(),
        "normalized input"
    );
    print_normalized(&args.input, &normalized, format);
    Ok(SUCCESS)
}
