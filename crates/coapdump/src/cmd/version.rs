use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("coapdump {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: coapdump");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("COAPDUMP_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "required_fields: {}",
        coapdump_record::REQUIRED_FIELDS.join(", ")
    );

    Ok(SUCCESS)
}
