use clap::ValueEnum;
use coapdump_record::{DebugRecord, FieldKind};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

#[derive(Serialize)]
struct NormalizedOutput<'a> {
    input: &'a str,
    normalized: &'a str,
    token_count: usize,
}

/// Print a validated record.
///
/// `pretty` prints one `key: value` line per field in record order; `raw`
/// prints the record back in dump form.
pub fn print_record(record: &DebugRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "KIND", "VALUE"]);
            for (key, value) in record.iter() {
                table.add_row(vec![
                    key.to_string(),
                    kind_name(value.kind()).to_string(),
                    value.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (key, value) in record.iter() {
                println!("{key}: {value}");
            }
        }
        OutputFormat::Raw => print!("{}", record.to_dump_text()),
    }
}

pub fn print_normalized(input: &str, normalized: &str, format: OutputFormat) {
    let token_count = normalized.split_whitespace().count();
    match format {
        OutputFormat::Json => {
            let out = NormalizedOutput {
                input,
                normalized,
                token_count,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "INPUT", "CANONICAL"]);
            for (index, (raw, canonical)) in coapdump_hex::tokens(input)
                .zip(normalized.split_whitespace())
                .enumerate()
            {
                table.add_row(vec![index.to_string(), raw.to_string(), canonical.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{normalized} ({token_count} bytes)"),
        OutputFormat::Raw => println!("{normalized}"),
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Hex => "hex",
        FieldKind::Ascii => "ascii",
        FieldKind::Integer => "integer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_json_has_token_count() {
        let out = NormalizedOutput {
            input: "0x1,0x2",
            normalized: "01 02",
            token_count: 2,
        };
        let json = serde_json::to_string(&out).expect("normalized output should serialize");
        assert_eq!(
            json,
            r#"{"input":"0x1,0x2","normalized":"01 02","token_count":2}"#
        );
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(kind_name(FieldKind::Ascii), "ascii");
        assert_eq!(kind_name(FieldKind::Integer), "integer");
    }
}
