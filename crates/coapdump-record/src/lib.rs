//! Parse and validate textual debug dumps of received CoAP messages.
//!
//! Embedded firmware prints each decoded message as `key:value` lines:
//!
//! ```text
//! version:1
//! type:1
//! uri_path:7465737431
//! ```
//!
//! [`parse`] turns such a dump into a typed [`DebugRecord`], and
//! [`Validator`] checks it for the fields and values a well-formed message
//! must carry, collecting every violation into one [`ValidationReport`].

pub mod config;
pub mod error;
pub mod field;
pub mod parser;
pub mod record;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{ParseError, RecordError, Result, ValidationError, ValidationFailure};
pub use field::{field_kind, FieldKind, MessageType, REQUIRED_FIELDS};
pub use parser::parse;
pub use record::{DebugRecord, FieldValue};
pub use validator::{validate, ValidationReport, Validator};

/// Parse a dump and validate it with `config`.
///
/// Returns the report even when validation fails; only parse errors are
/// returned as `Err`.
pub fn parse_and_validate(text: &str, config: &ValidatorConfig) -> Result<ValidationReport> {
    let record = parse(text)?;
    Ok(Validator::new(*config).validate(record))
}

/// Parse a dump and require it to pass validation.
pub fn parse_validated(text: &str) -> std::result::Result<DebugRecord, RecordError> {
    let record = parse(text)?;
    Ok(validate(record).into_result()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validated_reports_each_stage() {
        let ok = "version:1\ntype:1\ntoken_len:1\ncode:1\nmessage_id:1\ntoken:5\nuri_path:7465737431\ncontent_format:0\n";
        assert!(parse_validated(ok).is_ok());
        assert!(matches!(
            parse_validated("no separator"),
            Err(RecordError::Parse(ParseError::MalformedLine { .. }))
        ));
        assert!(matches!(
            parse_validated(&ok.replace("type:1", "type:0")),
            Err(RecordError::Validation(_))
        ));
    }

    #[test]
    fn parse_and_validate_keeps_failed_report() {
        let report = parse_and_validate("version:4\n", &ValidatorConfig::default()).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.record().integer("version"), Some(4));
    }
}
