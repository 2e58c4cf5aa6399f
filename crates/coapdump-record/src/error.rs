use std::fmt;

use crate::field::{type_label, MessageType};

/// Errors that can occur while parsing a debug dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A non-empty line has no `:` separator.
    #[error("line {line} is not a 'key:value' pair: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// An ascii field's value is not a valid hex byte string.
    #[error("field '{field}' is not valid hex: {reason}")]
    InvalidHex { field: String, reason: String },

    /// An ascii field decoded to bytes outside 7-bit ASCII.
    #[error("field '{field}' does not decode to ASCII text: '{value}'")]
    InvalidAsciiBytes { field: String, value: String },

    /// An integer field's value is not a base-10 integer.
    #[error("field '{field}' is not a base-10 integer: '{value}'")]
    InvalidInteger { field: String, value: String },
}

/// A single check a debug record failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: '{0}'")]
    MissingField(String),

    #[error("invalid message type {actual}: '{}'; valid type = {expected}", label_of(.actual))]
    UnexpectedType { actual: i64, expected: MessageType },

    #[error("version must equal {expected}; found '{actual}'")]
    UnexpectedVersion { actual: i64, expected: i64 },

    #[error("token length must equal {expected}; found '{actual}'")]
    UnexpectedTokenLength { actual: i64, expected: i64 },
}

/// Every violation found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure(pub Vec<ValidationError>);

impl ValidationFailure {
    pub fn violations(&self) -> &[ValidationError] {
        &self.0
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for (i, err) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Failure of the combined parse-then-validate path.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

pub type Result<T> = std::result::Result<T, ParseError>;

fn label_of(code: &i64) -> &'static str {
    type_label(*code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_type_names_both_values() {
        let err = ValidationError::UnexpectedType {
            actual: 0,
            expected: MessageType::NonConfirmable,
        };
        assert_eq!(
            err.to_string(),
            "invalid message type 0: 'Confirmable (CON)'; valid type = 1: 'Non-confirmable (NON)'"
        );
    }

    #[test]
    fn failure_lists_every_violation() {
        let failure = ValidationFailure(vec![
            ValidationError::MissingField("code".to_string()),
            ValidationError::UnexpectedVersion {
                actual: 2,
                expected: 1,
            },
        ]);
        assert_eq!(
            failure.to_string(),
            "2 validation error(s): missing required field: 'code'; version must equal 1; found '2'"
        );
    }
}
