use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::error::{ValidationError, ValidationFailure};
use crate::field::{REQUIRED_FIELDS, TOKEN_LEN, TYPE, VERSION};
use crate::record::DebugRecord;

/// Outcome of validating one record.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    record: DebugRecord,
    #[serde(serialize_with = "serialize_violations")]
    violations: Vec<ValidationError>,
    confirmations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn record(&self) -> &DebugRecord {
        &self.record
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Descriptions of the checks that passed, in check order.
    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    /// The record if every check passed, otherwise all violations.
    pub fn into_result(self) -> Result<DebugRecord, ValidationFailure> {
        if self.violations.is_empty() {
            Ok(self.record)
        } else {
            Err(ValidationFailure(self.violations))
        }
    }
}

/// Checks debug records against the expected message shape.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every check and collect all findings.
    pub fn validate(&self, record: DebugRecord) -> ValidationReport {
        let mut checks = Checks {
            verbose: self.config.verbose,
            violations: Vec::new(),
            confirmations: Vec::new(),
        };

        self.check_required_fields(&record, &mut checks);
        self.check_type(&record, &mut checks);
        self.check_version_and_token_len(&record, &mut checks);

        if !checks.violations.is_empty() {
            tracing::debug!(
                violations = checks.violations.len(),
                "debug record failed validation"
            );
        }

        ValidationReport {
            record,
            violations: checks.violations,
            confirmations: checks.confirmations,
        }
    }

    fn check_required_fields(&self, record: &DebugRecord, checks: &mut Checks) {
        for field in REQUIRED_FIELDS {
            if record.contains(field) {
                checks.pass(format!("required field '{field}' is present"));
            } else {
                checks.fail(ValidationError::MissingField(field.to_string()));
            }
        }
    }

    fn check_type(&self, record: &DebugRecord, checks: &mut Checks) {
        let Some(actual) = record.integer(TYPE) else {
            return;
        };
        let expected = self.config.expected_type;
        if actual == expected.code() {
            checks.pass(format!("message type {expected}"));
        } else {
            checks.fail(ValidationError::UnexpectedType { actual, expected });
        }
    }

    fn check_version_and_token_len(&self, record: &DebugRecord, checks: &mut Checks) {
        let expected = self.config.expected_version;
        match record.integer(VERSION) {
            Some(actual) if actual == expected => {
                checks.pass(format!("version = {expected}"));
            }
            Some(actual) => checks.fail(ValidationError::UnexpectedVersion { actual, expected }),
            None => {}
        }

        let expected = self.config.expected_token_len;
        match record.integer(TOKEN_LEN) {
            Some(actual) if actual == expected => {
                checks.pass(format!("token length = {expected}"));
            }
            Some(actual) => {
                checks.fail(ValidationError::UnexpectedTokenLength { actual, expected });
            }
            None => {}
        }
    }
}

/// Validate with the default configuration.
pub fn validate(record: DebugRecord) -> ValidationReport {
    Validator::default().validate(record)
}

struct Checks {
    verbose: bool,
    violations: Vec<ValidationError>,
    confirmations: Vec<String>,
}

impl Checks {
    fn pass(&mut self, message: String) {
        if self.verbose {
            tracing::info!("Check OK: {message}");
        }
        self.confirmations.push(message);
    }

    fn fail(&mut self, violation: ValidationError) {
        tracing::debug!(%violation, "check failed");
        self.violations.push(violation);
    }
}

fn serialize_violations<S: serde::Serializer>(
    violations: &[ValidationError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(violations.iter().map(ToString::to_string))
}
