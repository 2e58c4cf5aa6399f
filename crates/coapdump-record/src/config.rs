use crate::field::MessageType;

/// Controls what the validator expects and how much it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Message type every record must carry.
    pub expected_type: MessageType,
    /// Required value of the `version` field.
    pub expected_version: i64,
    /// Required value of the `token_len` field.
    pub expected_token_len: i64,
    /// When true, every passed check is logged at info level.
    pub verbose: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            expected_type: MessageType::NonConfirmable,
            expected_version: 1,
            expected_token_len: 1,
            verbose: false,
        }
    }
}
