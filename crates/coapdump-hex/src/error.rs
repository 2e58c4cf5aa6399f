/// Errors that can occur while normalizing hex tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token was empty once separators were stripped.
    #[error("hex token {index} is empty")]
    EmptyToken { index: usize },

    /// A token contains characters that are not hex digits.
    #[error("hex token {index} ('{token}') contains a non-hex digit")]
    InvalidHexDigit { token: String, index: usize },

    /// A token does not fit in a single byte.
    #[error("hex token {index} ('{token}') does not fit in one byte")]
    ByteOverflow { token: String, index: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;
