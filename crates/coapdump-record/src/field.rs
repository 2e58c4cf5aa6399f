//! Field names and how their values are decoded.

use std::fmt;

pub const VERSION: &str = "version";
pub const TYPE: &str = "type";
pub const TOKEN_LEN: &str = "token_len";
pub const CODE: &str = "code";
pub const MESSAGE_ID: &str = "message_id";
pub const TOKEN: &str = "token";
pub const URI_PATH: &str = "uri_path";
pub const URI_QUERY: &str = "uri_query";
pub const CONTENT_FORMAT: &str = "content_format";
pub const PAYLOAD: &str = "payload";

/// Fields every debug record must carry.
pub const REQUIRED_FIELDS: [&str; 8] = [
    VERSION,
    TYPE,
    TOKEN_LEN,
    CODE,
    MESSAGE_ID,
    TOKEN,
    URI_PATH,
    CONTENT_FORMAT,
];

/// How a field's raw text is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept verbatim as a hex digit string.
    Hex,
    /// Hex-encoded bytes holding 7-bit ASCII text.
    Ascii,
    /// Base-10 integer.
    Integer,
}

/// Returns the decode strategy for a field name.
pub fn field_kind(name: &str) -> FieldKind {
    match name {
        PAYLOAD => FieldKind::Hex,
        URI_PATH | URI_QUERY => FieldKind::Ascii,
        _ => FieldKind::Integer,
    }
}

/// CoAP message type carried in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Confirmable,
    NonConfirmable,
    Acknowledgement,
    Reset,
}

impl MessageType {
    /// Returns the message type for a raw `type` value.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Confirmable),
            1 => Some(Self::NonConfirmable),
            2 => Some(Self::Acknowledgement),
            3 => Some(Self::Reset),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Confirmable => 0,
            Self::NonConfirmable => 1,
            Self::Acknowledgement => 2,
            Self::Reset => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmable => "Confirmable (CON)",
            Self::NonConfirmable => "Non-confirmable (NON)",
            Self::Acknowledgement => "Acknowledgement (ACK)",
            Self::Reset => "Reset (RST)",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.code(), self.label())
    }
}

/// Human-readable name for a raw `type` value.
pub fn type_label(code: i64) -> &'static str {
    MessageType::from_code(code).map_or("unknown", MessageType::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kinds_follow_table() {
        assert_eq!(field_kind("payload"), FieldKind::Hex);
        assert_eq!(field_kind("uri_path"), FieldKind::Ascii);
        assert_eq!(field_kind("uri_query"), FieldKind::Ascii);
        assert_eq!(field_kind("message_id"), FieldKind::Integer);
        assert_eq!(field_kind("payload_len"), FieldKind::Integer);
        assert_eq!(field_kind("anything_else"), FieldKind::Integer);
    }

    #[test]
    fn message_type_codes_round_trip() {
        for code in 0..4 {
            let kind = MessageType::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(MessageType::from_code(4), None);
        assert_eq!(MessageType::from_code(-1), None);
    }

    #[test]
    fn labels_name_each_type() {
        assert_eq!(type_label(0), "Confirmable (CON)");
        assert_eq!(type_label(1), "Non-confirmable (NON)");
        assert_eq!(type_label(3), "Reset (RST)");
        assert_eq!(type_label(9), "unknown");
        assert_eq!(
            MessageType::NonConfirmable.to_string(),
            "1: 'Non-confirmable (NON)'"
        );
    }
}
