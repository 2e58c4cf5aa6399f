use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ParseError, Result};
use crate::field::{field_kind, FieldKind};

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw hex digits, not decoded further.
    Hex(String),
    /// Text decoded from hex-encoded ASCII bytes.
    Ascii(String),
    Integer(i64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Hex(_) => FieldKind::Hex,
            Self::Ascii(_) => FieldKind::Ascii,
            Self::Integer(_) => FieldKind::Integer,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Hex(text) | Self::Ascii(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    /// Decode a hex field into bytes.
    pub fn hex_bytes(&self) -> Option<std::result::Result<Vec<u8>, hex::FromHexError>> {
        match self {
            Self::Hex(digits) => Some(hex::decode(digits)),
            _ => None,
        }
    }

    /// Render the value the way it appears in a dump line.
    pub fn to_dump_value(&self) -> String {
        match self {
            Self::Hex(digits) => digits.clone(),
            Self::Ascii(text) => hex::encode(text.as_bytes()),
            Self::Integer(value) => value.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(text) | Self::Ascii(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Hex(text) | Self::Ascii(text) => serializer.serialize_str(text),
            Self::Integer(value) => serializer.serialize_i64(*value),
        }
    }
}

/// Typed fields of one dumped CoAP message, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugRecord {
    fields: Vec<(String, FieldValue)>,
    // Field name -> position in `fields`.
    index: HashMap<String, usize>,
}

impl DebugRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value under the same name.
    ///
    /// A replaced field keeps its original position. Returns the previous
    /// value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        let name = name.into();
        if let Some(&position) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.fields[position].1, value));
        }
        self.index.insert(name.clone(), self.fields.len());
        self.fields.push((name, value));
        None
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.index
            .get(name)
            .map(|&position| &self.fields[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Integer value of `name`, if present and an integer field.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_integer)
    }

    /// Text of `name`, if present and a hex or ascii field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-serialize into `key:value` dump lines.
    pub fn to_dump_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push(':');
            out.push_str(&value.to_dump_value());
            out.push('\n');
        }
        out
    }

    /// Decode one raw value according to its field's kind.
    pub fn decode_value(field: &str, raw: &str) -> Result<FieldValue> {
        match field_kind(field) {
            FieldKind::Hex => Ok(FieldValue::Hex(raw.to_string())),
            FieldKind::Ascii => decode_ascii(field, raw).map(FieldValue::Ascii),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| ParseError::InvalidInteger {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
        }
    }
}

impl FromStr for DebugRecord {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self> {
        crate::parser::parse(text)
    }
}

impl Serialize for DebugRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn decode_ascii(field: &str, raw: &str) -> Result<String> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&digits).map_err(|err| ParseError::InvalidHex {
        field: field.to_string(),
        reason: err.to_string(),
    })?;
    if !bytes.is_ascii() {
        return Err(ParseError::InvalidAsciiBytes {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|_| ParseError::InvalidAsciiBytes {
        field: field.to_string(),
        value: raw.to_string(),
    })
}
