use crate::error::{ParseError, Result};
use crate::record::DebugRecord;

/// Separator between a field name and its value.
pub const SEPARATOR: char = ':';

/// Parse a newline-separated `key:value` dump into a [`DebugRecord`].
///
/// Blank lines are skipped. Each line is split on its first `:`; name and
/// value are trimmed, so `version: 1` and `version:1` are equivalent. Values
/// are decoded by field kind (see [`crate::field::field_kind`]). A repeated
/// field overwrites the earlier value.
///
/// Parsing stops at the first malformed line or value.
pub fn parse(text: &str) -> Result<DebugRecord> {
    let mut record = DebugRecord::new();

    for (number, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let Some((key, raw)) = line.split_once(SEPARATOR) else {
            return Err(ParseError::MalformedLine {
                line: number + 1,
                content: line.to_string(),
            });
        };
        let key = key.trim();
        let raw = raw.trim();

        let value = DebugRecord::decode_value(key, raw)?;
        if let Some(previous) = record.insert(key, value) {
            tracing::debug!(field = key, %previous, "duplicate field overwrites earlier value");
        }
    }

    tracing::trace!(fields = record.len(), "parsed debug record");
    Ok(record)
}
