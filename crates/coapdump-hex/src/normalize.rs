use std::fmt::Write;

use crate::error::{ParseError, Result};

/// Separator used between canonical tokens.
pub const SEPARATOR: char = ' ';

/// Normalize a free-form hex token list into canonical form.
///
/// Tokens may be separated by any mix of commas and whitespace, carry an
/// optional `0x`/`0X` prefix and use either letter case. Each token is
/// rendered lowercase without prefix and zero-padded to two characters:
///
/// ```text
/// "0x51,01,0x0 4,0x8A, 74"  ->  "51 01 00 04 8a 74"
/// ```
///
/// A stray space inside a token splits it in two; both halves are rendered
/// independently (`"0x0 4"` becomes `"00 04"`).
pub fn normalize(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    for (index, token) in tokens(input).enumerate() {
        let rendered = render_token(token, index)?;
        if index > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&rendered);
    }
    tracing::trace!(input, normalized = %out, "normalized hex tokens");
    Ok(out)
}

/// Normalize a single token.
pub fn normalize_token(token: &str) -> Result<String> {
    render_token(token, 0)
}

/// Normalize `input` and convert every token into a byte.
///
/// Unlike [`normalize`], tokens wider than one byte are rejected.
pub fn parse_bytes(input: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for (index, token) in tokens(input).enumerate() {
        let rendered = render_token(token, index)?;
        if rendered.len() > 2 {
            return Err(ParseError::ByteOverflow {
                token: token.to_string(),
                index,
            });
        }
        let byte = u8::from_str_radix(&rendered, 16).map_err(|_| ParseError::InvalidHexDigit {
            token: token.to_string(),
            index,
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Render bytes in canonical form.
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Split raw input on commas and whitespace, dropping empty pieces.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn render_token(token: &str, index: usize) -> Result<String> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::EmptyToken { index });
    }

    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHexDigit {
            token: token.to_string(),
            index,
        });
    }

    // Work on the digit string directly so long tokens never overflow.
    let significant = digits.trim_start_matches('0');
    let mut rendered = if significant.is_empty() {
        "0".to_string()
    } else {
        significant.to_ascii_lowercase()
    };
    if rendered.len() == 1 {
        rendered.insert(0, '0');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "51 01 00 04 8a b4 62 61 74 74";

    #[test]
    fn known_inputs_normalize_to_canonical_form() {
        let inputs = [
            "51 01 00 04 8a b4 62 61 74 74",
            "0x51 0x01 0x00 0x04 0x8a 0xb4 0x62 0x61 0x74 0x74",
            "51, 01, 00, 04, 8a, b4, 62, 61, 74, 74",
            "51 01 00 04 8A B4 62 61 74 74",
            "51 1 0 4 8a b4 62 61 74 74",
            "0x51,01,0x0 4,0x8A,0xB4,0x62, 0x61, 74,   0x74",
        ];
        for input in inputs {
            assert_eq!(normalize(input).unwrap(), CANONICAL, "input: {input:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("0X1,0xAb ,\tf  0x00").unwrap();
        assert_eq!(once, "01 ab 0f 00");
        assert_eq!(normalize(&once).unwrap(), once);
    }

    #[test]
    fn case_and_prefix_do_not_matter() {
        let expected = normalize("8a").unwrap();
        assert_eq!(normalize("8A").unwrap(), expected);
        assert_eq!(normalize("0x8a").unwrap(), expected);
        assert_eq!(normalize("0X8A").unwrap(), expected);
    }

    #[test]
    fn output_keeps_token_count_and_width() {
        let input = "1,2, 3 0xA 0Xb ff";
        let out = normalize(input).unwrap();
        assert_eq!(out.split(' ').count(), tokens(input).count());
        assert!(out
            .split(' ')
            .all(|t| t.len() == 2 && t.chars().all(|c| !c.is_ascii_uppercase())));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize("").unwrap(), "");
        assert_eq!(normalize(" ,, \n").unwrap(), "");
    }

    #[test]
    fn wide_tokens_are_not_truncated() {
        assert_eq!(normalize("100").unwrap(), "100");
        assert_eq!(normalize("0x0004").unwrap(), "04");
        assert_eq!(
            normalize_token("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF").unwrap(),
            "ffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn invalid_digit_reports_token_and_position() {
        assert_eq!(
            normalize("01 zz 03"),
            Err(ParseError::InvalidHexDigit {
                token: "zz".to_string(),
                index: 1,
            })
        );
        assert!(matches!(
            normalize_token("0x"),
            Err(ParseError::InvalidHexDigit { .. })
        ));
        assert!(matches!(
            normalize_token("0x0x1"),
            Err(ParseError::InvalidHexDigit { .. })
        ));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(normalize_token("  "), Err(ParseError::EmptyToken { index: 0 }));
    }

    #[test]
    fn parse_bytes_converts_tokens() {
        assert_eq!(
            parse_bytes("0x51,01,0x0 4,0x8A").unwrap(),
            vec![0x51, 0x01, 0x00, 0x04, 0x8a]
        );
    }

    #[test]
    fn parse_bytes_rejects_values_above_one_byte() {
        assert_eq!(
            parse_bytes("01 0x100"),
            Err(ParseError::ByteOverflow {
                token: "0x100".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn format_bytes_matches_normalize() {
        let bytes = [0x51, 0x01, 0x00, 0x04, 0x8a, 0xb4, 0x62, 0x61, 0x74, 0x74];
        assert_eq!(format_bytes(&bytes), CANONICAL);
        assert_eq!(format_bytes(&[]), "");
    }
}
