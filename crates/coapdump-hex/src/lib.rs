//! Canonical hex byte strings from loosely formatted token lists.
//!
//! Debug output and hand-written test vectors spell bytes in many ways:
//! `0x8A`, `8a`, `0xb4,`, `1`. This crate turns any such list into the
//! canonical space-separated, two-digit, lowercase form (`"8a b4 01"`) that
//! the rest of the tooling expects.

pub mod error;
pub mod normalize;

pub use error::{ParseError, Result};
pub use normalize::{format_bytes, normalize, normalize_token, parse_bytes, tokens, SEPARATOR};
