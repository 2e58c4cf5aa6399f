//! Decode and validate CoAP debug dumps from embedded devices.
//!
//! coapdump turns the `key:value` debug text a device prints for each
//! received CoAP message into a typed, validated record, and normalizes
//! hand-written hex byte lists into canonical form.
//!
//! # Crate Structure
//!
//! - [`hex`] — Canonical hex byte strings from loose token lists
//! - [`record`] — Debug dump parsing and validation

/// Re-export hex normalization.
pub mod hex {
    pub use coapdump_hex::*;
}

/// Re-export debug record parsing and validation.
pub mod record {
    pub use coapdump_record::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_payload_feeds_a_dump() {
        let bytes = hex::parse_bytes("0x74,0x65 0x73,74,0x31").unwrap();
        let dump = format!(
            "version:1\ntype:1\ntoken_len:1\ncode:1\nmessage_id:7\ntoken:5\nuri_path:{}\ncontent_format:0\n",
            hex::format_bytes(&bytes).replace(' ', "")
        );

        let record = record::parse_validated(&dump).unwrap();
        assert_eq!(record.text("uri_path"), Some("test1"));
    }
}
