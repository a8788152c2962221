//! The student introduction record and its codec.
//!
//! Outbound, a record is encoded under the instruction schema (discriminator
//! `variant`) into the exact payload bytes for a create-introduction
//! instruction. Inbound, account bytes fetched from the chain are decoded
//! under the account schema (discriminator `initialized`); undecodable input
//! is logged and collapsed to `None` so callers treat it the same as an
//! account that does not exist.
//!
//! The codec is stateless: every call is an independent transformation over
//! the immutable `'static` schemas, safe to run concurrently.

use crate::schema::{self, FieldValue, RecordKind, SchemaDirection, Value};
use crate::types::encoding::{DecodeError, EncodeError};
use crate::warn;

/// Instruction discriminator for creating an introduction on the ledger.
pub const CREATE_INTRODUCTION: u8 = 0;

/// A student introduction: the author's name and a free-text message.
///
/// Constructed from user input on the outbound path or decoded from account
/// bytes on the inbound path; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIntro {
    name: String,
    message: String,
}

impl StudentIntro {
    /// Creates a record from its field values.
    ///
    /// No validation is applied: empty strings and arbitrary UTF-8 are
    /// accepted, matching the permissive upstream input form.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The author's name, exactly as constructed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message body, exactly as constructed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Encodes the record as a create-introduction instruction payload.
    ///
    /// A counting pass sizes the buffer, so the returned bytes are allocated
    /// at exactly the encoded span. A text field too long for its 4-byte
    /// length prefix fails loudly instead of truncating.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        let layout = schema::describe(RecordKind::Introduction, SchemaDirection::Instruction);
        let values = [
            FieldValue::U8(CREATE_INTRODUCTION),
            FieldValue::Str(&self.name),
            FieldValue::Str(&self.message),
        ];

        let span = layout.encoded_len(&values)?;
        let mut out = Vec::with_capacity(span);
        layout.encode(&values, &mut out)?;
        Ok(out)
    }

    /// Decodes account bytes into a record, reporting failures explicitly.
    ///
    /// The leading `initialized` flag is consumed but not retained on the
    /// record. Trailing bytes beyond the final field are ignored, since the
    /// chain may allocate account buffers larger than their live payload.
    pub fn try_deserialize(mut data: &[u8]) -> Result<Self, DecodeError> {
        let layout = schema::describe(RecordKind::Introduction, SchemaDirection::Account);
        let mut values = layout.decode(&mut data)?;

        // Schema order is initialized, name, message; pop from the back.
        let message = values
            .pop()
            .and_then(Value::into_string)
            .ok_or(DecodeError::InvalidValue)?;
        let name = values
            .pop()
            .and_then(Value::into_string)
            .ok_or(DecodeError::InvalidValue)?;
        Ok(Self { name, message })
    }

    /// Decodes optionally fetched account bytes.
    ///
    /// Absent or empty input means the account does not exist yet and yields
    /// `None` without logging. Malformed input is logged and collapsed to
    /// `None`; callers cannot distinguish it from absent data and should
    /// render both as "nothing to show".
    pub fn deserialize(data: Option<&[u8]>) -> Option<Self> {
        let data = data?;
        if data.is_empty() {
            return None;
        }

        match Self::try_deserialize(data) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "discarding undecodable introduction account ({} bytes): {}",
                    data.len(),
                    err
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::{BorshDeserialize, BorshSerialize};

    /// Builds account-convention bytes the way the chain would store them.
    fn account_bytes(name: &str, message: &str) -> Vec<u8> {
        let layout = schema::describe(RecordKind::Introduction, SchemaDirection::Account);
        let values = [
            FieldValue::U8(1),
            FieldValue::Str(name),
            FieldValue::Str(message),
        ];
        let mut out = Vec::new();
        layout.encode(&values, &mut out).expect("account encode");
        out
    }

    #[test]
    fn construction_is_idempotent() {
        let intro = StudentIntro::new("Alice", "gm");
        assert_eq!(intro.name(), "Alice");
        assert_eq!(intro.message(), "gm");
    }

    #[test]
    fn construction_accepts_empty_and_non_ascii() {
        let empty = StudentIntro::new("", "");
        assert_eq!(empty.name(), "");
        assert_eq!(empty.message(), "");

        let unicode = StudentIntro::new("Åsa", "góðan daginn ☀");
        assert_eq!(unicode.name(), "Åsa");
        assert_eq!(unicode.message(), "góðan daginn ☀");
    }

    #[test]
    fn serialize_has_exact_span() {
        let bytes = StudentIntro::new("Bo", "hi").serialize().expect("serialize");
        assert_eq!(bytes.len(), 1 + 4 + 2 + 4 + 2);
    }

    #[test]
    fn serialize_leads_with_create_discriminator() {
        for intro in [
            StudentIntro::new("Bo", "hi"),
            StudentIntro::new("", ""),
            StudentIntro::new("Åsa", "longer message body"),
        ] {
            assert_eq!(intro.serialize().expect("serialize")[0], CREATE_INTRODUCTION);
        }
    }

    #[test]
    fn golden_instruction_bytes() {
        let bytes = StudentIntro::new("Alice", "gm").serialize().expect("serialize");
        assert_eq!(
            bytes,
            [0, 5, 0, 0, 0, b'A', b'l', b'i', b'c', b'e', 2, 0, 0, 0, b'g', b'm']
        );
        assert_eq!(bytes.len(), 17);
    }

    #[test]
    fn golden_bytes_decode_under_account_convention() {
        // The same 17 bytes read back as an account: the leading 0 is taken
        // as the initialized flag and dropped.
        let bytes = [
            0, 5, 0, 0, 0, b'A', b'l', b'i', b'c', b'e', 2, 0, 0, 0, b'g', b'm',
        ];
        let decoded = StudentIntro::deserialize(Some(&bytes)).expect("decodable");
        assert_eq!(decoded, StudentIntro::new("Alice", "gm"));
    }

    #[test]
    fn account_roundtrip() {
        let bytes = account_bytes("Alice", "gm, I am new here");
        let decoded = StudentIntro::deserialize(Some(&bytes)).expect("decodable");
        assert_eq!(decoded.name(), "Alice");
        assert_eq!(decoded.message(), "gm, I am new here");
    }

    #[test]
    fn account_roundtrip_empty_fields() {
        let bytes = account_bytes("", "");
        let decoded = StudentIntro::deserialize(Some(&bytes)).expect("decodable");
        assert_eq!(decoded, StudentIntro::new("", ""));
    }

    #[test]
    fn absent_input_is_none() {
        assert_eq!(StudentIntro::deserialize(None), None);
        assert_eq!(StudentIntro::deserialize(Some(&[])), None);
    }

    #[test]
    fn every_truncation_is_none() {
        let bytes = account_bytes("Alice", "hello");
        for len in 0..bytes.len() {
            assert_eq!(
                StudentIntro::deserialize(Some(&bytes[..len])),
                None,
                "a {len}-byte prefix must not decode"
            );
        }
        assert!(StudentIntro::deserialize(Some(&bytes)).is_some());
    }

    #[test]
    fn trailing_bytes_are_tolerated() {
        let mut bytes = account_bytes("Alice", "hello");
        bytes.extend_from_slice(&[0; 16]);
        let decoded = StudentIntro::deserialize(Some(&bytes)).expect("decodable");
        assert_eq!(decoded.name(), "Alice");
    }

    #[test]
    fn invalid_utf8_is_invalid_not_a_panic() {
        // initialized = 1, then a 3-byte "name" that is not UTF-8.
        let mut bytes = vec![1, 3, 0, 0, 0, 0xFF, 0xFE, 0x00];
        bytes.extend_from_slice(&[0, 0, 0, 0]);

        assert_eq!(
            StudentIntro::try_deserialize(&bytes),
            Err(DecodeError::InvalidUtf8)
        );
        assert_eq!(StudentIntro::deserialize(Some(&bytes)), None);
    }

    #[test]
    fn try_deserialize_reports_eof() {
        assert_eq!(
            StudentIntro::try_deserialize(&[1, 5, 0, 0]),
            Err(DecodeError::UnexpectedEof)
        );
    }

    /// Reference layout for cross-checking against the borsh crate.
    #[derive(BorshSerialize, BorshDeserialize)]
    struct IntroPayload {
        discriminator: u8,
        name: String,
        message: String,
    }

    #[test]
    fn serialize_matches_borsh_wire_format() {
        let ours = StudentIntro::new("Alice", "gm").serialize().expect("serialize");
        let reference = borsh::to_vec(&IntroPayload {
            discriminator: CREATE_INTRODUCTION,
            name: "Alice".into(),
            message: "gm".into(),
        })
        .expect("borsh");
        assert_eq!(ours, reference);
    }

    #[test]
    fn deserialize_reads_borsh_account_bytes() {
        let bytes = borsh::to_vec(&IntroPayload {
            discriminator: 1,
            name: "Bo".into(),
            message: "hi".into(),
        })
        .expect("borsh");

        let decoded = StudentIntro::deserialize(Some(&bytes)).expect("decodable");
        assert_eq!(decoded, StudentIntro::new("Bo", "hi"));
    }
}
