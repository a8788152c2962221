//! Schema registry: compiled-in field layouts for ledger records.
//!
//! Every record kind is described twice, with identical field shapes but a
//! differently named leading discriminator:
//!
//! - [`SchemaDirection::Instruction`] (outbound): the discriminator is the
//!   instruction `variant` the ledger program dispatches on.
//! - [`SchemaDirection::Account`] (inbound): the same byte position is the
//!   account's `initialized` flag.
//!
//! Schemas are `'static` data, never mutated at runtime, and shared
//! read-only by every codec call.

use crate::types::encoding::{self, DecodeError, EncodeError, EncodeSink, SizeCounter};

/// Wire encoding of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 8-bit integer, fixed 1 byte.
    U8,
    /// UTF-8 text with a 4-byte little-endian length prefix.
    Str,
}

/// One named field in a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
}

impl Field {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// The field's name as it appears in the layout description.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's wire encoding.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// Record kinds known to the registry.
///
/// Adding a kind means adding a variant here plus its two layout tables
/// below; nothing else in the codec assumes a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A student introduction: author name plus message body.
    Introduction,
}

/// Which side of the wire a schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDirection {
    /// Outbound message construction; the discriminator is the instruction
    /// variant.
    Instruction,
    /// Inbound interpretation of persisted state; the discriminator is the
    /// account's initialized flag.
    Account,
}

/// Ordered field layout: a leading discriminator followed by the record's
/// data fields.
#[derive(Debug)]
pub struct Schema {
    fields: &'static [Field],
}

/// Borrowed field value fed to an encode walk, in schema order.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    U8(u8),
    Str(&'a str),
}

/// Owned field value produced by a decode walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    Str(String),
}

impl Value {
    /// Consumes the value, returning its text content, or `None` for
    /// non-text values.
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            Value::U8(_) => None,
        }
    }

    /// The integer content, or `None` for non-integer values.
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Value::U8(v) => Some(*v),
            Value::Str(_) => None,
        }
    }
}

static INTRODUCTION_INSTRUCTION: Schema = Schema {
    fields: &[
        Field::new("variant", FieldKind::U8),
        Field::new("name", FieldKind::Str),
        Field::new("message", FieldKind::Str),
    ],
};

static INTRODUCTION_ACCOUNT: Schema = Schema {
    fields: &[
        Field::new("initialized", FieldKind::U8),
        Field::new("name", FieldKind::Str),
        Field::new("message", FieldKind::Str),
    ],
};

/// Looks up the layout for a record kind in the given direction.
///
/// Pure and total over the known kinds; schemas are compiled in, so there is
/// no failure mode.
pub fn describe(kind: RecordKind, direction: SchemaDirection) -> &'static Schema {
    match (kind, direction) {
        (RecordKind::Introduction, SchemaDirection::Instruction) => &INTRODUCTION_INSTRUCTION,
        (RecordKind::Introduction, SchemaDirection::Account) => &INTRODUCTION_ACCOUNT,
    }
}

impl Schema {
    /// The ordered field list, discriminator first.
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Encodes `values` through this schema's field layout.
    ///
    /// Values must be supplied in schema order. A kind or arity disagreement
    /// is reported as an error before anything is written for the offending
    /// field; it is never papered over with a partial encoding.
    pub fn encode<S: EncodeSink>(
        &self,
        values: &[FieldValue<'_>],
        out: &mut S,
    ) -> Result<(), EncodeError> {
        if values.len() != self.fields.len() {
            return Err(EncodeError::ArityMismatch {
                expected: self.fields.len(),
                got: values.len(),
            });
        }
        for (field, value) in self.fields.iter().zip(values) {
            match (field.kind, value) {
                (FieldKind::U8, FieldValue::U8(v)) => encoding::encode_u8(*v, out),
                (FieldKind::Str, FieldValue::Str(s)) => encoding::encode_str(field.name, s, out)?,
                _ => return Err(EncodeError::KindMismatch { field: field.name }),
            }
        }
        Ok(())
    }

    /// Exact number of bytes [`encode`](Self::encode) will produce for
    /// `values`: a counting pass with no allocation.
    pub fn encoded_len(&self, values: &[FieldValue<'_>]) -> Result<usize, EncodeError> {
        let mut counter = SizeCounter::new();
        self.encode(values, &mut counter)?;
        Ok(counter.len())
    }

    /// Decodes one value per field in schema order, advancing `input`.
    ///
    /// Trailing bytes are left unread; externally persisted account buffers
    /// may be allocated larger than their live payload.
    pub fn decode(&self, input: &mut &[u8]) -> Result<Vec<Value>, DecodeError> {
        let mut values = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let value = match field.kind {
                FieldKind::U8 => Value::U8(encoding::decode_u8(input)?),
                FieldKind::Str => Value::Str(encoding::decode_str(input)?),
            };
            values.push(value);
        }
        Ok(values)
    }
}
