//! The decoded value tree.

use alloc::{
    collections::{BTreeMap, btree_map},
    string::String,
    vec,
    vec::Vec,
};
use core::fmt::{self, Display, Formatter};

/// A decoded message: field values keyed by field number.
///
/// Each field number appears once. A field found more than once in the input
/// holds a [`FieldValue::Repeated`] of its occurrences, in encounter order.
/// Iteration is in ascending field number order.
///
/// The [`Display`] implementation renders the message in the style of
/// `protoc --decode_raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedMessage {
    fields: BTreeMap<u64, FieldValue>,
}

/// A best-effort guess at the value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A varint or 64-bit fixed-width value. Signedness, zigzag encoding and
    /// floating point are not distinguished.
    UnsignedInteger(u64),
    /// A 32-bit fixed-width value, which may have been a `float`.
    FixedU32(u32),
    /// A length-delimited payload holding valid UTF-8.
    Text(String),
    /// A length-delimited payload that is neither a message nor text.
    Bytes(Vec<u8>),
    /// A length-delimited payload that decodes as a message.
    Message(DecodedMessage),
    /// Every occurrence of a field found more than once. Never nested, and
    /// never holding fewer than two values.
    Repeated(Vec<FieldValue>),
}

impl DecodedMessage {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field, if present.
    pub fn get(&self, field: u64) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// The number of distinct field numbers.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the message holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over field numbers and values, in ascending field order.
    pub fn iter(&self) -> btree_map::Iter<'_, u64, FieldValue> {
        self.fields.iter()
    }

    /// Add an occurrence of a field.
    ///
    /// The first occurrence is stored as-is. The second turns the field into
    /// a two-value [`FieldValue::Repeated`], and later ones are appended to it.
    pub(super) fn merge(&mut self, field: u64, value: FieldValue) {
        match self.fields.entry(field) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
            }
            btree_map::Entry::Occupied(mut entry) => match entry.get_mut() {
                FieldValue::Repeated(values) => values.push(value),
                existing => {
                    let first = core::mem::replace(existing, FieldValue::Repeated(Vec::new()));
                    *existing = FieldValue::Repeated(vec![first, value]);
                }
            },
        }
    }
}

impl From<DecodedMessage> for BTreeMap<u64, FieldValue> {
    fn from(message: DecodedMessage) -> Self {
        message.fields
    }
}

impl IntoIterator for DecodedMessage {
    type Item = (u64, FieldValue);
    type IntoIter = btree_map::IntoIter<u64, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodedMessage {
    type Item = (&'a u64, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, u64, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FieldValue {
    /// The value of an [`UnsignedInteger`](Self::UnsignedInteger).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UnsignedInteger(v) => Some(*v),
            _ => None,
        }
    }

    /// The value of a [`FixedU32`](Self::FixedU32).
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::FixedU32(v) => Some(*v),
            _ => None,
        }
    }

    /// The text of a [`Text`](Self::Text) value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The contents of a [`Bytes`](Self::Bytes) value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    /// The message of a [`Message`](Self::Message) value.
    pub fn as_message(&self) -> Option<&DecodedMessage> {
        match self {
            Self::Message(v) => Some(v),
            _ => None,
        }
    }

    /// Every occurrence of the field: the values of a
    /// [`Repeated`](Self::Repeated), or this value alone.
    pub fn occurrences(&self) -> &[FieldValue] {
        match self {
            Self::Repeated(values) => values,
            value => core::slice::from_ref(value),
        }
    }
}

impl Display for DecodedMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_message(f, self, 0)
    }
}

const INDENT: usize = 2;

fn write_message(f: &mut Formatter<'_>, message: &DecodedMessage, indent: usize) -> fmt::Result {
    for (field, value) in message {
        for value in value.occurrences() {
            write!(f, "{:indent$}{field}", "")?;

            match value {
                FieldValue::UnsignedInteger(v) => writeln!(f, ": {v}")?,
                FieldValue::FixedU32(v) => writeln!(f, ": 0x{v:08x}")?,
                FieldValue::Text(v) => writeln!(f, ": \"{}\"", v.as_bytes().escape_ascii())?,
                FieldValue::Bytes(v) => writeln!(f, ": b\"{}\"", v.escape_ascii())?,
                FieldValue::Message(v) => {
                    f.write_str(" {\n")?;
                    write_message(f, v, indent + INDENT)?;
                    writeln!(f, "{:indent$}}}", "")?;
                }
                // Occurrences are never themselves repeated.
                FieldValue::Repeated(_) => writeln!(f)?,
            }
        }
    }

    Ok(())
}
