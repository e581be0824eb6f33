//! Building a value tree, guessing the type of length-delimited payloads.

use alloc::{string::ToString, vec::Vec};

use tracing::{debug, trace};

use crate::sans::Error;

use super::{DecodedMessage, FieldValue, FromFields, Options, slice};

/// Decode a message found at a nesting depth.
pub(super) fn decode_at(
    r: &[u8],
    options: &Options,
    depth: usize,
) -> Result<DecodedMessage, Error> {
    let mut builder = Builder {
        message: DecodedMessage::new(),
        options,
        depth,
    };

    slice::decode(r, &mut builder)?;

    Ok(builder.message)
}

/// Receiver merging every value into a message.
struct Builder<'a> {
    message: DecodedMessage,
    options: &'a Options,
    depth: usize,
}

impl Builder<'_> {
    /// Guess the most natural representation of a length-delimited payload.
    ///
    /// A payload that decodes as a message is taken to be one, even if it
    /// was encoded as a string or bytes.
    fn classify(&self, field: u64, payload: &[u8]) -> FieldValue {
        if self.options.allows_nesting(self.depth) {
            match decode_at(payload, self.options, self.depth + 1) {
                Ok(message) => return FieldValue::Message(message),
                Err(err) => trace!(field, len = payload.len(), %err, "payload is not a message"),
            }
        } else {
            debug!(field, depth = self.depth, "nesting limit reached");
        }

        match core::str::from_utf8(payload) {
            Ok(text) => FieldValue::Text(text.to_string()),
            Err(_) => FieldValue::Bytes(Vec::from(payload)),
        }
    }
}

impl FromFields for Builder<'_> {
    fn add_varint(&mut self, field: u64, value: u64) {
        self.message.merge(field, FieldValue::UnsignedInteger(value));
    }

    fn add_fixed64(&mut self, field: u64, value: u64) {
        self.message.merge(field, FieldValue::UnsignedInteger(value));
    }

    fn add_fixed32(&mut self, field: u64, value: u32) {
        self.message.merge(field, FieldValue::FixedU32(value));
    }

    fn add_length_delimited(&mut self, field: u64, payload: &[u8]) {
        let value = self.classify(field, payload);
        self.message.merge(field, value);
    }
}
