//! Convenience interfaces for decoding into a value tree.
//!
//! The functions in this module decode complete messages from data slices
//! (and, with the `std` feature, readers). [`decode`] and [`decode_with`]
//! build a [`DecodedMessage`]. For finer control, [`decode_slice`] publishes
//! each raw field to a [`FromFields`] receiver instead.

mod classify;
pub mod message;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use message::{DecodedMessage, FieldValue};
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::sans::Error;

/// Run-time decoding options.
///
/// # Example
///
/// ```
/// let options = Options::new().max_depth(32);
/// let message = freewheel::decode_with(&data, &options)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    max_depth: Option<usize>,
}

impl Options {
    /// Options with no nesting limit.
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Limit how deep length-delimited payloads are tried as nested messages.
    ///
    /// The top-level message is at depth 0. A payload found at depth `d` is
    /// only tried as a message while `d < depth`; past the limit it is
    /// classified as text or bytes. Reaching the limit is never an error.
    ///
    /// Decoding recurses once per level of nesting, so this should be set
    /// when decoding untrusted input.
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether a payload found at `depth` may be tried as a nested message.
    pub(crate) fn allows_nesting(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

/// Decode a complete message into a value tree.
///
/// Equivalent to [`decode_with`] using default [`Options`]. A message either
/// decodes completely or not at all; no partial result is returned. Empty
/// input decodes to an empty message.
pub fn decode(r: &[u8]) -> Result<DecodedMessage, Error> {
    decode_with(r, &Options::default())
}

/// Decode a complete message into a value tree, with options.
pub fn decode_with(r: &[u8], options: &Options) -> Result<DecodedMessage, Error> {
    classify::decode_at(r, options, 0)
}

/// Receive raw field values of a message, in the order they are encountered.
///
/// The default implementation of each method ignores received values.
///
/// Values are only published once fully read. If decoding later fails, the
/// receiver keeps everything received before the failure.
#[allow(unused_variables)]
pub trait FromFields {
    /// Add a varint (wire type 0) value.
    fn add_varint(&mut self, field: u64, _: u64) {}
    /// Add a 64-bit fixed-width (wire type 1) value.
    fn add_fixed64(&mut self, field: u64, _: u64) {}
    /// Add a 32-bit fixed-width (wire type 5) value.
    fn add_fixed32(&mut self, field: u64, _: u32) {}
    /// Add a length-delimited (wire type 2) payload.
    fn add_length_delimited(&mut self, field: u64, _: &[u8]) {}
}
