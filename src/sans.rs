//! Allocation-free primitives of the wire format.
//!
//! This module is intended for applications that need to walk an encoded
//! message by hand. See [`crate::avec`] for the decoder building a value tree.
//!
//! # Architecture
//!
//! A [`Cursor`] owns a view over the bytes not yet read, and an error slot.
//! Its read operations never panic. The first failure is latched, and from
//! then on every read is a no-op returning a default value (`0` or an empty
//! slice). Callers may issue several reads in a row and check for an error
//! once, with [`Cursor::take_error`], at the end.
//!
//! Every field starts with a key varint. Split it into a field number and a
//! [`WireType`] with [`tag::split`], then read the value with the matching
//! cursor operation:
//!
//! - [`WireType::Varint`] is read with [`Cursor::decode_varint`].
//! - [`WireType::Fixed64`] is read with [`Cursor::read_fixed_u64`].
//! - [`WireType::LengthDelimited`] is read with [`Cursor::read_length_delimited`].
//! - [`WireType::Fixed32`] is read with [`Cursor::read_fixed_u32`].
//!
//! Group wire types have no cursor operation; a group cannot be skipped
//! without matching its end marker, which this crate does not attempt.

use thiserror::Error;

pub mod cursor;
pub mod tag;

pub use cursor::Cursor;
pub use tag::WireType;

/// An error decoding a message.
///
/// All variants describe malformed or unsupported input. Decoding the same
/// bytes again always fails the same way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remain than a length prefix, fixed-width value, or varint
    /// continuation requires.
    #[error("Unexpectedly reached the end of the input.")]
    TruncatedInput,
    /// A varint does not fit in 64 bits.
    #[error("Varint does not fit in 64 bits.")]
    VarintOverflow,
    /// Found a group (wire type 3 or 4).
    #[error("Found unsupported group wire type.")]
    GroupsUnsupported,
    /// Found a wire type outside the defined range.
    #[error("Unknown wire type ({0}).")]
    UnknownWireType(u8),
}
