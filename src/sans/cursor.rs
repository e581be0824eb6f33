//! Byte cursor with a latched error.

use zerocopy::{
    FromBytes,
    byteorder::little_endian::{U32, U64},
};

use super::Error;

/// Upper bound on the bit offset of a varint group. A 64-bit value holds at
/// most ten 7-bit groups (at offsets 0, 7, .., 63).
const VARINT_SHIFT_LIMIT: u32 = 64;

/// A read-only view over the bytes of a message not yet decoded.
///
/// See the architecture description in the [`crate::sans`] module
/// documentation for the error-latching contract.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    remaining: &'a [u8],
    error: Option<Error>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over a complete encoded message.
    pub fn new(r: &'a [u8]) -> Self {
        Self {
            remaining: r,
            error: None,
        }
    }

    /// The bytes not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }

    /// Whether decoding should stop, either because no bytes remain or
    /// because an error is latched.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty() || self.error.is_some()
    }

    /// The latched error, if any. The error stays latched.
    pub fn take_error(&self) -> Option<Error> {
        self.error
    }

    /// Pass a value through if no error is latched.
    ///
    /// Useful to publish the result of a read only when that read succeeded.
    pub fn ok<T>(&self, value: T) -> Option<T> {
        match self.error {
            None => Some(value),
            Some(_) => None,
        }
    }

    /// Read a base-128 varint.
    ///
    /// Returns `0` on failure, latching [`Error::TruncatedInput`] if the input
    /// ends before the terminating byte, or [`Error::VarintOverflow`] after
    /// ten groups without one.
    pub fn decode_varint(&mut self) -> u64 {
        if self.error.is_some() {
            return 0;
        }

        let r = self.remaining;
        let mut value = 0;
        let mut shift = 0;

        for (i, &b) in r.iter().enumerate() {
            if shift >= VARINT_SHIFT_LIMIT {
                break;
            }

            value |= u64::from(b & 0x7F) << shift;

            if b & 0x80 == 0 {
                self.remaining = &r[i + 1..];
                return value;
            }

            shift += 7;
        }

        self.fail(if shift >= VARINT_SHIFT_LIMIT {
            Error::VarintOverflow
        } else {
            Error::TruncatedInput
        });

        0
    }

    /// Read a little-endian 32-bit value.
    pub fn read_fixed_u32(&mut self) -> u32 {
        self.read_fixed::<U32>().map_or(0, |v| v.get())
    }

    /// Read a little-endian 64-bit value.
    pub fn read_fixed_u64(&mut self) -> u64 {
        self.read_fixed::<U64>().map_or(0, |v| v.get())
    }

    /// Read a varint length, followed by that many bytes.
    ///
    /// Returns an empty slice on failure.
    pub fn read_length_delimited(&mut self) -> &'a [u8] {
        let len = self.decode_varint();

        if self.error.is_some() {
            return &[];
        }

        // A length beyond the address space cannot fit in the input either.
        let len = usize::try_from(len).unwrap_or(usize::MAX);

        match self.remaining.split_at_checked(len) {
            Some((data, rest)) => {
                self.remaining = rest;
                data
            }
            None => {
                self.fail(Error::TruncatedInput);
                &[]
            }
        }
    }

    fn read_fixed<T: FromBytes>(&mut self) -> Option<T> {
        if self.error.is_some() {
            return None;
        }

        match T::read_from_prefix(self.remaining) {
            Ok((value, rest)) => {
                self.remaining = rest;
                Some(value)
            }
            Err(_) => {
                self.fail(Error::TruncatedInput);
                None
            }
        }
    }

    /// Latch an error, keeping an earlier one if present.
    fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }
}
