//! Slice-based decoder implementation.

use crate::sans::{
    Cursor, Error,
    tag::{self, WireType},
};

use super::FromFields;

/// Decode the fields of a message from a slice, publishing to a receiver.
///
/// This method is also re-exported as `freewheel::avec::decode_slice`.
///
/// Decoding stops at the first error. The receiver may already hold values
/// published before it.
pub fn decode(r: &[u8], o: &mut impl FromFields) -> Result<(), Error> {
    let mut c = Cursor::new(r);

    while !c.is_exhausted() {
        let key = c.decode_varint();
        let Some(key) = c.ok(key) else {
            break;
        };

        let (field, wire_type) = tag::split(key)?;

        match wire_type {
            WireType::Varint => {
                let v = c.decode_varint();
                if let Some(v) = c.ok(v) {
                    o.add_varint(field, v);
                }
            }
            WireType::Fixed64 => {
                let v = c.read_fixed_u64();
                if let Some(v) = c.ok(v) {
                    o.add_fixed64(field, v);
                }
            }
            WireType::LengthDelimited => {
                let v = c.read_length_delimited();
                if let Some(v) = c.ok(v) {
                    o.add_length_delimited(field, v);
                }
            }
            WireType::Fixed32 => {
                let v = c.read_fixed_u32();
                if let Some(v) = c.ok(v) {
                    o.add_fixed32(field, v);
                }
            }
            WireType::StartGroup | WireType::EndGroup => Err(Error::GroupsUnsupported)?,
        }
    }

    match c.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
