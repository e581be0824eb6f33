//! Field keys.

use tartan_bitfield::bitfield;
use zerocopy::TryFromBytes;

use super::Error;

/// How the value following a field key is encoded.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum WireType {
    /// `int32`, `int64`, `uint32`, `uint64`, `sint32`, `sint64`, `bool`, `enum`
    Varint = 0,
    /// `fixed64`, `sfixed64`, `double`
    Fixed64 = 1,
    /// `string`, `bytes`, embedded messages, packed repeated fields
    LengthDelimited = 2,
    /// Group start (deprecated).
    StartGroup = 3,
    /// Group end (deprecated).
    EndGroup = 4,
    /// `fixed32`, `sfixed32`, `float`
    Fixed32 = 5,
}

/// Split a field key into its field number and wire type.
///
/// Fails with [`Error::UnknownWireType`] for wire types 6 and 7. Field numbers
/// are not range-checked.
pub fn split(key: u64) -> Result<(u64, WireType), Error> {
    bitfield! {
        struct Key(u64) {
            [0..3] wire_type: u8,
        }
    }

    let bits = Key(key).wire_type();

    let wire_type: Result<WireType, _> = zerocopy::try_transmute!(bits);
    let wire_type = wire_type.map_err(|_| Error::UnknownWireType(bits))?;

    Ok((key >> 3, wire_type))
}
