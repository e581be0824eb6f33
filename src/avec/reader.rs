//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use super::{DecodedMessage, Options};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes read are not a valid message.
    #[error("Invalid message: {0}")]
    Decode(#[from] crate::sans::Error),
}

/// Read a reader to its end, then decode the bytes read as one message.
///
/// This method is also re-exported as `freewheel::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, options: &Options) -> Result<DecodedMessage, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    Ok(super::decode_with(&buf, options)?)
}
