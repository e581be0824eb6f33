#![no_std]

//! A schema-less decoder for Protocol Buffers messages.
//!
//! Freewheel turns an encoded message into a generic value tree without its
//! `.proto` definition. Since the wire format does not say whether a
//! length-delimited payload is a string, a byte blob or an embedded message,
//! the decoder guesses: it first tries the payload as a nested message, then
//! as UTF-8 text, and falls back to opaque bytes. The guess is best-effort.
//! Short strings that happen to form valid field keys come back as messages.
//!
//! Most users should begin with [`decode`], or [`decode_with`] when decoding
//! untrusted input (see [`Options::max_depth`]). Applications needing the raw
//! field stream can implement [`avec::FromFields`] or drive the cursor in the
//! [`sans`] module directly.
//!
//! Groups (wire types 3 and 4) are deprecated and not supported. Decoding a
//! message containing one fails with [`Error::GroupsUnsupported`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod sans;

pub use avec::{DecodedMessage, FieldValue, Options, decode, decode_with};
pub use sans::Error;
