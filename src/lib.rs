//! rbencode - strict Bencode for BitTorrent
//!
//! This library converts between bencoded bytes and an in-memory [`Value`]
//! tree. Decoding accepts only canonical input and reports every rejection
//! with the byte offset where it was detected; encoding always produces
//! canonical output.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode value model, decoder and encoder
//! - [`constants`] - Wire tokens and default decoder limits
//!
//! # Example
//!
//! ```
//! use rbencode::{decode, encode};
//!
//! let input = b"d3:cow3:moo4:spam4:eggse";
//! let value = decode(input).unwrap();
//! assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
//! assert_eq!(encode(&value), input);
//! ```

pub mod bencode;
pub mod constants;

pub use bencode::{
    decode, decode_with_options, encode, encode_to, BencodeError, DecodeOptions, Decoder, Dict,
    ErrorKind, Kind, Value,
};
