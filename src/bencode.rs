//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. Every value has exactly one valid encoding, and this module
//! holds input to that standard: non-canonical bytes are rejected rather than
//! repaired, so `encode(decode(bytes)?) == bytes` for everything that decodes.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbencode::bencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Building and encoding values
//!
//! ```
//! use rbencode::bencode::{encode, Value};
//!
//! let info = Value::dict([
//!     ("name", Value::string("example.txt")),
//!     ("length", Value::integer(1024)),
//!     ("piece length", Value::integer(16384)),
//! ]);
//! let torrent = Value::dict([
//!     ("info", info),
//!     ("announce", Value::string("http://tracker.example.com/announce")),
//! ]);
//!
//! let encoded = encode(&torrent);
//! assert!(encoded.starts_with(b"d8:announce"));
//! ```
//!
//! # Error Handling
//!
//! Every decode failure is a [`BencodeError`] carrying an [`ErrorKind`] and the
//! byte offset where it was detected:
//!
//! - [`ErrorKind::UnexpectedEnd`] - Input ended unexpectedly
//! - [`ErrorKind::InvalidLeadingZero`] / [`ErrorKind::InvalidNegativeZero`] - Non-canonical numbers
//! - [`ErrorKind::UnsortedKeys`] / [`ErrorKind::DuplicateKey`] - Non-canonical dictionaries
//! - [`ErrorKind::DepthExceeded`] / [`ErrorKind::LengthTooLarge`] - Configured limits exceeded
//! - [`ErrorKind::TrailingData`] - Extra data after the value
//!
//! ```
//! use rbencode::bencode::{decode, ErrorKind};
//!
//! let err = decode(b"d4:spam4:eggs3:cow3:mooe").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsortedKeys);
//! assert_eq!(err.offset(), 13);
//! assert_eq!(err.to_string(), "malformed bencode at byte 13: dictionary keys out of order");
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod options;
mod value;

pub use decode::{
    decode, decode_bytes, decode_dict, decode_integer, decode_list, decode_str,
    decode_with_options, peek_kind, Decoder,
};
pub use encode::{encode, encode_to};
pub use error::{BencodeError, ErrorKind};
pub use options::DecodeOptions;
pub use value::{Dict, Kind, Value};
