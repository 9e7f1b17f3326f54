use bytes::BufMut;
use std::io::{self, Write};

use super::value::Value;
use crate::constants::{TOKEN_DICT, TOKEN_END, TOKEN_INTEGER, TOKEN_LIST, TOKEN_SEPARATOR};

/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted lexicographically)
///
/// Encoding cannot fail: every [`Value`] already satisfies the canonical
/// form, so the output is always accepted by [`decode`](super::decode).
///
/// # Examples
///
/// ```
/// use rbencode::bencode::{encode, Value};
///
/// // Encode an integer
/// assert_eq!(encode(&Value::integer(42)), b"i42e");
///
/// // Encode a string
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// // Encode a list
/// let list = Value::list([Value::integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Encode a dictionary
/// let dict = Value::dict([("b", Value::integer(2)), ("a", Value::integer(1))]);
/// assert_eq!(encode(&dict), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.encoded_len());
    encode_value(value, &mut buf);
    buf
}

/// Encodes a bencode value into any writer.
///
/// # Errors
///
/// Only the writer's own I/O errors are returned.
///
/// ```
/// use rbencode::bencode::{encode_to, Value};
///
/// let mut out = Vec::new();
/// encode_to(&Value::string("spam"), &mut out).unwrap();
/// assert_eq!(out, b"4:spam");
/// ```
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> io::Result<()> {
    writer.write_all(&encode(value))
}

fn encode_value<B: BufMut>(value: &Value, buf: &mut B) {
    match value {
        Value::Integer(i) => {
            buf.put_u8(TOKEN_INTEGER);
            buf.put_slice(i.to_string().as_bytes());
            buf.put_u8(TOKEN_END);
        }
        Value::Bytes(b) => put_byte_string(b, buf),
        Value::List(l) => {
            buf.put_u8(TOKEN_LIST);
            for item in l {
                encode_value(item, buf);
            }
            buf.put_u8(TOKEN_END);
        }
        Value::Dict(d) => {
            buf.put_u8(TOKEN_DICT);
            for (key, val) in d {
                put_byte_string(key, buf);
                encode_value(val, buf);
            }
            buf.put_u8(TOKEN_END);
        }
    }
}

fn put_byte_string<B: BufMut>(b: &[u8], buf: &mut B) {
    buf.put_slice(b.len().to_string().as_bytes());
    buf.put_u8(TOKEN_SEPARATOR);
    buf.put_slice(b);
}
