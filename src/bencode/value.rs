use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{TOKEN_DICT, TOKEN_INTEGER, TOKEN_LIST};

/// A bencode dictionary: byte string keys in ascending raw byte order.
pub type Dict = BTreeMap<Bytes, Value>;

/// A bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and dictionaries.
/// Integers are arbitrary precision, so any literal the wire format allows is
/// represented exactly. Dictionary keys are kept sorted by raw bytes, which is
/// the order the encoder emits them in.
///
/// # Examples
///
/// ```
/// use rbencode::bencode::Value;
///
/// // Creating values directly
/// let int = Value::integer(42);
/// let string = Value::string("hello");
/// let list = Value::list([Value::integer(1), Value::integer(2)]);
///
/// // Using From implementations
/// let int2: Value = 42i64.into();
/// let string2: Value = "hello".into();
///
/// // Accessing values
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// assert_eq!(int, int2);
/// assert_eq!(string, string2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An arbitrary precision signed integer.
    Integer(BigInt),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, sorted by key.
    Dict(Dict),
}

/// The four kinds of bencode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Bytes,
    List,
    Dict,
}

impl Kind {
    /// Classifies the byte a value starts with.
    ///
    /// Returns `None` for bytes that cannot start any production.
    ///
    /// ```
    /// use rbencode::bencode::Kind;
    ///
    /// assert_eq!(Kind::from_token(b'i'), Some(Kind::Integer));
    /// assert_eq!(Kind::from_token(b'7'), Some(Kind::Bytes));
    /// assert_eq!(Kind::from_token(b'x'), None);
    /// ```
    pub fn from_token(token: u8) -> Option<Kind> {
        match token {
            TOKEN_INTEGER => Some(Kind::Integer),
            TOKEN_LIST => Some(Kind::List),
            TOKEN_DICT => Some(Kind::Dict),
            b'0'..=b'9' => Some(Kind::Bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Bytes => "byte string",
            Kind::List => "list",
            Kind::Dict => "dictionary",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates an integer value.
    pub fn integer(i: impl Into<BigInt>) -> Self {
        Value::Integer(i.into())
    }

    /// Creates a byte string value from raw bytes.
    pub fn bytes(b: impl Into<Bytes>) -> Self {
        Value::Bytes(b.into())
    }

    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::bencode::Value;
    ///
    /// let value = Value::string("hello");
    /// assert_eq!(value.as_str(), Some("hello"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Creates a list value, preserving the iteration order.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Creates a dictionary value.
    ///
    /// Entries are stored in ascending key order regardless of the order they
    /// are supplied in. A key that appears more than once keeps the value it
    /// was given last.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::bencode::{encode, Value};
    ///
    /// let dict = Value::dict([
    ///     ("spam", Value::string("eggs")),
    ///     ("cow", Value::string("moo")),
    ///     ("spam", Value::string("ham")),
    /// ]);
    /// assert_eq!(encode(&dict), b"d3:cow3:moo4:spam3:hame");
    /// ```
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<Bytes>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns which of the four kinds this value is.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Bytes(_) => Kind::Bytes,
            Value::List(_) => Kind::List,
            Value::Dict(_) => Kind::Dict,
        }
    }

    /// Returns the value as an `i64`, if it is an integer that fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::bencode::{decode, Value};
    ///
    /// let int = Value::integer(42);
    /// assert_eq!(int.as_integer(), Some(42));
    ///
    /// let huge = decode(b"i99999999999999999999999e").unwrap();
    /// assert_eq!(huge.as_integer(), None);
    /// assert!(huge.as_bigint().is_some());
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        self.as_bigint()?.to_i64()
    }

    /// Returns the full precision integer, if this is an integer.
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a valid UTF-8 byte string.
    ///
    /// Returns `None` if the value is not a byte string or if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the integer, if it is one.
    pub fn into_bigint(self) -> Option<BigInt> {
        match self {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Consumes the value and returns the byte string, if it is one.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Consumes the value and returns the list, if it is one.
    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// This avoids cloning the dictionary when you need ownership.
    pub fn into_dict(self) -> Option<Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or if the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbencode::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Length in bytes of this value's canonical encoding.
    ///
    /// ```
    /// use rbencode::bencode::{encode, decode};
    ///
    /// let value = decode(b"d3:cow3:moo4:spaml1:ai-7eee").unwrap();
    /// assert_eq!(value.encoded_len(), encode(&value).len());
    /// ```
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Integer(i) => 2 + integer_text_len(i),
            Value::Bytes(b) => byte_string_len(b),
            Value::List(l) => 2 + l.iter().map(Value::encoded_len).sum::<usize>(),
            Value::Dict(d) => {
                2 + d
                    .iter()
                    .map(|(k, v)| byte_string_len(k) + v.encoded_len())
                    .sum::<usize>()
            }
        }
    }
}

fn byte_string_len(b: &[u8]) -> usize {
    decimal_len(b.len() as u64) + 1 + b.len()
}

/// Integers beyond `i64` are rendered to measure them; everything else is
/// counted arithmetically.
fn integer_text_len(i: &BigInt) -> usize {
    match i.to_i64() {
        Some(n) => decimal_len(n.unsigned_abs()) + usize::from(n < 0),
        None => i.to_string().len(),
    }
}

fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Value::Integer(i.into())
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(b))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}
