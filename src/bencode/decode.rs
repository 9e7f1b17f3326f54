use bytes::Bytes;
use num_bigint::{BigInt, BigUint, Sign};
use std::cmp::Ordering;
use std::ops::Range;
use tracing::{debug, trace};

use super::error::{BencodeError, ErrorKind};
use super::options::DecodeOptions;
use super::value::{Dict, Kind, Value};
use crate::constants::{
    TOKEN_DICT, TOKEN_END, TOKEN_INTEGER, TOKEN_LIST, TOKEN_MINUS, TOKEN_SEPARATOR,
};

/// Decodes a complete bencode value using the default [`DecodeOptions`].
///
/// The whole input must be exactly one value; anything after it is rejected
/// with [`ErrorKind::TrailingData`].
///
/// # Examples
///
/// ```
/// use rbencode::bencode::{decode, ErrorKind, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::integer(42));
///
/// let err = decode(b"i42ex").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TrailingData);
/// assert_eq!(err.offset(), 4);
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::default().decode(data)
}

/// Decodes a complete bencode value with explicit limits.
pub fn decode_with_options(data: &[u8], options: &DecodeOptions) -> Result<Value, BencodeError> {
    Decoder::new(*options).decode(data)
}

/// Reports the kind of value `data` starts with, without decoding it.
///
/// ```
/// use rbencode::bencode::{peek_kind, ErrorKind, Kind};
///
/// assert_eq!(peek_kind(b"l4:spame").unwrap(), Kind::List);
/// assert_eq!(peek_kind(b"12:Hello World!").unwrap(), Kind::Bytes);
/// assert_eq!(peek_kind(b"").unwrap_err().kind(), ErrorKind::UnexpectedEnd);
/// ```
pub fn peek_kind(data: &[u8]) -> Result<Kind, BencodeError> {
    let token = *data
        .first()
        .ok_or(BencodeError::new(ErrorKind::UnexpectedEnd, 0))?;
    Kind::from_token(token).ok_or(BencodeError::new(ErrorKind::UnexpectedToken(token), 0))
}

/// Decodes an input that must be a single integer.
pub fn decode_integer(data: &[u8]) -> Result<BigInt, BencodeError> {
    Decoder::default().decode_integer(data)
}

/// Decodes an input that must be a single byte string.
pub fn decode_bytes(data: &[u8]) -> Result<Bytes, BencodeError> {
    Decoder::default().decode_bytes(data)
}

/// Decodes an input that must be a single UTF-8 byte string.
pub fn decode_str(data: &[u8]) -> Result<String, BencodeError> {
    Decoder::default().decode_str(data)
}

/// Decodes an input that must be a single list.
pub fn decode_list(data: &[u8]) -> Result<Vec<Value>, BencodeError> {
    Decoder::default().decode_list(data)
}

/// Decodes an input that must be a single dictionary.
pub fn decode_dict(data: &[u8]) -> Result<Dict, BencodeError> {
    Decoder::default().decode_dict(data)
}

/// A reusable decoder carrying a fixed set of [`DecodeOptions`].
///
/// Decoding keeps no state between calls, so one decoder can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use rbencode::bencode::{DecodeOptions, Decoder};
///
/// let decoder = Decoder::new(DecodeOptions::new().max_string_length(1024));
///
/// // Byte strings decoded from a shared buffer point into that buffer.
/// let input = Bytes::from_static(b"l4:spam4:eggse");
/// let value = decoder.decode_shared(&input).unwrap();
/// assert_eq!(value.as_list().unwrap()[1].as_str(), Some("eggs"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder that enforces `options` on every call.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The limits this decoder applies.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes `data`, copying byte string payloads out of it.
    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        self.run(data, None)
    }

    /// Decodes `data`, slicing byte string payloads out of the shared buffer
    /// instead of copying them.
    pub fn decode_shared(&self, data: &Bytes) -> Result<Value, BencodeError> {
        self.run(data, Some(data))
    }

    /// Decodes `data` and requires it to be an integer.
    pub fn decode_integer(&self, data: &[u8]) -> Result<BigInt, BencodeError> {
        self.decode_as(data, Kind::Integer, Value::into_bigint)
    }

    /// Decodes `data` and requires it to be a byte string.
    pub fn decode_bytes(&self, data: &[u8]) -> Result<Bytes, BencodeError> {
        self.decode_as(data, Kind::Bytes, Value::into_bytes)
    }

    /// Decodes a byte string and requires it to be valid UTF-8.
    ///
    /// ```
    /// use rbencode::bencode::{Decoder, ErrorKind};
    ///
    /// let decoder = Decoder::default();
    /// assert_eq!(decoder.decode_str("7:Garçon".as_bytes()).unwrap(), "Garçon");
    ///
    /// let err = decoder.decode_str(b"3:a\xffb").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
    /// assert_eq!(err.offset(), 3);
    /// ```
    pub fn decode_str(&self, data: &[u8]) -> Result<String, BencodeError> {
        let bytes = self.decode_bytes(data)?;
        match std::str::from_utf8(&bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(err) => {
                let payload_start = data.len() - bytes.len();
                Err(BencodeError::new(
                    ErrorKind::InvalidUtf8,
                    payload_start + err.valid_up_to(),
                ))
            }
        }
    }

    /// Decodes `data` and requires it to be a list.
    pub fn decode_list(&self, data: &[u8]) -> Result<Vec<Value>, BencodeError> {
        self.decode_as(data, Kind::List, Value::into_list)
    }

    /// Decodes `data` and requires it to be a dictionary.
    pub fn decode_dict(&self, data: &[u8]) -> Result<Dict, BencodeError> {
        self.decode_as(data, Kind::Dict, Value::into_dict)
    }

    fn decode_as<T>(
        &self,
        data: &[u8],
        expected: Kind,
        extract: fn(Value) -> Option<T>,
    ) -> Result<T, BencodeError> {
        let value = self.decode(data)?;
        let found = value.kind();
        extract(value).ok_or(BencodeError::new(
            ErrorKind::TypeMismatch { expected, found },
            0,
        ))
    }

    fn run(&self, data: &[u8], shared: Option<&Bytes>) -> Result<Value, BencodeError> {
        let mut parser = Parser {
            data,
            shared,
            pos: 0,
            options: &self.options,
        };

        parser.decode_document().map_err(|err| {
            trace!(kind = ?err.kind(), offset = err.offset(), "rejected bencode input");
            err
        })
    }
}

struct Parser<'a> {
    data: &'a [u8],
    shared: Option<&'a Bytes>,
    pos: usize,
    options: &'a DecodeOptions,
}

impl Parser<'_> {
    fn decode_document(&mut self) -> Result<Value, BencodeError> {
        let value = self.decode_value(0)?;

        if self.pos != self.data.len() {
            return Err(self.error(ErrorKind::TrailingData, self.pos));
        }

        Ok(value)
    }

    fn decode_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        match self.peek() {
            Some(TOKEN_INTEGER) => self.decode_integer().map(Value::Integer),
            Some(TOKEN_LIST) => self.decode_list(depth),
            Some(TOKEN_DICT) => self.decode_dict(depth),
            Some(b'0'..=b'9') => self.decode_bytes().map(Value::Bytes),
            Some(c) => Err(self.error(ErrorKind::UnexpectedToken(c), self.pos)),
            None => Err(self.eof()),
        }
    }

    fn decode_integer(&mut self) -> Result<BigInt, BencodeError> {
        self.pos += 1;

        let field_start = self.pos;
        let negative = self.peek() == Some(TOKEN_MINUS);
        if negative {
            self.pos += 1;
        }

        let digits = self.scan_digits(self.options.max_integer_digits, field_start)?;
        match self.peek() {
            Some(TOKEN_END) => {}
            Some(_) => return Err(self.error(ErrorKind::MalformedInteger, self.pos)),
            None => return Err(self.eof()),
        }

        if digits.is_empty() {
            return Err(self.error(ErrorKind::MalformedInteger, self.pos));
        }
        if self.data[digits.start] == b'0' {
            if digits.len() > 1 {
                return Err(self.error(ErrorKind::InvalidLeadingZero, field_start));
            }
            if negative {
                return Err(self.error(ErrorKind::InvalidNegativeZero, field_start));
            }
        }

        let magnitude = BigUint::parse_bytes(&self.data[digits], 10)
            .ok_or_else(|| self.error(ErrorKind::MalformedInteger, field_start))?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };

        self.pos += 1;
        Ok(BigInt::from_biguint(sign, magnitude))
    }

    fn decode_bytes(&mut self) -> Result<Bytes, BencodeError> {
        let field_start = self.pos;
        let digits = self.scan_digits(self.options.max_length_digits, field_start)?;
        match self.peek() {
            Some(TOKEN_SEPARATOR) => {}
            Some(_) => return Err(self.error(ErrorKind::MalformedInteger, self.pos)),
            None => return Err(self.eof()),
        }

        if digits.is_empty() {
            return Err(self.error(ErrorKind::MalformedInteger, self.pos));
        }
        if digits.len() > 1 && self.data[digits.start] == b'0' {
            return Err(self.error(ErrorKind::InvalidLeadingZero, field_start));
        }

        let len = parse_length(&self.data[digits])
            .filter(|&len| len <= self.options.max_string_length)
            .ok_or_else(|| self.error(ErrorKind::LengthTooLarge, field_start))?;

        self.pos += 1;
        let start = self.pos;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.eof())?;
        self.pos = end;

        Ok(match self.shared {
            Some(buf) => buf.slice(start..end),
            None => Bytes::copy_from_slice(&self.data[start..end]),
        })
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let open = self.pos;
        let depth = self.enter(depth)?;
        self.pos += 1;
        let mut list = Vec::new();

        loop {
            match self.peek() {
                Some(TOKEN_END) => break,
                Some(_) => list.push(self.decode_value(depth)?),
                None => return Err(self.error(ErrorKind::UnterminatedContainer, open)),
            }
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let open = self.pos;
        let depth = self.enter(depth)?;
        self.pos += 1;
        let mut dict = Dict::new();

        loop {
            let key_offset = self.pos;
            match self.peek() {
                Some(TOKEN_END) => break,
                Some(b'0'..=b'9') => {}
                Some(c) => return Err(self.error(ErrorKind::UnexpectedToken(c), key_offset)),
                None => return Err(self.error(ErrorKind::UnterminatedContainer, open)),
            }

            let key = self.decode_bytes()?;
            self.check_key_order(&dict, &key, key_offset)?;

            let value = self.decode_value(depth)?;
            dict.insert(key, value);
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }

    /// Keys must arrive strictly ascending. The last key in `dict` is the
    /// greatest seen so far, so one comparison covers both checks unless
    /// lenient ordering lets an earlier key through.
    fn check_key_order(&self, dict: &Dict, key: &Bytes, offset: usize) -> Result<(), BencodeError> {
        let Some((last, _)) = dict.last_key_value() else {
            return Ok(());
        };

        match key.cmp(last) {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(self.error(ErrorKind::DuplicateKey, offset)),
            Ordering::Less if self.options.lenient_key_order => {
                if dict.contains_key(key) {
                    return Err(self.error(ErrorKind::DuplicateKey, offset));
                }
                debug!(offset, "accepting out-of-order dictionary key");
                Ok(())
            }
            Ordering::Less => Err(self.error(ErrorKind::UnsortedKeys, offset)),
        }
    }

    /// Accounts for one more level of nesting at the current position.
    fn enter(&self, depth: usize) -> Result<usize, BencodeError> {
        if depth >= self.options.max_depth {
            return Err(self.error(ErrorKind::DepthExceeded, self.pos));
        }
        Ok(depth + 1)
    }

    /// Advances over a run of ASCII digits, failing once more than `limit`
    /// have been seen.
    fn scan_digits(&mut self, limit: usize, field_start: usize) -> Result<Range<usize>, BencodeError> {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            if self.pos - start >= limit {
                return Err(self.error(ErrorKind::LengthTooLarge, field_start));
            }
            self.pos += 1;
        }
        Ok(start..self.pos)
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn eof(&self) -> BencodeError {
        self.error(ErrorKind::UnexpectedEnd, self.data.len())
    }

    fn error(&self, kind: ErrorKind, offset: usize) -> BencodeError {
        BencodeError::new(kind, offset)
    }
}

fn parse_length(digits: &[u8]) -> Option<usize> {
    digits.iter().try_fold(0usize, |acc, &d| {
        acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
    })
}
