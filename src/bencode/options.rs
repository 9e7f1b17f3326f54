use crate::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_INTEGER_DIGITS, DEFAULT_MAX_LENGTH_DIGITS,
    DEFAULT_MAX_STRING_LENGTH,
};

/// Limits and policy applied while decoding.
///
/// Every limit is checked before the decoder allocates or recurses, so a
/// hostile length prefix or nesting depth fails fast instead of exhausting
/// memory or the stack.
///
/// # Examples
///
/// ```
/// use rbencode::bencode::{decode_with_options, DecodeOptions, ErrorKind};
///
/// let options = DecodeOptions::new().max_depth(2);
/// assert!(decode_with_options(b"llee", &options).is_ok());
///
/// let err = decode_with_options(b"llleee", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DepthExceeded);
/// assert_eq!(err.offset(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum container nesting.
    pub max_depth: usize,
    /// Maximum digits in a byte string length prefix.
    pub max_length_digits: usize,
    /// Maximum declared byte string length.
    pub max_string_length: usize,
    /// Maximum digits in an integer literal, sign excluded.
    pub max_integer_digits: usize,
    /// Accept out-of-order dictionary keys.
    pub lenient_key_order: bool,
}

impl DecodeOptions {
    /// Creates options with the default limits and strict key ordering.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length_digits: DEFAULT_MAX_LENGTH_DIGITS,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_integer_digits: DEFAULT_MAX_INTEGER_DIGITS,
            lenient_key_order: false,
        }
    }

    /// Maximum container nesting. A top-level list or dictionary is depth 1,
    /// so `0` rejects every container.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Maximum number of digits in a byte string length prefix.
    pub fn max_length_digits(mut self, digits: usize) -> Self {
        self.max_length_digits = digits;
        self
    }

    /// Maximum declared byte string length.
    pub fn max_string_length(mut self, len: usize) -> Self {
        self.max_string_length = len;
        self
    }

    /// Maximum number of digits in an integer literal, not counting the sign.
    pub fn max_integer_digits(mut self, digits: usize) -> Self {
        self.max_integer_digits = digits;
        self
    }

    /// Accept dictionaries whose keys are not in ascending order.
    ///
    /// Out-of-order keys are stored sorted, so re-encoding yields canonical
    /// bytes that differ from the input. Repeated keys are rejected either way.
    ///
    /// ```
    /// use rbencode::bencode::{decode_with_options, encode, DecodeOptions};
    ///
    /// let options = DecodeOptions::new().lenient_key_order(true);
    /// let value = decode_with_options(b"d4:spam4:eggs3:cow3:mooe", &options).unwrap();
    /// assert_eq!(encode(&value), b"d3:cow3:moo4:spam4:eggse");
    /// ```
    pub fn lenient_key_order(mut self, lenient: bool) -> Self {
        self.lenient_key_order = lenient;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
