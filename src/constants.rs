//! Wire tokens and default decoder limits.
//!
//! The limits are deliberately generous for `.torrent` files and tracker
//! responses while still bounding what a hostile input can make the decoder
//! allocate or recurse into.

// ============================================================================
// Wire tokens
// ============================================================================

/// Starts an integer: `i<digits>e`.
pub const TOKEN_INTEGER: u8 = b'i';

/// Starts a list: `l<values>e`.
pub const TOKEN_LIST: u8 = b'l';

/// Starts a dictionary: `d<key><value>...e`.
pub const TOKEN_DICT: u8 = b'd';

/// Terminates integers, lists and dictionaries.
pub const TOKEN_END: u8 = b'e';

/// Separates a byte string's length prefix from its payload.
pub const TOKEN_SEPARATOR: u8 = b':';

/// Sign of a negative integer.
pub const TOKEN_MINUS: u8 = b'-';

// ============================================================================
// Decoder limits
// ============================================================================

/// Default maximum container nesting (a top-level list is depth 1).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum number of digits in a byte string length prefix.
pub const DEFAULT_MAX_LENGTH_DIGITS: usize = 10;

/// Default maximum declared byte string length (64 MiB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 64 * 1024 * 1024;

/// Default maximum number of digits in an integer literal, sign excluded.
pub const DEFAULT_MAX_INTEGER_DIGITS: usize = 256;
