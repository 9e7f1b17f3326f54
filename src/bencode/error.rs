use thiserror::Error;

use super::value::Kind;

/// A decode failure together with the byte offset where it was detected.
///
/// Offsets are zero-based positions in the input buffer, so callers can
/// report "malformed input at byte N" without re-scanning the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed bencode at byte {offset}: {kind}")]
pub struct BencodeError {
    kind: ErrorKind,
    offset: usize,
}

impl BencodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Zero-based offset of the offending byte.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Input ended in the middle of a production.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// An integer or length field starts with a disallowed `0`.
    #[error("leading zero in numeric field")]
    InvalidLeadingZero,

    /// The integer literal is exactly `-0`.
    #[error("negative zero")]
    InvalidNegativeZero,

    /// A non-digit byte inside an integer or length field, or an empty field.
    #[error("malformed integer")]
    MalformedInteger,

    /// A declared length or digit count exceeds the configured maximum.
    #[error("length exceeds configured maximum")]
    LengthTooLarge,

    /// Containers nest deeper than the configured maximum.
    #[error("nesting exceeds configured maximum depth")]
    DepthExceeded,

    /// A dictionary key sorts before its predecessor.
    #[error("dictionary keys out of order")]
    UnsortedKeys,

    /// A dictionary key repeats an earlier key.
    #[error("duplicate dictionary key")]
    DuplicateKey,

    /// Bytes remain after a complete top-level value.
    #[error("trailing data after value")]
    TrailingData,

    /// A list or dictionary has no closing `e`.
    #[error("unterminated container")]
    UnterminatedContainer,

    /// A byte that cannot start the expected production.
    #[error("unexpected byte 0x{0:02x}")]
    UnexpectedToken(u8),

    /// A typed decode found a different kind of value.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: Kind,
        /// The kind the input contained.
        found: Kind,
    },

    /// A byte string requested as text is not valid UTF-8.
    #[error("byte string is not valid utf-8")]
    InvalidUtf8,
}
