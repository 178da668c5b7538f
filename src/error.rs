//! Error taxonomy for the HIF codec.
//!
//! Hand-rolled, matching the teacher's `Lz4FError`/`Lz4Error`/
//! `BlockDecompressError` style: a plain enum implementing
//! `std::error::Error` + `Display` by hand, no `thiserror`. Precondition
//! violations (§7 of the spec — caller bugs such as `type > 4095` or an
//! empty attribute `lhs`/`rhs`) are *not* represented here: those are
//! `assert!`/`panic!` at the call site, never a `Result` variant.

use core::fmt;
use std::io;

/// Top-level error returned by session, codec, and identifier-table
/// operations that can fail for reasons outside the caller's control.
#[derive(Debug)]
pub enum Error {
    /// `open`/`read`/`write`/`mmap` failure, or a partial short write.
    Io(io::Error),
    /// A malformed on-wire encoding: bad category/class tag, out-of-range
    /// reference index, unbalanced tuple-entry pair, bad header.
    Format(FormatError),
    /// Directory-layout error: missing `.st`/`.id` pairing, mismatched
    /// stems, an unexpected file in the session directory.
    Directory(String),
    /// The session's identifier table would exceed the chunk-rotation
    /// threshold and rotation is not implemented (spec.md §4.4, §9: "Do
    /// not silently continue past the threshold").
    CapacityExceeded(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "hif: i/o error: {e}"),
            Error::Format(e) => write!(f, "hif: format error: {e}"),
            Error::Directory(msg) => write!(f, "hif: directory error: {msg}"),
            Error::CapacityExceeded(msg) => write!(f, "hif: session capacity exceeded: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Format(e) => Some(e),
            Error::Directory(_) => None,
            Error::CapacityExceeded(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

/// Format-level decode errors, kept distinct from [`Error`] so codec-level
/// unit tests can match on the precise cause without going through the
/// session-level wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Identifier-record category tag (byte 0 low 3 bits) outside `0..=4`.
    BadCategoryTag(u8),
    /// Statement class tag (header byte 0 high nibble) outside `0..=8`.
    BadClassTag(u8),
    /// A reference word decoded to an identifier index with no matching
    /// record in the resolver built from the `.id` file.
    ReferenceOutOfRange { index: u32, table_len: usize },
    /// A reference word pointed at the reserved terminator index (31),
    /// which the writer never assigns to a real identifier — a reference
    /// encoding this index in long form is malformed input, not a
    /// legitimate identifier lookup.
    ReservedIndexReferenced(u32),
    /// The `0xFF` terminator appeared while a non-terminal (lhs-only) half
    /// of a tuple-entry pair was still pending.
    UnbalancedPair,
    /// Two consecutive non-terminal references appeared with no
    /// terminal in between.
    DanglingNonTerminal,
    /// The mandatory first statement was missing, was not class `Attr`,
    /// did not carry exactly the three `HIF`/`tool`/`version` attributes
    /// in order, or carried an unsupported `HIF` version string.
    BadHeader(String),
    /// An identifier record's declared payload length ran past the end
    /// of the `.id` file.
    TruncatedIdentifierRecord,
    /// A statement's declared shape ran past the end of the `.st` file
    /// (missing io/attr terminator, truncated reference, truncated
    /// header).
    TruncatedStatement,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BadCategoryTag(t) => write!(f, "identifier category tag {t} out of range (expected 0..=4)"),
            FormatError::BadClassTag(t) => write!(f, "statement class tag {t} out of range (expected 0..=8)"),
            FormatError::ReferenceOutOfRange { index, table_len } => {
                write!(f, "reference index {index} out of range (identifier table has {table_len} entries)")
            }
            FormatError::ReservedIndexReferenced(index) => {
                write!(f, "reference index {index} is the reserved terminator index, never assigned to an identifier")
            }
            FormatError::UnbalancedPair => write!(f, "terminator sentinel with a non-terminal reference still pending"),
            FormatError::DanglingNonTerminal => write!(f, "two consecutive non-terminal references with no terminal between them"),
            FormatError::BadHeader(msg) => write!(f, "malformed or missing header statement: {msg}"),
            FormatError::TruncatedIdentifierRecord => write!(f, "identifier record payload runs past end of file"),
            FormatError::TruncatedStatement => write!(f, "statement encoding runs past end of file"),
        }
    }
}

impl std::error::Error for FormatError {}

pub type Result<T> = std::result::Result<T, Error>;
