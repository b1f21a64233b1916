/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the FixQuote decoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FixQuote operations.

use thiserror::Error;

/// Result type alias using [`FixError`] as the error type.
pub type Result<T> = std::result::Result<T, FixError>;

/// Top-level error type for all FixQuote operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// I/O error from the underlying byte source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur during quote message decoding.
///
/// [`DecodeError::EndOfStream`] is not a failure: it signals the normal
/// completion of message iteration over an exhausted source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte source is exhausted; no further messages follow.
    #[error("end of stream")]
    EndOfStream,

    /// The checksum trailer is absent or malformed at the expected position.
    #[error("missing checksum trailer (tag 10)")]
    MissingChecksum,

    /// Checksum mismatch between calculated and declared values.
    #[error("checksum mismatch: calculated {calculated:03}, declared {declared:03}")]
    ChecksumMismatch {
        /// Calculated checksum value.
        calculated: u8,
        /// Declared checksum value in the message trailer.
        declared: u8,
    },

    /// Invalid field value for the expected type.
    #[error("invalid field value for tag {tag}: {value:?}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// The raw text that failed to coerce.
        value: String,
    },

    /// An entry-group field landed outside the declared entry range.
    #[error("unexpected entry field (tag {tag}): {declared} entries declared")]
    UnexpectedEntry {
        /// The entry-group tag that violated the bounds.
        tag: u32,
        /// The entry count declared by the message, if any.
        declared: u64,
    },
}
