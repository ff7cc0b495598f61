//! Common Encoding/Decoding Utilities
//!
//! Error types shared by the encoder and the decoder.
//!
//! ## See Also
//!
//! - [`encoder`](super::encoder/index.html): Integer to Lehmer code
//! - [`decoder`](super::decoder/index.html): Lehmer code to integer

use std::fmt;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value cannot be encoded (negative, or not an integer)
    InvalidInput(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The digit sequence cannot be decoded (empty, negative digit, bad text)
    InvalidInput(String),
    /// The decoded value does not fit the requested fixed-width type
    Overflow,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DecodeError::Overflow => write!(f, "Decoded value overflows the target type"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;
