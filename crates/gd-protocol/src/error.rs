//! Errors produced by the codec.
//!
//! Decoding and encoding fail independently:
//! - [`DecodeError`] for server responses that do not fit the format,
//! - [`EncodeError`] for request parameters that violate the encoder's
//!   preconditions.
//!
//! A sentinel "no results" body is not an error and never shows up here.

use gd_core::UnknownCode;
use thiserror::Error;

/// Errors raised while turning a response into entities.
///
/// Every variant carries the raw text of the offending row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Wrong token count, missing mandatory field, or unparsable value.
    #[error("malformed row ({reason}): {row:?}")]
    MalformedRow { row: String, reason: String },

    /// A code or ordinal with no matching variant.
    #[error("field `{field}` out of range: {source}; row: {row:?}")]
    OutOfRangeEnumCode {
        row: String,
        field: &'static str,
        #[source]
        source: UnknownCode,
    },
}

impl DecodeError {
    pub fn malformed(row: &str, reason: impl Into<String>) -> Self {
        DecodeError::MalformedRow {
            row: row.to_string(),
            reason: reason.into(),
        }
    }

    /// Raw text of the row that failed.
    pub fn row(&self) -> &str {
        match self {
            DecodeError::MalformedRow { row, .. } => row,
            DecodeError::OutOfRangeEnumCode { row, .. } => row,
        }
    }
}

/// Precondition violations in the request encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Parameter names must be non-empty and free of `&`, `=` and whitespace.
    #[error("invalid parameter name {0:?}")]
    InvalidName(String),

    /// Plain (unencoded) values must not contain `&`, `+`, whitespace or control characters.
    #[error("parameter `{name}` has a value that needs encoding: {value:?}")]
    InvalidPlainValue { name: String, value: String },

    /// The endpoint requires authentication but no identity was supplied.
    #[error("{path} requires an authenticated identity")]
    MissingIdentity { path: String },
}

/// Errors from the base64/XOR text ciphers.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid UTF-8 after decoding: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
