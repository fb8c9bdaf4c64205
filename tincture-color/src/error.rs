// SPDX-License-Identifier: LGPL-3.0-only

//! Color parsing and validation errors.

use thiserror::Error;

/// Errors that can occur when parsing or validating colors.
///
/// Every variant keeps the name of the offending parameter (or grammar) and
/// the raw input so callers can report exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The text does not match any supported color grammar.
    #[error("Invalid color format for {param}: {input:?}")]
    InvalidFormat {
        /// The parameter or grammar that was being parsed.
        param: String,
        /// The raw input.
        input: String,
    },

    /// A channel, alpha, hue, saturation or value lies outside its domain.
    #[error("Value out of range for {param}: {input:?}")]
    OutOfRange {
        /// The parameter that was out of range.
        param: String,
        /// The raw input.
        input: String,
    },

    /// A named color lookup failed.
    #[error("Unknown color name: {input:?}")]
    UnknownName {
        /// The raw input.
        input: String,
    },

    /// A hex string has a digit count other than 3, 4, 6 or 8.
    #[error("Unsupported hex length {len} for {param}: {input:?}")]
    UnsupportedLength {
        /// The parameter that was being parsed.
        param: String,
        /// The raw input.
        input: String,
        /// The number of hex digits found.
        len: usize,
    },
}

/// Result type alias for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

impl ColorError {
    /// Create an invalid format error.
    pub fn invalid_format(param: impl Into<String>, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            param: param.into(),
            input: input.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(param: impl Into<String>, input: impl Into<String>) -> Self {
        Self::OutOfRange {
            param: param.into(),
            input: input.into(),
        }
    }

    /// Create an unknown name error.
    pub fn unknown_name(input: impl Into<String>) -> Self {
        Self::UnknownName {
            input: input.into(),
        }
    }

    /// Create an unsupported length error.
    pub fn unsupported_length(param: impl Into<String>, input: impl Into<String>, len: usize) -> Self {
        Self::UnsupportedLength {
            param: param.into(),
            input: input.into(),
            len,
        }
    }

    /// The raw input that caused the error.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. }
            | Self::OutOfRange { input, .. }
            | Self::UnknownName { input }
            | Self::UnsupportedLength { input, .. } => input,
        }
    }
}
