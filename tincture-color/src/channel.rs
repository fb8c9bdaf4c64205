// SPDX-License-Identifier: LGPL-3.0-only

//! A single 8-bit color channel.

use std::fmt;

use crate::error::{ColorError, ColorResult};

/// One 8-bit color channel.
///
/// Equality and ordering are byte-exact. The canonical text form is two
/// uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Channel(u8);

impl Channel {
    /// The zero channel.
    pub const MIN: Self = Self(0);
    /// The full channel.
    pub const MAX: Self = Self(255);

    /// Create a channel from a byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The channel scaled to `[0, 1]`.
    pub fn unit(self) -> f64 {
        f64::from(self.0) / 255.0
    }

    /// Create a channel from a value in `[0, 1]`.
    ///
    /// Values are scaled to `[0, 255]`, rounded half away from zero and clamped.
    pub fn from_unit(value: f64) -> Self {
        Self::from_f64(value * 255.0)
    }

    /// Round a byte-scaled value half away from zero and clamp it to `[0, 255]`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        // f64::round rounds half away from zero.
        Self(value.round().clamp(0.0, 255.0) as u8)
    }

    /// Parse exactly two hex digits (case-insensitive).
    pub fn from_hex_pair(pair: &str) -> ColorResult<Self> {
        if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format("hex channel", pair));
        }
        u8::from_str_radix(pair, 16)
            .map(Self)
            .map_err(|_| ColorError::invalid_format("hex channel", pair))
    }

    /// Parse a single hex digit and expand it (`F` becomes `FF`).
    pub fn from_hex_digit(digit: char) -> ColorResult<Self> {
        let nibble = digit
            .to_digit(16)
            .ok_or_else(|| ColorError::invalid_format("hex channel", digit.to_string()))?;
        Ok(Self((nibble * 17) as u8))
    }

    /// The canonical two-digit uppercase hex form.
    pub fn to_hex(self) -> String {
        format!("{:02X}", self.0)
    }
}

impl From<u8> for Channel {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}
