// SPDX-License-Identifier: LGPL-3.0-only

//! The immutable four-channel [Color] value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::channel::Channel;
use crate::error::ColorError;
use crate::space::{rgb_to_hsl, rgb_to_hsv, Hsl, Hsv};

/// An immutable RGBA color with 8-bit channels.
///
/// Equality and ordering are lexicographic over the bytes in R, G, B, A
/// order. The canonical text form is `#RRGGBBAA` (uppercase, 8 digits),
/// produced by [Color::to_hex] and by the [Display](fmt::Display) impl.
///
/// Every transform returns a new color.
///
/// ```rust
/// use tincture_color::Color;
///
/// let teal = Color::parse("#0F8").unwrap();
/// assert_eq!(teal.to_hex(), "#00FF88FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Channel,
    g: Channel,
    b: Channel,
    a: Channel,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);

    /// Create a color from four channels.
    pub const fn new(r: Channel, g: Channel, b: Channel, a: Channel) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit channels with alpha.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: Channel::new(r),
            g: Channel::new(g),
            b: Channel::new(b),
            a: Channel::new(a),
        }
    }

    /// Create an opaque color from HSV (hue in degrees, `s` and `v` in `[0, 1]`).
    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = hsv.to_rgb();
        Self::new(r, g, b, Channel::MAX)
    }

    /// Create an opaque color from HSL (hue in degrees, `s` and `l` in `[0, 1]`).
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Self::new(r, g, b, Channel::MAX)
    }

    /// The red channel.
    pub const fn r(self) -> Channel {
        self.r
    }

    /// The green channel.
    pub const fn g(self) -> Channel {
        self.g
    }

    /// The blue channel.
    pub const fn b(self) -> Channel {
        self.b
    }

    /// The alpha channel.
    pub const fn a(self) -> Channel {
        self.a
    }

    /// The channels as bytes in R, G, B, A order.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r.value(), self.g.value(), self.b.value(), self.a.value()]
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f64(self) -> f64 {
        self.a.unit()
    }

    /// Return a copy with the given alpha channel.
    pub const fn with_alpha(self, a: Channel) -> Self {
        Self { a, ..self }
    }

    /// Return a copy with alpha set from a fraction in `[0, 1]`.
    pub fn with_alpha_f64(self, alpha: f64) -> Self {
        self.with_alpha(Channel::from_unit(alpha))
    }

    /// Whether alpha is zero.
    pub const fn is_transparent(self) -> bool {
        self.a.value() == 0
    }

    /// Whether alpha is 255.
    pub const fn is_opaque(self) -> bool {
        self.a.value() == 255
    }

    /// Convert to HSV. Alpha is dropped.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Convert to HSL. Alpha is dropped.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// The canonical `#RRGGBBAA` form.
    pub fn to_hex(self) -> String {
        format!("#{}{}{}{}", self.r, self.g, self.b, self.a)
    }

    /// The CSS `rgba(r, g, b, a)` functional form.
    pub fn to_css_rgba(self) -> String {
        let alpha = (self.alpha_f64() * 1000.0).round() / 1000.0;
        format!(
            "rgba({}, {}, {}, {})",
            self.r.value(),
            self.g.value(),
            self.b.value(),
            alpha
        )
    }

    /// Linear blend towards `other` by `t` (clamped to `[0, 1]`), per channel.
    pub fn mix(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: Channel, b: Channel| {
            Channel::from_f64(f64::from(a.value()) + (f64::from(b.value()) - f64::from(a.value())) * t)
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}{}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(Error::custom)
    }
}
