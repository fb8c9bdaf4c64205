// SPDX-License-Identifier: LGPL-3.0-only

//! Cylindrical color spaces (HSV and HSL) and their conversions to 8-bit RGB.
//!
//! Hue is always expressed in degrees and normalized into `[0, 360)`.
//! Saturation, value and lightness are fractions in `[0, 1]`.

use crate::channel::Channel;

/// Normalize a hue in degrees into `[0, 360)`. Negative hues wrap around.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// A color in the HSV (hue, saturation, value) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value, `[0, 1]`.
    pub v: f64,
}

impl Hsv {
    /// Create a new HSV triple, normalizing the hue and clamping `s` and `v`.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> (Channel, Channel, Channel) {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// A color in the HSL (hue, saturation, lightness) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL triple, normalizing the hue and clamping `s` and `l`.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(self) -> (Channel, Channel, Channel) {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// Convert HSV to 8-bit RGB.
///
/// The hue circle is split into six 60° sectors. Each channel is rounded to
/// the nearest byte (half away from zero) and clamped.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (Channel, Channel, Channel) {
    let h = normalize_hue(h);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let position = h / 60.0;
    let sector = (position.floor() as usize).min(5);
    let f = position - sector as f64;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        Channel::from_unit(r),
        Channel::from_unit(g),
        Channel::from_unit(b),
    )
}

/// Hue in degrees from normalized RGB and its extrema. Reports 0 for grays.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    normalize_hue(h)
}

/// Convert 8-bit RGB to HSV. Grays report a hue of 0 and a saturation of 0.
pub fn rgb_to_hsv(r: Channel, g: Channel, b: Channel) -> Hsv {
    let (r, g, b) = (r.unit(), g.unit(), b.unit());
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: hue_of(r, g, b, max, delta),
        s,
        v: max,
    }
}

/// Convert 8-bit RGB to HSL. Grays report a hue of 0 and a saturation of 0.
pub fn rgb_to_hsl(r: Channel, g: Channel, b: Channel) -> Hsl {
    let (r, g, b) = (r.unit(), g.unit(), b.unit());
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h: hue_of(r, g, b, max, delta),
        s: s.clamp(0.0, 1.0),
        l,
    }
}

/// Convert HSL to 8-bit RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (Channel, Channel, Channel) {
    let h = normalize_hue(h);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0).floor() as usize {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        Channel::from_unit(r + m),
        Channel::from_unit(g + m),
        Channel::from_unit(b + m),
    )
}
