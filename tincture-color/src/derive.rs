// SPDX-License-Identifier: LGPL-3.0-only

//! Pure, total derivations that produce new colors from a base color.
//!
//! Lightness and saturation adjustments happen in HSL and keep the alpha
//! channel. Interaction-state shifts and elevations lighten by fixed deltas.
//! [Color::shift_from_pole] applies the same deltas towards the middle of the
//! lightness range instead, for surfaces already close to white.

use crate::color::Color;
use crate::contrast::contrast_ratio;
use crate::space::{Hsl, Hsv};

/// Lightness delta for the hovered state.
pub const HOVERED_DELTA: f64 = 0.06;
/// Lightness delta for the focused state.
pub const FOCUSED_DELTA: f64 = 0.10;
/// Lightness delta for the pressed state.
pub const PRESSED_DELTA: f64 = 0.14;
/// Lightness delta for the dragged state.
pub const DRAGGED_DELTA: f64 = 0.18;
/// Saturation removed for the disabled state.
pub const DISABLED_DESATURATION: f64 = 0.6;
/// Hue rotation in degrees for visited links.
pub const VISITED_HUE_SHIFT: f64 = 60.0;

/// Surface elevation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elevation {
    /// First level, delta 0.04.
    Level1,
    /// Second level, delta 0.08.
    Level2,
    /// Third level, delta 0.12.
    Level3,
    /// Fourth level, delta 0.16.
    Level4,
    /// Fifth level, delta 0.20.
    Level5,
}

impl Elevation {
    /// All levels, lowest first.
    pub const ALL: [Elevation; 5] = [
        Elevation::Level1,
        Elevation::Level2,
        Elevation::Level3,
        Elevation::Level4,
        Elevation::Level5,
    ];

    /// The lightness delta of this level.
    pub fn delta(self) -> f64 {
        match self {
            Elevation::Level1 => 0.04,
            Elevation::Level2 => 0.08,
            Elevation::Level3 => 0.12,
            Elevation::Level4 => 0.16,
            Elevation::Level5 => 0.20,
        }
    }
}

impl Color {
    fn map_hsl(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Color::from_hsl(f(self.to_hsl())).with_alpha(self.a())
    }

    /// Increase HSL lightness by `amount` (clamped).
    pub fn lighten(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl::new(hsl.h, hsl.s, hsl.l + amount))
    }

    /// Decrease HSL lightness by `amount` (clamped).
    pub fn darken(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl::new(hsl.h, hsl.s, hsl.l - amount))
    }

    /// Decrease HSL saturation by `amount` (clamped).
    pub fn desaturate(self, amount: f64) -> Self {
        self.map_hsl(|hsl| Hsl::new(hsl.h, hsl.s - amount, hsl.l))
    }

    /// Rotate the hue by `degrees`.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        self.map_hsl(|hsl| Hsl::new(hsl.h + degrees, hsl.s, hsl.l))
    }

    /// Replace the HSL lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        self.map_hsl(|hsl| Hsl::new(hsl.h, hsl.s, l))
    }

    /// Move lightness by `delta` away from the nearer pole: lighter below
    /// 0.5, darker above it.
    pub fn shift_from_pole(self, delta: f64) -> Self {
        if self.to_hsl().l > 0.5 {
            self.darken(delta)
        } else {
            self.lighten(delta)
        }
    }

    /// Black or white, whichever contrasts more with this color.
    pub fn to_foreground(self) -> Self {
        if contrast_ratio(Color::BLACK, self) >= contrast_ratio(Color::WHITE, self) {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// The complementary color: HSV hue rotated by 180°.
    pub fn to_accent(self) -> Self {
        let hsv = self.to_hsv();
        Color::from_hsv(Hsv::new(hsv.h + 180.0, hsv.s, hsv.v)).with_alpha(self.a())
    }

    /// The disabled variant: saturation reduced by 0.6.
    pub fn to_disabled(self) -> Self {
        self.desaturate(DISABLED_DESATURATION)
    }

    /// The surface color raised to `level`: lightened by the level's delta.
    pub fn to_elevation(self, level: Elevation) -> Self {
        self.lighten(level.delta())
    }

    /// The hovered variant: lightened by [HOVERED_DELTA].
    pub fn to_hovered(self) -> Self {
        self.lighten(HOVERED_DELTA)
    }

    /// The focused variant: lightened by [FOCUSED_DELTA].
    pub fn to_focused(self) -> Self {
        self.lighten(FOCUSED_DELTA)
    }

    /// The pressed variant: lightened by [PRESSED_DELTA].
    pub fn to_pressed(self) -> Self {
        self.lighten(PRESSED_DELTA)
    }

    /// The dragged variant: lightened by [DRAGGED_DELTA].
    pub fn to_dragged(self) -> Self {
        self.lighten(DRAGGED_DELTA)
    }

    /// The visited variant: hue rotated by 60°.
    pub fn to_visited(self) -> Self {
        self.rotate_hue(VISITED_HUE_SHIFT)
    }

    /// See [crate::contrast::ensure_contrast].
    pub fn ensure_contrast(self, background: Color, minimum_ratio: f64) -> Self {
        crate::contrast::ensure_contrast(self, background, minimum_ratio)
    }
}
