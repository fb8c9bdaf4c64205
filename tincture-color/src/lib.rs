// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # Tincture Color Model
//!
//! Immutable RGBA colors with exact 8-bit channel arithmetic, text parsing,
//! HSV/HSL conversion, named color tables and the WCAG contrast engine used
//! by `tincture-theme` to keep foreground roles readable.
//!
//! ## Parsing
//!
//! ```rust
//! use tincture_color::Color;
//!
//! assert_eq!(Color::parse("#0F8").unwrap().to_hex(), "#00FF88FF");
//! assert_eq!(Color::parse("hsv(210, 100%, 100%)").unwrap().to_hex(), "#0080FFFF");
//! assert_eq!(Color::parse("Deep Purple 200"), Color::parse("deep-purple-200"));
//! assert!(Color::try_parse("#12345").is_none());
//! ```
//!
//! ## Contrast
//!
//! ```rust
//! use tincture_color::{contrast, Color};
//!
//! let ratio = contrast::contrast_ratio(Color::WHITE, Color::BLACK);
//! assert!((ratio - 21.0).abs() < 1e-9);
//!
//! let fixed = Color::parse("#EEEEFF").unwrap().ensure_contrast(Color::WHITE, contrast::WCAG_AA);
//! assert!(contrast::contrast_ratio(fixed, Color::WHITE) >= 4.5);
//! ```

mod channel;
mod color;
/// WCAG luminance, contrast ratio and contrast enforcement.
pub mod contrast;
mod derive;
mod error;
/// Named color tables (web colors and the Material palette).
pub mod names;
mod parse;
/// HSV and HSL color spaces.
pub mod space;

pub use channel::Channel;
pub use color::Color;
pub use derive::{
    Elevation, DISABLED_DESATURATION, DRAGGED_DELTA, FOCUSED_DELTA, HOVERED_DELTA, PRESSED_DELTA,
    VISITED_HUE_SHIFT,
};
pub use error::{ColorError, ColorResult};
pub use space::{Hsl, Hsv};
