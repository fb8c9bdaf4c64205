#![warn(missing_docs)]

//! Deterministic CSS theming with WCAG contrast guarantees.

pub use tincture_color as color;
pub use tincture_theme as theme;

/// A "prelude" for users of the tincture toolkit.
///
/// Importing this module brings into scope the most common types
/// needed to build, override and render a theme.
///
/// ```rust
/// use tincture::prelude::*;
///
/// let mut registry = ThemeRegistry::new();
/// let surface = Navigator::for_bucket(
///     ComponentType::Surface,
///     ThemeType::Light,
///     ComponentState::Default,
/// );
/// registry.set(
///     &surface.clone().with_style(StyleType::BackgroundColor),
///     Some(StyleValue::Color(Color::WHITE)),
/// );
/// registry.set(
///     &surface.clone().with_style(StyleType::Color),
///     Some(StyleValue::Color(Color::BLACK)),
/// );
///
/// let css = registry.build_css(&surface, &CssPrefix::empty());
/// assert_eq!(css, "background-color:#FFFFFFFF;color:#000000FF;");
/// ```
pub mod prelude {
    // Color
    pub use crate::color::contrast::{contrast_ratio, ensure_contrast, WCAG_AA, WCAG_AAA};
    pub use crate::color::{Color, ColorError, Hsl, Hsv};

    // Registry
    pub use crate::theme::css::CssPrefix;
    pub use crate::theme::id::{ComponentState, ComponentType, ThemeType};
    pub use crate::theme::navigator::Navigator;
    pub use crate::theme::properties::StyleType;
    pub use crate::theme::registry::ThemeRegistry;
    pub use crate::theme::style::StyleValue;
    pub use crate::theme::{ThemeError, ThemeResult};

    // Defaults and runtime
    pub use crate::theme::brand::{Brand, ThemeBuilder};
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::manager::{ThemeChange, ThemeManager};
}
