//! # Registry Axes
//!
//! The closed enumerations that key the theme registry: [ComponentType],
//! [ThemeType] and [ComponentState]. The fourth axis, [StyleType](crate::properties::StyleType),
//! lives in [properties](crate::properties).
//!
//! Every axis value has a stable ordinal (its declaration order) and a
//! kebab-case CSS name used both for parsing and for custom-property scoping.
//!
//! ```rust
//! use tincture_theme::id::{Axis, ComponentType, ThemeType};
//!
//! assert_eq!(ThemeType::HighContrastDark.as_str(), "high-contrast-dark");
//! assert_eq!(ComponentType::from_css_name("body-text"), Some(ComponentType::BodyText));
//! assert_eq!(ComponentType::Link.index(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A closed, dense enumeration usable as a registry key.
pub trait Axis: Copy + Eq + fmt::Debug + 'static {
    /// Human readable name of the axis, used in error messages.
    const NAME: &'static str;

    /// Every value of the axis, in ordinal order.
    fn all() -> &'static [Self];

    /// The ordinal of this value, `0..all().len()`.
    fn index(self) -> usize;

    /// The kebab-case CSS name of this value.
    fn css_name(self) -> &'static str;
}

/// Implement string conversion, ordinals and [Axis] for a fieldless enum.
macro_rules! impl_axis {
    ($enum_name:ident, $axis:literal, $unknown:expr, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Every value, in ordinal order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
            /// Number of values.
            pub const COUNT: usize = Self::ALL.len();

            /// The kebab-case name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Look up a value by its kebab-case name (ASCII case-insensitive).
            pub fn from_css_name(s: &str) -> Option<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Like `from_css_name`, reporting the rejected input.
            pub fn parse(s: &str) -> $crate::error::ThemeResult<Self> {
                Self::from_css_name(s).ok_or_else(|| ($unknown)(s))
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::error::ThemeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::id::Axis for $enum_name {
            const NAME: &'static str = $axis;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn index(self) -> usize {
                self as usize
            }

            fn css_name(self) -> &'static str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use impl_axis;

/// The UI role a bucket styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    /// A container surface (cards, panels, buttons).
    Surface,
    /// A hyperlink.
    Link,
    /// Level 1 heading.
    Heading1,
    /// Level 2 heading.
    Heading2,
    /// Level 3 heading.
    Heading3,
    /// Level 4 heading.
    Heading4,
    /// Level 5 heading.
    Heading5,
    /// Level 6 heading.
    Heading6,
    /// Running text.
    BodyText,
    /// The document root.
    Html,
    /// The document body.
    Body,
    /// The global focus ring.
    Focus,
}

impl_axis!(ComponentType, "component", |s: &str| ThemeError::unknown_axis_value("component", s), {
    Surface => "surface",
    Link => "link",
    Heading1 => "heading1",
    Heading2 => "heading2",
    Heading3 => "heading3",
    Heading4 => "heading4",
    Heading5 => "heading5",
    Heading6 => "heading6",
    BodyText => "body-text",
    Html => "html",
    Body => "body",
    Focus => "focus",
});

impl ComponentType {
    /// Whether this is one of the six heading levels.
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            Self::Heading1
                | Self::Heading2
                | Self::Heading3
                | Self::Heading4
                | Self::Heading5
                | Self::Heading6
        )
    }
}

/// A theme variant.
///
/// [ThemeType::System] is an alias resolved to a concrete variant by the
/// [ThemeManager](crate::manager::ThemeManager); it never holds content in a registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeType {
    /// Follow the platform preference.
    #[default]
    System,
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
    /// Pure white surfaces, pure black text.
    HighContrastLight,
    /// Pure black surfaces, pure white text.
    HighContrastDark,
}

impl_axis!(ThemeType, "theme", |s: &str| ThemeError::unknown_axis_value("theme", s), {
    System => "system",
    Light => "light",
    Dark => "dark",
    HighContrastLight => "high-contrast-light",
    HighContrastDark => "high-contrast-dark",
});

impl ThemeType {
    /// The variants that can hold content.
    pub const CONCRETE: [ThemeType; 4] = [
        ThemeType::Light,
        ThemeType::Dark,
        ThemeType::HighContrastLight,
        ThemeType::HighContrastDark,
    ];

    /// Whether surfaces are dark in this variant.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::HighContrastDark)
    }

    /// Whether this is a high-contrast variant.
    pub fn is_high_contrast(self) -> bool {
        matches!(self, Self::HighContrastLight | Self::HighContrastDark)
    }
}

/// The interaction state of a component.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentState {
    /// At rest.
    #[default]
    Default,
    /// Under the pointer.
    Hovered,
    /// Holding keyboard focus.
    Focused,
    /// Being activated.
    Pressed,
    /// Being dragged.
    Dragged,
    /// A link the user has followed.
    Visited,
    /// Not interactive.
    Disabled,
    /// Interactive but not editable.
    ReadOnly,
    /// Not displayed.
    Hidden,
}

impl_axis!(ComponentState, "state", |s: &str| ThemeError::unknown_axis_value("state", s), {
    Default => "default",
    Hovered => "hovered",
    Focused => "focused",
    Pressed => "pressed",
    Dragged => "dragged",
    Visited => "visited",
    Disabled => "disabled",
    ReadOnly => "read-only",
    Hidden => "hidden",
});
