use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::id::impl_axis;

/// Type-safe style property keys for a bucket.
///
/// Color roles map to a single CSS property. Style groups expand to their
/// four logical sub-properties on render, see [StyleType::sub_properties].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleType {
    /// `background-color`
    BackgroundColor,
    /// `color`
    Color,
    /// `border-color`
    BorderColor,
    /// `caret-color`
    CaretColor,
    /// `outline-color`
    OutlineColor,
    /// `accent-color`
    AccentColor,
    /// `text-decoration-color`
    TextDecorationColor,
    /// The four logical corner radii.
    BorderRadius,
    /// The four logical border widths.
    BorderWidth,
    /// The four logical margins.
    Margin,
    /// The four logical paddings.
    Padding,
}

impl_axis!(StyleType, "style", ThemeError::unknown_style_type, {
    BackgroundColor => "background-color",
    Color => "color",
    BorderColor => "border-color",
    CaretColor => "caret-color",
    OutlineColor => "outline-color",
    AccentColor => "accent-color",
    TextDecorationColor => "text-decoration-color",
    BorderRadius => "border-radius",
    BorderWidth => "border-width",
    Margin => "margin",
    Padding => "padding",
});

const RADIUS_PROPERTIES: [&str; 4] = [
    "border-start-start-radius",
    "border-start-end-radius",
    "border-end-end-radius",
    "border-end-start-radius",
];

const BORDER_WIDTH_PROPERTIES: [&str; 4] = [
    "border-block-start-width",
    "border-inline-end-width",
    "border-block-end-width",
    "border-inline-start-width",
];

const MARGIN_PROPERTIES: [&str; 4] = [
    "margin-block-start",
    "margin-inline-end",
    "margin-block-end",
    "margin-inline-start",
];

const PADDING_PROPERTIES: [&str; 4] = [
    "padding-block-start",
    "padding-inline-end",
    "padding-block-end",
    "padding-inline-start",
];

impl StyleType {
    /// Whether values of this style are colors.
    pub fn is_color(self) -> bool {
        !self.is_group()
    }

    /// Whether this is a color drawn on top of the background.
    pub fn is_foreground(self) -> bool {
        self.is_color() && self != Self::BackgroundColor
    }

    /// Whether this style expands to several CSS properties.
    pub fn is_group(self) -> bool {
        matches!(
            self,
            Self::BorderRadius | Self::BorderWidth | Self::Margin | Self::Padding
        )
    }

    /// The CSS properties written for this style, in render order.
    ///
    /// Groups yield `[block-start, inline-end, block-end, inline-start]`
    /// (or the corner equivalent); single properties yield their own name.
    pub fn sub_properties(self) -> &'static [&'static str] {
        match self {
            Self::BorderRadius => &RADIUS_PROPERTIES,
            Self::BorderWidth => &BORDER_WIDTH_PROPERTIES,
            Self::Margin => &MARGIN_PROPERTIES,
            Self::Padding => &PADDING_PROPERTIES,
            Self::BackgroundColor => &["background-color"],
            Self::Color => &["color"],
            Self::BorderColor => &["border-color"],
            Self::CaretColor => &["caret-color"],
            Self::OutlineColor => &["outline-color"],
            Self::AccentColor => &["accent-color"],
            Self::TextDecorationColor => &["text-decoration-color"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert!(StyleType::BackgroundColor.is_color());
        assert!(!StyleType::BackgroundColor.is_foreground());
        assert!(StyleType::CaretColor.is_foreground());
        assert!(StyleType::Margin.is_group());
        assert!(!StyleType::Margin.is_color());
        let colors = StyleType::ALL.iter().filter(|s| s.is_color()).count();
        assert_eq!(colors, 7);
    }

    #[test]
    fn test_sub_properties() {
        assert_eq!(StyleType::Color.sub_properties(), &["color"]);
        assert_eq!(
            StyleType::BorderRadius.sub_properties()[0],
            "border-start-start-radius"
        );
        for style in StyleType::ALL {
            let expected = if style.is_group() { 4 } else { 1 };
            assert_eq!(style.sub_properties().len(), expected, "{style}");
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            StyleType::parse("Text-Decoration-Color"),
            Ok(StyleType::TextDecorationColor)
        );
        assert!(matches!(
            StyleType::parse("font-size"),
            Err(ThemeError::UnknownStyleType { .. })
        ));
    }
}
