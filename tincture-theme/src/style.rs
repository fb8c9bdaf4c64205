//! # Style Values
//!
//! The data stored at a registry leaf. A [StyleValue] is opaque to the
//! registry apart from colors, which feed the bucket's contrast pass, and
//! the logical [Edges]/[Corners] groups, which expand to four CSS
//! properties on render.
//!
//! ```rust
//! use tincture_theme::properties::StyleType;
//! use tincture_theme::style::{Dimension, Edges, StyleValue};
//!
//! let margin = StyleValue::parse_for(StyleType::Margin, "4px 8px").unwrap();
//! assert_eq!(
//!     margin,
//!     StyleValue::Edges(Edges::new(
//!         Dimension::px(4.0),
//!         Dimension::px(8.0),
//!         Dimension::px(4.0),
//!         Dimension::px(8.0),
//!     ))
//! );
//! ```

use std::fmt;

use tincture_color::Color;

use crate::error::{ThemeError, ThemeResult};
use crate::properties::StyleType;

/// A CSS length or number unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `px`
    Px,
    /// `rem`
    Rem,
    /// `em`
    Em,
    /// `%`
    Percent,
    /// `vw`
    Vw,
    /// `vh`
    Vh,
    /// `pt`
    Pt,
    /// A bare number.
    None,
}

impl Unit {
    /// The CSS suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Pt => "pt",
            Unit::None => "",
        }
    }

    /// Parse a CSS suffix (ASCII case-insensitive).
    pub fn from_suffix(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Some(Unit::Px),
            "rem" => Some(Unit::Rem),
            "em" => Some(Unit::Em),
            "%" => Some(Unit::Percent),
            "vw" => Some(Unit::Vw),
            "vh" => Some(Unit::Vh),
            "pt" => Some(Unit::Pt),
            "" => Some(Unit::None),
            _ => None,
        }
    }
}

/// A number with a unit, such as `1.5rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    /// The magnitude.
    pub value: f64,
    /// The unit.
    pub unit: Unit,
}

impl Dimension {
    /// Create a dimension.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Pixels.
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Root ems.
    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// A bare zero.
    pub const fn zero() -> Self {
        Self::new(0.0, Unit::None)
    }

    /// Parse `12px`, `-0.5em`, `50%`, `0`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let split = text
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .unwrap_or(text.len());
        let (number, suffix) = text.split_at(split);
        if number.is_empty() || !number.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self::new(value, Unit::from_suffix(suffix)?))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid "-0" in output.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{}{}", value, self.unit.as_str())
    }
}

/// CSS-wide keywords valid for every property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKeyword {
    /// `inherit`
    Inherit,
    /// `initial`
    Initial,
    /// `unset`
    Unset,
    /// `revert`
    Revert,
    /// `revert-layer`
    RevertLayer,
}

impl GlobalKeyword {
    /// The CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalKeyword::Inherit => "inherit",
            GlobalKeyword::Initial => "initial",
            GlobalKeyword::Unset => "unset",
            GlobalKeyword::Revert => "revert",
            GlobalKeyword::RevertLayer => "revert-layer",
        }
    }

    /// Parse a CSS-wide keyword (ASCII case-insensitive).
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inherit" => Some(GlobalKeyword::Inherit),
            "initial" => Some(GlobalKeyword::Initial),
            "unset" => Some(GlobalKeyword::Unset),
            "revert" => Some(GlobalKeyword::Revert),
            "revert-layer" => Some(GlobalKeyword::RevertLayer),
            _ => None,
        }
    }
}

/// Expand a 1-4 value CSS shorthand into four sides.
fn expand_shorthand<T: Copy>(values: &[T]) -> Option<[T; 4]> {
    match *values {
        [a] => Some([a, a, a, a]),
        [a, b] => Some([a, b, a, b]),
        [a, b, c] => Some([a, b, c, b]),
        [a, b, c, d] => Some([a, b, c, d]),
        _ => None,
    }
}

fn merge_side(base: Option<Dimension>, over: Option<Dimension>) -> Option<Dimension> {
    over.or(base)
}

/// Logical box sides, used by margin, padding and border width.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    /// Top in horizontal writing modes.
    pub block_start: Option<Dimension>,
    /// Right in left-to-right text.
    pub inline_end: Option<Dimension>,
    /// Bottom in horizontal writing modes.
    pub block_end: Option<Dimension>,
    /// Left in left-to-right text.
    pub inline_start: Option<Dimension>,
}

impl Edges {
    /// All four sides set.
    pub fn new(
        block_start: Dimension,
        inline_end: Dimension,
        block_end: Dimension,
        inline_start: Dimension,
    ) -> Self {
        Self {
            block_start: Some(block_start),
            inline_end: Some(inline_end),
            block_end: Some(block_end),
            inline_start: Some(inline_start),
        }
    }

    /// The same dimension on every side.
    pub fn uniform(d: Dimension) -> Self {
        Self::new(d, d, d, d)
    }

    /// Sides in render order.
    pub fn sides(&self) -> [Option<Dimension>; 4] {
        [
            self.block_start,
            self.inline_end,
            self.block_end,
            self.inline_start,
        ]
    }

    /// Sides present in `other` override those in `self`.
    pub fn merge(&self, other: &Edges) -> Edges {
        Edges {
            block_start: merge_side(self.block_start, other.block_start),
            inline_end: merge_side(self.inline_end, other.inline_end),
            block_end: merge_side(self.block_end, other.block_end),
            inline_start: merge_side(self.inline_start, other.inline_start),
        }
    }

    /// Whether no side is set.
    pub fn is_empty(&self) -> bool {
        self.sides().iter().all(Option::is_none)
    }
}

/// Logical corner radii.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Corners {
    /// Top-left in left-to-right horizontal text.
    pub start_start: Option<Dimension>,
    /// Top-right.
    pub start_end: Option<Dimension>,
    /// Bottom-right.
    pub end_end: Option<Dimension>,
    /// Bottom-left.
    pub end_start: Option<Dimension>,
}

impl Corners {
    /// All four corners set.
    pub fn new(
        start_start: Dimension,
        start_end: Dimension,
        end_end: Dimension,
        end_start: Dimension,
    ) -> Self {
        Self {
            start_start: Some(start_start),
            start_end: Some(start_end),
            end_end: Some(end_end),
            end_start: Some(end_start),
        }
    }

    /// The same radius on every corner.
    pub fn uniform(d: Dimension) -> Self {
        Self::new(d, d, d, d)
    }

    /// Corners in render order.
    pub fn corners(&self) -> [Option<Dimension>; 4] {
        [self.start_start, self.start_end, self.end_end, self.end_start]
    }

    /// Corners present in `other` override those in `self`.
    pub fn merge(&self, other: &Corners) -> Corners {
        Corners {
            start_start: merge_side(self.start_start, other.start_start),
            start_end: merge_side(self.start_end, other.start_end),
            end_end: merge_side(self.end_end, other.end_end),
            end_start: merge_side(self.end_start, other.end_start),
        }
    }

    /// Whether no corner is set.
    pub fn is_empty(&self) -> bool {
        self.corners().iter().all(Option::is_none)
    }
}

impl From<Edges> for Corners {
    fn from(edges: Edges) -> Self {
        Corners {
            start_start: edges.block_start,
            start_end: edges.inline_end,
            end_end: edges.block_end,
            end_start: edges.inline_start,
        }
    }
}

/// A value stored in a bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A color.
    Color(Color),
    /// A bare keyword or any other opaque text. Empty text means "unset".
    Keyword(String),
    /// A single dimension.
    Dimension(Dimension),
    /// A function call such as `var(--x)` or `calc(1px + 2em)`.
    Function {
        /// Function name.
        name: String,
        /// Arguments, trimmed.
        args: Vec<String>,
    },
    /// A CSS-wide keyword.
    Global(GlobalKeyword),
    /// Four logical sides.
    Edges(Edges),
    /// Four logical corners.
    Corners(Corners),
}

const COLOR_FUNCTIONS: [&str; 4] = ["rgb", "rgba", "hsv", "hsva"];

fn split_function(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let inner = text[open + 1..].strip_suffix(')')?;
    let name = text[..open].trim();
    let valid_name = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid_name.then_some((name, inner))
}

impl StyleValue {
    /// A keyword value.
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    /// Parse CSS value text.
    ///
    /// Recognises, in order: empty text (an empty keyword), CSS-wide
    /// keywords, hex colors, color functions (`rgb`, `rgba`, `hsv`, `hsva`),
    /// other function calls, single dimensions, 2-4 dimension shorthands
    /// (as [Edges]) and finally bare keywords. Named colors are only
    /// recognised by [StyleValue::parse_for] on color roles.
    pub fn parse(text: &str) -> ThemeResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::Keyword(String::new()));
        }
        if let Some(global) = GlobalKeyword::from_keyword(text) {
            return Ok(Self::Global(global));
        }
        if text.starts_with('#') {
            return Ok(Self::Color(Color::parse(text)?));
        }
        if let Some((name, inner)) = split_function(text) {
            if COLOR_FUNCTIONS.contains(&name.to_ascii_lowercase().as_str()) {
                return Ok(Self::Color(Color::parse(text)?));
            }
            let args = if inner.trim().is_empty() {
                Vec::new()
            } else {
                inner.split(',').map(|a| a.trim().to_string()).collect()
            };
            return Ok(Self::Function {
                name: name.to_string(),
                args,
            });
        }

        let parts: Vec<&str> = text.split_whitespace().collect();
        let dims: Option<Vec<Dimension>> = parts.iter().map(|p| Dimension::parse(p)).collect();
        match dims.as_deref() {
            Some([single]) => return Ok(Self::Dimension(*single)),
            Some(many) => {
                if let Some([a, b, c, d]) = expand_shorthand(many) {
                    return Ok(Self::Edges(Edges::new(a, b, c, d)));
                }
            }
            None => {}
        }

        Ok(Self::Keyword(text.to_string()))
    }

    /// Non-failing counterpart of [StyleValue::parse].
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parse `text` as a value for `style`.
    ///
    /// Color roles accept every color grammar (including named colors),
    /// CSS-wide keywords, function calls and empty text. Groups accept
    /// dimensions and 1-4 value shorthands, CSS-wide keywords, function
    /// calls and empty text. Anything else is [ThemeError::InvalidValue].
    pub fn parse_for(style: StyleType, text: &str) -> ThemeResult<Self> {
        let trimmed = text.trim();
        if style.is_color() {
            if trimmed.is_empty() {
                return Ok(Self::Keyword(String::new()));
            }
            if let Some(global) = GlobalKeyword::from_keyword(trimmed) {
                return Ok(Self::Global(global));
            }
            if let Some((name, _)) = split_function(trimmed) {
                if !COLOR_FUNCTIONS.contains(&name.to_ascii_lowercase().as_str()) {
                    return Self::parse(trimmed);
                }
            }
            return Ok(Self::Color(Color::parse(trimmed)?));
        }

        match Self::parse(trimmed)? {
            Self::Dimension(d) if style == StyleType::BorderRadius => {
                Ok(Self::Corners(Corners::uniform(d)))
            }
            Self::Dimension(d) => Ok(Self::Edges(Edges::uniform(d))),
            Self::Edges(edges) if style == StyleType::BorderRadius => {
                Ok(Self::Corners(edges.into()))
            }
            value @ (Self::Edges(_)
            | Self::Global(_)
            | Self::Function { .. }) => Ok(value),
            Self::Keyword(k) if k.is_empty() => Ok(Self::Keyword(k)),
            _ => Err(ThemeError::invalid_value(style.as_str(), text)),
        }
    }

    /// Non-failing counterpart of [StyleValue::parse_for].
    pub fn try_parse_for(style: StyleType, text: &str) -> Option<Self> {
        Self::parse_for(style, text).ok()
    }

    /// This value in the shape `style` stores, or `None` if it does not fit.
    ///
    /// Color roles take colors, with keywords resolved as color names.
    /// Groups take their own group type, with a single dimension spread to
    /// every side and edges turned into corners for the border radius.
    /// CSS-wide keywords, function calls and empty values fit everywhere.
    pub fn coerce_for(&self, style: StyleType) -> Option<Self> {
        match self {
            Self::Global(_) | Self::Function { .. } => return Some(self.clone()),
            _ if self.is_empty() => return Some(self.clone()),
            _ => {}
        }
        if style.is_color() {
            return match self {
                Self::Color(_) => Some(self.clone()),
                Self::Keyword(name) => Color::try_parse(name).map(Self::Color),
                _ => None,
            };
        }
        if style == StyleType::BorderRadius {
            return match self {
                Self::Corners(_) => Some(self.clone()),
                Self::Edges(edges) => Some(Self::Corners((*edges).into())),
                Self::Dimension(d) => Some(Self::Corners(Corners::uniform(*d))),
                _ => None,
            };
        }
        match self {
            Self::Edges(_) => Some(self.clone()),
            Self::Dimension(d) => Some(Self::Edges(Edges::uniform(*d))),
            _ => None,
        }
    }

    /// Whether this value means "unset": empty keyword or an all-absent group.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Keyword(k) => k.trim().is_empty(),
            Self::Edges(e) => e.is_empty(),
            Self::Corners(c) => c.is_empty(),
            _ => false,
        }
    }

    /// The color, if this is a color.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Overlay `other` onto `self`: groups merge side by side, anything else is replaced.
    pub fn merge(&self, other: &StyleValue) -> StyleValue {
        match (self, other) {
            (Self::Edges(a), Self::Edges(b)) => Self::Edges(a.merge(b)),
            (Self::Corners(a), Self::Corners(b)) => Self::Corners(a.merge(b)),
            _ => other.clone(),
        }
    }

    /// The text for sub-property `index` of a group, or the whole value for other variants.
    ///
    /// Returns `None` for a side or corner that is not set.
    pub fn part(&self, index: usize) -> Option<String> {
        match self {
            Self::Edges(e) => e.sides().get(index).copied().flatten().map(|d| d.to_string()),
            Self::Corners(c) => c.corners().get(index).copied().flatten().map(|d| d.to_string()),
            other => Some(other.to_string()),
        }
    }
}

fn write_sides(f: &mut fmt::Formatter<'_>, sides: [Option<Dimension>; 4]) -> fmt::Result {
    let mut first = true;
    for side in sides {
        if !first {
            f.write_str(" ")?;
        }
        first = false;
        match side {
            Some(d) => write!(f, "{}", d)?,
            None => f.write_str("0")?,
        }
    }
    Ok(())
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{}", c),
            Self::Keyword(k) => f.write_str(k),
            Self::Dimension(d) => write!(f, "{}", d),
            Self::Function { name, args } => write!(f, "{}({})", name, args.join(", ")),
            Self::Global(g) => f.write_str(g.as_str()),
            Self::Edges(e) => write_sides(f, e.sides()),
            Self::Corners(c) => write_sides(f, c.corners()),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Dimension> for StyleValue {
    fn from(d: Dimension) -> Self {
        Self::Dimension(d)
    }
}

impl From<GlobalKeyword> for StyleValue {
    fn from(g: GlobalKeyword) -> Self {
        Self::Global(g)
    }
}

impl From<Edges> for StyleValue {
    fn from(e: Edges) -> Self {
        Self::Edges(e)
    }
}

impl From<Corners> for StyleValue {
    fn from(c: Corners) -> Self {
        Self::Corners(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_color::ColorError;

    #[test]
    fn test_dimension_parse() {
        assert_eq!(Dimension::parse("12px"), Some(Dimension::px(12.0)));
        assert_eq!(Dimension::parse("-0.5em"), Some(Dimension::new(-0.5, Unit::Em)));
        assert_eq!(Dimension::parse("50%"), Some(Dimension::new(50.0, Unit::Percent)));
        assert_eq!(Dimension::parse("0"), Some(Dimension::zero()));
        assert_eq!(Dimension::parse("px"), None);
        assert_eq!(Dimension::parse("12furlongs"), None);
        assert_eq!(Dimension::parse("auto"), None);
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::px(2.0).to_string(), "2px");
        assert_eq!(Dimension::rem(1.25).to_string(), "1.25rem");
        assert_eq!(Dimension::new(-0.0, Unit::Px).to_string(), "0px");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(StyleValue::parse("inherit"), Ok(StyleValue::Global(GlobalKeyword::Inherit)));
        assert_eq!(
            StyleValue::parse("#F00"),
            Ok(StyleValue::Color(Color::from_rgb8(255, 0, 0)))
        );
        assert_eq!(
            StyleValue::parse("rgb(0, 0, 255)"),
            Ok(StyleValue::Color(Color::from_rgb8(0, 0, 255)))
        );
        assert_eq!(
            StyleValue::parse("var(--tc-accent, red)"),
            Ok(StyleValue::Function {
                name: "var".into(),
                args: vec!["--tc-accent".into(), "red".into()],
            })
        );
        assert_eq!(StyleValue::parse("1.5rem"), Ok(StyleValue::Dimension(Dimension::rem(1.5))));
        assert_eq!(StyleValue::parse("bold"), Ok(StyleValue::keyword("bold")));
        assert_eq!(StyleValue::parse("  "), Ok(StyleValue::keyword("")));
    }

    #[test]
    fn test_parse_propagates_color_errors() {
        assert!(matches!(
            StyleValue::parse("#12345"),
            Err(ThemeError::Color(ColorError::UnsupportedLength { len: 5, .. }))
        ));
    }

    #[test]
    fn test_parse_for_colors() {
        assert_eq!(
            StyleValue::parse_for(StyleType::Color, "Deep Purple 200"),
            Ok(StyleValue::Color(Color::parse("deep-purple-200").unwrap()))
        );
        assert!(matches!(
            StyleValue::parse_for(StyleType::Color, "12px"),
            Err(ThemeError::Color(_))
        ));
        assert!(StyleValue::parse_for(StyleType::Color, "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_for_groups() {
        assert_eq!(
            StyleValue::parse_for(StyleType::Padding, "8px"),
            Ok(StyleValue::Edges(Edges::uniform(Dimension::px(8.0))))
        );
        assert_eq!(
            StyleValue::parse_for(StyleType::BorderRadius, "1px 2px 3px 4px"),
            Ok(StyleValue::Corners(Corners::new(
                Dimension::px(1.0),
                Dimension::px(2.0),
                Dimension::px(3.0),
                Dimension::px(4.0),
            )))
        );
        assert_eq!(
            StyleValue::parse_for(StyleType::Margin, "auto"),
            Err(ThemeError::invalid_value("margin", "auto"))
        );
    }

    #[test]
    fn test_coerce_for_color_roles() {
        assert_eq!(
            StyleValue::keyword("white").coerce_for(StyleType::Color),
            Some(StyleValue::Color(Color::WHITE))
        );
        assert_eq!(StyleValue::keyword("bold").coerce_for(StyleType::Color), None);
        assert_eq!(
            StyleValue::Dimension(Dimension::px(1.0)).coerce_for(StyleType::BorderColor),
            None
        );
        let var = StyleValue::parse("var(--x)").unwrap();
        assert_eq!(var.coerce_for(StyleType::AccentColor), Some(var));
    }

    #[test]
    fn test_coerce_for_groups() {
        assert_eq!(StyleValue::Color(Color::WHITE).coerce_for(StyleType::Margin), None);
        assert_eq!(StyleValue::keyword("white").coerce_for(StyleType::Padding), None);
        assert_eq!(
            StyleValue::Dimension(Dimension::px(2.0)).coerce_for(StyleType::BorderWidth),
            Some(StyleValue::Edges(Edges::uniform(Dimension::px(2.0))))
        );
        assert_eq!(
            StyleValue::Edges(Edges::uniform(Dimension::px(3.0))).coerce_for(StyleType::BorderRadius),
            Some(StyleValue::Corners(Corners::uniform(Dimension::px(3.0))))
        );
        assert_eq!(
            StyleValue::Corners(Corners::uniform(Dimension::px(3.0))).coerce_for(StyleType::Margin),
            None
        );
        assert_eq!(
            StyleValue::Global(GlobalKeyword::Unset).coerce_for(StyleType::Margin),
            Some(StyleValue::Global(GlobalKeyword::Unset))
        );
    }

    #[test]
    fn test_try_parse_for() {
        assert_eq!(
            StyleValue::try_parse_for(StyleType::Padding, "8px"),
            Some(StyleValue::Edges(Edges::uniform(Dimension::px(8.0))))
        );
        assert_eq!(StyleValue::try_parse_for(StyleType::Margin, "auto"), None);
        assert_eq!(StyleValue::try_parse_for(StyleType::Color, "not-a-color"), None);
    }

    #[test]
    fn test_shorthand_expansion() {
        let three = StyleValue::parse("1px 2px 3px").unwrap();
        assert_eq!(
            three,
            StyleValue::Edges(Edges::new(
                Dimension::px(1.0),
                Dimension::px(2.0),
                Dimension::px(3.0),
                Dimension::px(2.0),
            ))
        );
        assert_eq!(
            StyleValue::parse("1px 2px 3px 4px 5px"),
            Ok(StyleValue::keyword("1px 2px 3px 4px 5px"))
        );
    }

    #[test]
    fn test_merge_groups() {
        let base = StyleValue::Edges(Edges::uniform(Dimension::px(4.0)));
        let over = StyleValue::Edges(Edges {
            inline_start: Some(Dimension::px(16.0)),
            ..Edges::default()
        });
        let merged = base.merge(&over);
        assert_eq!(merged.part(0).as_deref(), Some("4px"));
        assert_eq!(merged.part(3).as_deref(), Some("16px"));

        let replaced = base.merge(&StyleValue::Global(GlobalKeyword::Unset));
        assert_eq!(replaced, StyleValue::Global(GlobalKeyword::Unset));
    }

    #[test]
    fn test_empty_values() {
        assert!(StyleValue::keyword("").is_empty());
        assert!(StyleValue::Edges(Edges::default()).is_empty());
        assert!(StyleValue::Corners(Corners::default()).is_empty());
        assert!(!StyleValue::Color(Color::TRANSPARENT).is_empty());
    }

    #[test]
    fn test_display() {
        let value = StyleValue::Function {
            name: "calc".into(),
            args: vec!["100% - 2px".into()],
        };
        assert_eq!(value.to_string(), "calc(100% - 2px)");
        let partial = StyleValue::Edges(Edges {
            block_start: Some(Dimension::px(1.0)),
            ..Edges::default()
        });
        assert_eq!(partial.to_string(), "1px 0 0 0");
        assert_eq!(partial.part(1), None);
    }
}
