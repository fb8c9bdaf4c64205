//! # Style Leaf
//!
//! A [Bucket] holds the style values for one (component, theme, state)
//! triple and keeps its foreground colors readable: every color write to
//! the background or to a foreground role re-runs a contrast pass that
//! adjusts each foreground color to at least [MINIMUM_CONTRAST] against
//! the background.

use indexmap::IndexMap;
use tincture_color::contrast::WCAG_AA;
use tincture_color::Color;

use crate::css::{CssBuilder, CssPrefix};
use crate::properties::StyleType;
use crate::style::StyleValue;

/// Minimum contrast ratio kept between foreground roles and the background.
pub const MINIMUM_CONTRAST: f64 = WCAG_AA;

/// Background assumed by the contrast pass when none is set.
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// The style values of one registry leaf, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    styles: IndexMap<StyleType, StyleValue>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `style`, if set.
    pub fn get(&self, style: StyleType) -> Option<&StyleValue> {
        self.styles.get(&style)
    }

    /// The color of `style`, if it is set to a color.
    pub fn color(&self, style: StyleType) -> Option<Color> {
        self.get(style).and_then(StyleValue::as_color)
    }

    /// The background the contrast pass measures against.
    ///
    /// An explicit background color, otherwise [DEFAULT_BACKGROUND].
    pub fn background(&self) -> Color {
        self.color(StyleType::BackgroundColor)
            .unwrap_or(DEFAULT_BACKGROUND)
    }

    /// Whether `style` is set.
    pub fn contains(&self, style: StyleType) -> bool {
        self.styles.contains_key(&style)
    }

    /// Set entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleType, &StyleValue)> + '_ {
        self.styles.iter().map(|(style, value)| (*style, value))
    }

    /// Number of set styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no style is set.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Upsert `style`, or remove it when `value` is `None` or empty.
    ///
    /// The value is first brought into the shape `style` stores with
    /// [StyleValue::coerce_for]; a value that does not fit is not stored and
    /// `false` is returned. A color written to the background or a
    /// foreground role triggers [Bucket::ensure_contrast_pass].
    pub fn set(&mut self, style: StyleType, value: Option<StyleValue>) -> bool {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            if self.styles.shift_remove(&style).is_some() {
                log::trace!("removed {}", style);
            }
            return true;
        };
        let Some(value) = value.coerce_for(style) else {
            log::debug!("{} does not fit {}, skipped", value, style);
            return false;
        };

        let is_color = style.is_color() && value.as_color().is_some();
        log::trace!("set {}:{}", style, value);
        self.styles.insert(style, value);
        if is_color {
            self.ensure_contrast_pass();
        }
        true
    }

    /// Overlay `value` onto the current value of `style` with [StyleValue::merge].
    pub fn merge(&mut self, style: StyleType, value: StyleValue) {
        let merged = match self.get(style) {
            Some(current) => current.merge(&value),
            None => value,
        };
        self.set(style, Some(merged));
    }

    /// Write `value` to each style in `styles`, or to every set style when
    /// `styles` is empty. Styles the value does not fit are left alone.
    /// Returns the number of styles written.
    pub fn apply(&mut self, styles: &[StyleType], value: Option<&StyleValue>) -> usize {
        let targets: Vec<StyleType> = if styles.is_empty() {
            self.styles.keys().copied().collect()
        } else {
            styles.to_vec()
        };
        targets
            .into_iter()
            .filter(|style| self.set(*style, value.cloned()))
            .count()
    }

    /// Adjust every foreground color to [MINIMUM_CONTRAST] against [Bucket::background].
    ///
    /// A no-op when the background is fully transparent.
    pub fn ensure_contrast_pass(&mut self) {
        let background = self.background();
        if background.is_transparent() {
            return;
        }

        for (style, value) in self.styles.iter_mut() {
            if !style.is_foreground() {
                continue;
            }
            if let StyleValue::Color(color) = value {
                let adjusted = color.ensure_contrast(background, MINIMUM_CONTRAST);
                if adjusted != *color {
                    log::trace!(
                        "{} adjusted {} -> {} against {}",
                        style,
                        color,
                        adjusted,
                        background
                    );
                    *color = adjusted;
                }
            }
        }
    }

    /// Render the requested styles (all set styles when `styles` is empty)
    /// into `out`. Groups expand to their sub-properties; with a non-empty
    /// `prefix` every declaration becomes a scoped custom property.
    pub fn render(&self, styles: &[StyleType], prefix: &CssPrefix, out: &mut CssBuilder) {
        if styles.is_empty() {
            for (style, value) in self.iter() {
                render_style(style, value, prefix, out);
            }
        } else {
            for &style in styles {
                if let Some(value) = self.get(style) {
                    render_style(style, value, prefix, out);
                }
            }
        }
    }
}

fn render_style(style: StyleType, value: &StyleValue, prefix: &CssPrefix, out: &mut CssBuilder) {
    for (index, property) in style.sub_properties().iter().enumerate() {
        if let Some(text) = value.part(index) {
            out.declaration(&prefix.property_name(property), &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Corners, Dimension, Edges};
    use pretty_assertions::assert_eq;
    use tincture_color::contrast::contrast_ratio;

    fn render(bucket: &Bucket, styles: &[StyleType], prefix: &str) -> String {
        let mut out = CssBuilder::new();
        bucket.render(styles, &CssPrefix::new(prefix), &mut out);
        out.finish()
    }

    #[test]
    fn test_set_and_remove() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::Color, Some(Color::BLACK.into()));
        assert!(bucket.contains(StyleType::Color));

        bucket.set(StyleType::Color, None);
        assert!(bucket.is_empty());
        bucket.set(StyleType::Color, None);
        assert!(bucket.is_empty());

        bucket.set(StyleType::Margin, Some(StyleValue::keyword("")));
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_removal_keeps_order() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::BackgroundColor, Some(Color::WHITE.into()));
        bucket.set(StyleType::Color, Some(Color::BLACK.into()));
        bucket.set(StyleType::CaretColor, Some(Color::BLACK.into()));
        bucket.set(StyleType::Color, None);
        let order: Vec<_> = bucket.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec![StyleType::BackgroundColor, StyleType::CaretColor]);
    }

    #[test]
    fn test_contrast_pass_on_foreground_write() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::BackgroundColor, Some(Color::WHITE.into()));
        bucket.set(StyleType::Color, Some(Color::from_rgb8(220, 220, 220).into()));
        let fg = bucket.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(fg, Color::WHITE) >= MINIMUM_CONTRAST);
    }

    #[test]
    fn test_contrast_pass_on_background_write() {
        let mut bucket = Bucket::new();
        let text = Color::from_rgb8(40, 40, 40);
        bucket.set(StyleType::Color, Some(text.into()));
        assert_eq!(bucket.color(StyleType::Color), Some(text));

        let dark = Color::from_rgb8(30, 30, 30);
        bucket.set(StyleType::BackgroundColor, Some(dark.into()));
        let fg = bucket.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(fg, dark) >= MINIMUM_CONTRAST);
    }

    #[test]
    fn test_missing_background_uses_default() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::Color, Some(Color::from_rgb8(250, 250, 250).into()));
        let fg = bucket.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(fg, DEFAULT_BACKGROUND) >= MINIMUM_CONTRAST);
    }

    #[test]
    fn test_transparent_background_skips_pass() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::BackgroundColor, Some(Color::TRANSPARENT.into()));
        let faint = Color::from_rgb8(250, 250, 250);
        bucket.set(StyleType::Color, Some(faint.into()));
        assert_eq!(bucket.color(StyleType::Color), Some(faint));
    }

    #[test]
    fn test_render_plain_and_prefixed() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::BackgroundColor, Some(Color::WHITE.into()));
        bucket.set(StyleType::Color, Some(Color::BLACK.into()));

        assert_eq!(
            render(&bucket, &[], ""),
            "background-color:#FFFFFFFF;color:#000000FF;"
        );
        assert_eq!(render(&bucket, &[StyleType::Color], "tc"), "--tc-color:#000000FF;");
        assert_eq!(render(&bucket, &[StyleType::BorderColor], ""), "");
    }

    #[test]
    fn test_render_groups() {
        let mut bucket = Bucket::new();
        bucket.set(
            StyleType::BorderRadius,
            Some(Corners::uniform(Dimension::px(4.0)).into()),
        );
        bucket.set(
            StyleType::Margin,
            Some(
                Edges {
                    block_start: Some(Dimension::px(2.0)),
                    ..Edges::default()
                }
                .into(),
            ),
        );
        assert_eq!(
            render(&bucket, &[], ""),
            "border-start-start-radius:4px;border-start-end-radius:4px;\
             border-end-end-radius:4px;border-end-start-radius:4px;\
             margin-block-start:2px;"
        );
    }

    #[test]
    fn test_merge_and_apply() {
        let mut bucket = Bucket::new();
        bucket.merge(StyleType::Padding, Edges::uniform(Dimension::px(8.0)).into());
        bucket.merge(
            StyleType::Padding,
            Edges {
                inline_start: Some(Dimension::px(0.0)),
                ..Edges::default()
            }
            .into(),
        );
        assert_eq!(
            render(&bucket, &[StyleType::Padding], ""),
            "padding-block-start:8px;padding-inline-end:8px;\
             padding-block-end:8px;padding-inline-start:0px;"
        );

        assert_eq!(bucket.apply(&[], None), 1);
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_mismatched_values_are_rejected() {
        let mut bucket = Bucket::new();
        assert!(!bucket.set(StyleType::Margin, Some(Color::WHITE.into())));
        assert!(!bucket.set(StyleType::Color, Some(StyleValue::keyword("bold"))));
        assert!(!bucket.set(
            StyleType::BackgroundColor,
            Some(Edges::uniform(Dimension::px(1.0)).into())
        ));
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_named_color_keyword_gets_contrast_pass() {
        let mut bucket = Bucket::new();
        assert!(bucket.set(StyleType::BackgroundColor, Some(StyleValue::keyword("white"))));
        assert!(bucket.set(StyleType::Color, Some(StyleValue::keyword("white"))));
        assert_eq!(bucket.color(StyleType::BackgroundColor), Some(Color::WHITE));
        let fg = bucket.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(fg, Color::WHITE) >= MINIMUM_CONTRAST);
    }

    #[test]
    fn test_wildcard_apply_skips_mismatched_styles() {
        let mut bucket = Bucket::new();
        bucket.set(StyleType::BackgroundColor, Some(Color::BLACK.into()));
        bucket.set(StyleType::Color, Some(Color::WHITE.into()));
        bucket.set(StyleType::Margin, Some(Edges::uniform(Dimension::zero()).into()));

        assert_eq!(bucket.apply(&[], Some(&StyleValue::keyword("white"))), 2);
        assert_eq!(
            bucket.get(StyleType::Margin),
            Some(&StyleValue::Edges(Edges::uniform(Dimension::zero())))
        );
        let fg = bucket.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(fg, Color::WHITE) >= MINIMUM_CONTRAST);

        assert_eq!(bucket.apply(&[], Some(&StyleValue::Dimension(Dimension::px(4.0)))), 1);
        assert_eq!(
            render(&bucket, &[StyleType::Margin], ""),
            "margin-block-start:4px;margin-inline-end:4px;margin-block-end:4px;margin-inline-start:4px;"
        );
    }
}
