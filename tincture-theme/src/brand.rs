//! # Brand Cascade
//!
//! A [Brand] names a handful of colors; [ThemeBuilder] derives from it a
//! complete default [ThemeRegistry] covering every component in the light,
//! dark and both high-contrast variants, across the interactive states.
//! Configured overrides are layered on top afterwards with
//! [ThemeRegistry::set].
//!
//! ```rust
//! use tincture_color::Color;
//! use tincture_theme::brand::{Brand, ThemeBuilder};
//! use tincture_theme::id::{ComponentState, ComponentType, ThemeType};
//!
//! let brand = Brand::from_primary(Color::parse("indigo").unwrap());
//! let registry = ThemeBuilder::from_brand(&brand);
//! assert!(registry
//!     .get(ComponentType::Link, ThemeType::Dark, ComponentState::Visited)
//!     .is_some());
//! ```

use tincture_color::contrast::WCAG_AAA;
use tincture_color::{Color, DRAGGED_DELTA, FOCUSED_DELTA, HOVERED_DELTA, PRESSED_DELTA};

use crate::id::{ComponentState, ComponentType, ThemeType};
use crate::navigator::Navigator;
use crate::properties::StyleType;
use crate::registry::ThemeRegistry;
use crate::style::{Corners, Dimension, Edges, StyleValue};

/// Share of the text color mixed into the surface for border colors.
const BORDER_MIX: f64 = 0.2;

/// The named colors a theme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    /// Main brand color, used for accents and focus rings.
    pub primary: Color,
    /// Secondary brand color, used for the accent-color role.
    pub secondary: Color,
    /// Surface color of the light variant.
    pub surface_light: Color,
    /// Surface color of the dark variant.
    pub surface_dark: Color,
    /// Text color of the light variant.
    pub text_light: Color,
    /// Text color of the dark variant.
    pub text_dark: Color,
    /// Link color.
    pub link: Color,
}

impl Brand {
    /// A brand built around `primary`: the secondary is its complement,
    /// links use the primary, surfaces and text are neutral.
    pub fn from_primary(primary: Color) -> Self {
        Self {
            primary,
            secondary: primary.to_accent(),
            surface_light: Color::from_rgb8(0xFA, 0xFA, 0xFA),
            surface_dark: Color::from_rgb8(0x12, 0x12, 0x12),
            text_light: Color::from_rgb8(0x21, 0x21, 0x21),
            text_dark: Color::from_rgb8(0xE0, 0xE0, 0xE0),
            link: primary,
        }
    }

    /// Set the secondary color.
    pub fn with_secondary(mut self, color: Color) -> Self {
        self.secondary = color;
        self
    }

    /// Set the light surface color.
    pub fn with_surface_light(mut self, color: Color) -> Self {
        self.surface_light = color;
        self
    }

    /// Set the dark surface color.
    pub fn with_surface_dark(mut self, color: Color) -> Self {
        self.surface_dark = color;
        self
    }

    /// Set the light variant's text color.
    pub fn with_text_light(mut self, color: Color) -> Self {
        self.text_light = color;
        self
    }

    /// Set the dark variant's text color.
    pub fn with_text_dark(mut self, color: Color) -> Self {
        self.text_dark = color;
        self
    }

    /// Set the link color.
    pub fn with_link(mut self, color: Color) -> Self {
        self.link = color;
        self
    }
}

impl Default for Brand {
    /// Material blue 500.
    fn default() -> Self {
        Self::from_primary(Color::from_rgb8(0x21, 0x96, 0xF3))
    }
}

/// The surface/text/accent trio of one theme variant.
#[derive(Debug, Clone, Copy)]
struct Palette {
    surface: Color,
    text: Color,
    primary: Color,
    secondary: Color,
    link: Color,
}

impl Palette {
    fn for_theme(brand: &Brand, theme: ThemeType) -> Self {
        match theme {
            ThemeType::HighContrastLight | ThemeType::HighContrastDark => {
                let (surface, text) = if theme.is_dark() {
                    (Color::BLACK, Color::WHITE)
                } else {
                    (Color::WHITE, Color::BLACK)
                };
                Self {
                    surface,
                    text,
                    primary: brand.primary.ensure_contrast(surface, WCAG_AAA),
                    secondary: brand.secondary.ensure_contrast(surface, WCAG_AAA),
                    link: brand.link.ensure_contrast(surface, WCAG_AAA),
                }
            }
            ThemeType::Dark => Self {
                surface: brand.surface_dark,
                text: brand.text_dark,
                primary: brand.primary,
                secondary: brand.secondary,
                link: brand.link,
            },
            ThemeType::Light | ThemeType::System => Self {
                surface: brand.surface_light,
                text: brand.text_light,
                primary: brand.primary,
                secondary: brand.secondary,
                link: brand.link,
            },
        }
    }
}

/// The derived variant of `color` for `state`.
///
/// Interaction states use the state deltas away from the nearer lightness
/// pole, so the near-white light surface still changes on hover.
fn for_state(color: Color, state: ComponentState) -> Color {
    match state {
        ComponentState::Hovered => color.shift_from_pole(HOVERED_DELTA),
        ComponentState::Focused => color.shift_from_pole(FOCUSED_DELTA),
        ComponentState::Pressed => color.shift_from_pole(PRESSED_DELTA),
        ComponentState::Dragged => color.shift_from_pole(DRAGGED_DELTA),
        ComponentState::Visited => color.to_visited(),
        ComponentState::Disabled => color.to_disabled(),
        ComponentState::Default | ComponentState::ReadOnly | ComponentState::Hidden => color,
    }
}

/// Builds default registries from a [Brand].
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    brand: Brand,
    themes: Vec<ThemeType>,
    states: Vec<ComponentState>,
}

impl ThemeBuilder {
    /// The states populated by default. [ComponentState::Visited] only applies to links.
    pub const DEFAULT_STATES: [ComponentState; 7] = [
        ComponentState::Default,
        ComponentState::Hovered,
        ComponentState::Focused,
        ComponentState::Pressed,
        ComponentState::Dragged,
        ComponentState::Visited,
        ComponentState::Disabled,
    ];

    /// A builder covering every concrete theme and the default states.
    pub fn new(brand: Brand) -> Self {
        Self {
            brand,
            themes: ThemeType::CONCRETE.to_vec(),
            states: Self::DEFAULT_STATES.to_vec(),
        }
    }

    /// Restrict the theme variants built. [ThemeType::System] is ignored.
    pub fn with_themes(mut self, themes: impl IntoIterator<Item = ThemeType>) -> Self {
        self.themes = themes
            .into_iter()
            .filter(|t| *t != ThemeType::System)
            .collect();
        self
    }

    /// Restrict the states built.
    pub fn with_states(mut self, states: impl IntoIterator<Item = ComponentState>) -> Self {
        self.states = states.into_iter().collect();
        self
    }

    /// Build a registry with the default cascade for `brand`.
    pub fn from_brand(brand: &Brand) -> ThemeRegistry {
        Self::new(*brand).build()
    }

    /// Build the registry.
    pub fn build(&self) -> ThemeRegistry {
        let mut registry = ThemeRegistry::new();
        self.build_into(&mut registry);
        registry
    }

    /// Write the default cascade into `registry`, on top of whatever it holds.
    pub fn build_into(&self, registry: &mut ThemeRegistry) {
        for &theme in &self.themes {
            let palette = Palette::for_theme(&self.brand, theme);
            for &component in ComponentType::ALL {
                for &state in &self.states {
                    if state == ComponentState::Visited && component != ComponentType::Link {
                        continue;
                    }
                    let nav = Navigator::for_bucket(component, theme, state);
                    for (style, value) in Self::bucket_styles(component, state, &palette) {
                        registry.set(&nav.clone().with_style(style), Some(value));
                    }
                }
            }
        }
        log::debug!(
            "built {} bucket(s) from brand {}",
            registry.bucket_count(),
            self.brand.primary
        );
    }

    /// The styles of one bucket, background first so the contrast pass
    /// measures every foreground against the final background.
    fn bucket_styles(
        component: ComponentType,
        state: ComponentState,
        palette: &Palette,
    ) -> Vec<(StyleType, StyleValue)> {
        let text = match state {
            ComponentState::Disabled => palette.text.mix(palette.surface, 0.4),
            _ => palette.text,
        };
        let mut styles = Vec::new();

        match component {
            ComponentType::Surface => {
                let surface = match state {
                    ComponentState::Disabled => palette.surface,
                    _ => for_state(palette.surface, state),
                };
                styles.push((StyleType::BackgroundColor, surface.into()));
                styles.push((StyleType::Color, text.into()));
                styles.push((
                    StyleType::BorderColor,
                    palette.surface.mix(palette.text, BORDER_MIX).into(),
                ));
                styles.push((StyleType::BorderWidth, Edges::uniform(Dimension::px(1.0)).into()));
                styles.push((StyleType::BorderRadius, Corners::uniform(Dimension::px(4.0)).into()));
                styles.push((StyleType::Padding, Edges::uniform(Dimension::px(8.0)).into()));
            }
            ComponentType::Link => {
                let link = for_state(palette.link, state);
                styles.push((StyleType::BackgroundColor, palette.surface.into()));
                styles.push((StyleType::Color, link.into()));
                styles.push((StyleType::TextDecorationColor, link.into()));
            }
            ComponentType::Html | ComponentType::Body => {
                styles.push((StyleType::BackgroundColor, palette.surface.into()));
                styles.push((StyleType::Color, text.into()));
                styles.push((StyleType::AccentColor, palette.secondary.into()));
                if component == ComponentType::Body {
                    styles.push((StyleType::Margin, Edges::uniform(Dimension::zero()).into()));
                }
            }
            ComponentType::Focus => {
                styles.push((StyleType::BackgroundColor, palette.surface.into()));
                styles.push((StyleType::OutlineColor, for_state(palette.primary, state).into()));
                styles.push((StyleType::CaretColor, palette.primary.into()));
            }
            ComponentType::BodyText
            | ComponentType::Heading1
            | ComponentType::Heading2
            | ComponentType::Heading3
            | ComponentType::Heading4
            | ComponentType::Heading5
            | ComponentType::Heading6 => {
                styles.push((StyleType::BackgroundColor, palette.surface.into()));
                styles.push((StyleType::Color, text.into()));
                if component.is_heading() {
                    styles.push((StyleType::Margin, heading_margin(component).into()));
                }
            }
        }
        styles
    }
}

/// Block margins of a heading, shrinking with its level.
fn heading_margin(component: ComponentType) -> Edges {
    let level = match component {
        ComponentType::Heading1 => 1.0,
        ComponentType::Heading2 => 2.0,
        ComponentType::Heading3 => 3.0,
        ComponentType::Heading4 => 4.0,
        ComponentType::Heading5 => 5.0,
        _ => 6.0,
    };
    let block = Dimension::rem(1.0 - (level - 1.0) * 0.1);
    Edges {
        block_start: Some(block),
        block_end: Some(Dimension::rem(0.5)),
        ..Edges::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::MINIMUM_CONTRAST;
    use tincture_color::contrast::contrast_ratio;

    #[test]
    fn test_covers_every_component_and_theme() {
        let registry = ThemeBuilder::from_brand(&Brand::default());
        // 12 components x 4 themes x 6 states, plus visited for links.
        assert_eq!(registry.bucket_count(), 12 * 4 * 6 + 4);
        assert!(registry
            .get(ComponentType::Surface, ThemeType::Light, ComponentState::Visited)
            .is_none());
        assert!(registry
            .iter()
            .all(|(_, theme, _, _)| theme != ThemeType::System));
    }

    #[test]
    fn test_every_foreground_meets_minimum() {
        let registry = ThemeBuilder::from_brand(&Brand::from_primary(Color::from_rgb8(255, 235, 59)));
        for (component, theme, state, bucket) in registry.iter() {
            let background = bucket.background();
            for (style, value) in bucket.iter() {
                if let (true, Some(color)) = (style.is_foreground(), value.as_color()) {
                    let ratio = contrast_ratio(color, background);
                    assert!(
                        ratio >= MINIMUM_CONTRAST,
                        "{component}/{theme}/{state}/{style}: {ratio}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_high_contrast_surfaces() {
        let registry = ThemeBuilder::from_brand(&Brand::default());
        let body = registry
            .get(ComponentType::Body, ThemeType::HighContrastDark, ComponentState::Default)
            .unwrap();
        assert_eq!(body.color(StyleType::BackgroundColor), Some(Color::BLACK));
        assert_eq!(body.color(StyleType::Color), Some(Color::WHITE));

        let link = registry
            .get(ComponentType::Link, ThemeType::HighContrastLight, ComponentState::Default)
            .unwrap();
        let color = link.color(StyleType::Color).unwrap();
        assert!(contrast_ratio(color, Color::WHITE) >= WCAG_AAA);
    }

    #[test]
    fn test_states_differ() {
        let registry = ThemeBuilder::from_brand(&Brand::default());
        let surface = |state| {
            registry
                .get(ComponentType::Surface, ThemeType::Light, state)
                .and_then(|b| b.color(StyleType::BackgroundColor))
        };
        assert_ne!(surface(ComponentState::Default), surface(ComponentState::Hovered));
        assert_ne!(surface(ComponentState::Hovered), surface(ComponentState::Pressed));
    }

    #[test]
    fn test_restricted_builder() {
        let registry = ThemeBuilder::new(Brand::default())
            .with_themes([ThemeType::Dark, ThemeType::System])
            .with_states([ComponentState::Default])
            .build();
        assert_eq!(registry.bucket_count(), 12);
    }
}
