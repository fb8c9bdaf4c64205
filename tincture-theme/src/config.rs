//! # Theme Configuration
//!
//! [ThemeConfig] selects the initial theme variant, names the brand colors
//! and lists style overrides to layer on top of the brand cascade. It can
//! be built programmatically, parsed from TOML text or read from the
//! environment.
//!
//! ## Environment Variables
//!
//! - `TINCTURE_THEME`: the default theme (`system`, `light`, `dark`,
//!   `high-contrast-light`, `high-contrast-dark`)
//! - `TINCTURE_THEME_FALLBACK`: the theme used when `system` cannot be resolved
//!
//! ## TOML Format
//!
//! ```toml
//! default_theme = "dark"
//! fallback_theme = "light"
//!
//! [brand]
//! primary = "#6200EE"
//! link = "deep-purple-200"
//!
//! [[overrides]]
//! components = ["link"]
//! themes = ["dark"]
//! states = ["visited"]
//! styles = ["color"]
//! value = "pink 200"
//! ```
//!
//! Reading files is left to the caller:
//!
//! ```rust
//! use tincture_theme::config::ThemeConfig;
//! use tincture_theme::id::ThemeType;
//!
//! let config = ThemeConfig::from_toml(r#"default_theme = "dark""#).unwrap();
//! assert_eq!(config.default_theme, ThemeType::Dark);
//! let registry = config.build_registry().unwrap();
//! assert!(!registry.is_empty());
//! ```

use std::env;

use serde::{Deserialize, Serialize};
use tincture_color::Color;

use crate::brand::{Brand, ThemeBuilder};
use crate::error::{ThemeError, ThemeResult};
use crate::id::{ComponentState, ComponentType, ThemeType};
use crate::manager::ThemeManager;
use crate::navigator::Navigator;
use crate::properties::StyleType;
use crate::registry::ThemeRegistry;
use crate::style::StyleValue;

/// Environment variable holding the default theme.
pub const THEME_ENV: &str = "TINCTURE_THEME";
/// Environment variable holding the fallback theme.
pub const THEME_FALLBACK_ENV: &str = "TINCTURE_THEME_FALLBACK";

/// Theme selection, brand colors and overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// The theme shown initially. May be [ThemeType::System].
    pub default_theme: ThemeType,
    /// The theme [ThemeType::System] resolves to when no platform preference is known.
    pub fallback_theme: ThemeType,
    /// Brand colors, as color text.
    pub brand: BrandConfig,
    /// Overrides applied after the brand cascade, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideConfig>,
}

/// Brand colors as text. Unset entries keep the value derived from `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Primary color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Light surface color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_light: Option<String>,
    /// Dark surface color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_dark: Option<String>,
    /// Light variant text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_light: Option<String>,
    /// Dark variant text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dark: Option<String>,
    /// Link color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One override: axis names (empty lists are wildcards) and a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Component names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    /// Theme names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<String>,
    /// State names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    /// Style names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    /// Value text; empty removes.
    pub value: String,
}

fn parse_color(field: Option<&String>) -> ThemeResult<Option<Color>> {
    field.map(|text| Color::parse(text)).transpose().map_err(ThemeError::from)
}

impl BrandConfig {
    /// Resolve into a [Brand], starting from [Brand::default] when `primary` is unset.
    pub fn to_brand(&self) -> ThemeResult<Brand> {
        let mut brand = match parse_color(self.primary.as_ref())? {
            Some(primary) => Brand::from_primary(primary),
            None => Brand::default(),
        };
        if let Some(c) = parse_color(self.secondary.as_ref())? {
            brand = brand.with_secondary(c);
        }
        if let Some(c) = parse_color(self.surface_light.as_ref())? {
            brand = brand.with_surface_light(c);
        }
        if let Some(c) = parse_color(self.surface_dark.as_ref())? {
            brand = brand.with_surface_dark(c);
        }
        if let Some(c) = parse_color(self.text_light.as_ref())? {
            brand = brand.with_text_light(c);
        }
        if let Some(c) = parse_color(self.text_dark.as_ref())? {
            brand = brand.with_text_dark(c);
        }
        if let Some(c) = parse_color(self.link.as_ref())? {
            brand = brand.with_link(c);
        }
        Ok(brand)
    }

    /// Entries set in `other` replace those in `self`.
    pub fn merge(&mut self, other: BrandConfig) {
        let fields = [
            (&mut self.primary, other.primary),
            (&mut self.secondary, other.secondary),
            (&mut self.surface_light, other.surface_light),
            (&mut self.surface_dark, other.surface_dark),
            (&mut self.text_light, other.text_light),
            (&mut self.text_dark, other.text_dark),
            (&mut self.link, other.link),
        ];
        for (field, value) in fields {
            if value.is_some() {
                *field = value;
            }
        }
    }
}

impl OverrideConfig {
    /// An override writing `value`, every axis wildcarded.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Add a component name.
    pub fn with_component(mut self, name: impl Into<String>) -> Self {
        self.components.push(name.into());
        self
    }

    /// Add a theme name.
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.themes.push(name.into());
        self
    }

    /// Add a state name.
    pub fn with_state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Add a style name.
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.styles.push(name.into());
        self
    }

    /// Resolve into registry writes.
    ///
    /// Each named style gets its own write so the value is parsed with
    /// [StyleValue::parse_for]. With no styles the value is parsed once with
    /// [StyleValue::parse] and broadcast; each bucket then keeps it only for
    /// the styles it fits (see [StyleValue::coerce_for]), so a named color
    /// reaches the color roles as a color and leaves groups alone. Empty
    /// values become removals.
    pub fn to_writes(&self) -> ThemeResult<Vec<(Navigator, Option<StyleValue>)>> {
        let components = self
            .components
            .iter()
            .map(|c| ComponentType::parse(c))
            .collect::<ThemeResult<Vec<_>>>()?;
        let themes = self
            .themes
            .iter()
            .map(|t| ThemeType::parse(t))
            .collect::<ThemeResult<Vec<_>>>()?;
        let states = self
            .states
            .iter()
            .map(|s| ComponentState::parse(s))
            .collect::<ThemeResult<Vec<_>>>()?;
        let styles = self
            .styles
            .iter()
            .map(|s| StyleType::parse(s))
            .collect::<ThemeResult<Vec<_>>>()?;

        let base = Navigator::new()
            .with_components(components)
            .with_themes(themes)
            .with_states(states);
        let non_empty = |value: StyleValue| Some(value).filter(|v| !v.is_empty());

        if styles.is_empty() {
            let value = StyleValue::parse(&self.value)?;
            return Ok(vec![(base, non_empty(value))]);
        }
        styles
            .into_iter()
            .map(|style| {
                let value = StyleValue::parse_for(style, &self.value)?;
                Ok((base.clone().with_style(style), non_empty(value)))
            })
            .collect()
    }
}

impl ThemeConfig {
    /// Create a configuration with default settings: follow the system, fall back to light.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeType::System,
            fallback_theme: ThemeType::Light,
            brand: BrandConfig::default(),
            overrides: Vec::new(),
        }
    }

    /// Create a configuration from environment variables, or defaults.
    ///
    /// Reads `TINCTURE_THEME` and `TINCTURE_THEME_FALLBACK`. Unknown values
    /// are ignored with a warning.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Some(theme) = Self::theme_from_env(THEME_ENV) {
            config.default_theme = theme;
        }

        if let Some(theme) = Self::theme_from_env(THEME_FALLBACK_ENV) {
            if theme == ThemeType::System {
                log::warn!("{} cannot be 'system', keeping {}", THEME_FALLBACK_ENV, config.fallback_theme);
            } else {
                config.fallback_theme = theme;
            }
        }

        config
    }

    fn theme_from_env(var: &str) -> Option<ThemeType> {
        let value = env::var(var).ok()?;
        match ThemeType::from_css_name(&value) {
            Some(theme) => Some(theme),
            None => {
                log::warn!("ignoring {}={:?}: unknown theme", var, value);
                None
            }
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        toml::from_str(content).map_err(|e| ThemeError::config_parse(e.to_string()))
    }

    /// Non-failing counterpart of [ThemeConfig::from_toml].
    pub fn try_from_toml(content: &str) -> Option<Self> {
        Self::from_toml(content).ok()
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> ThemeResult<String> {
        toml::to_string_pretty(self).map_err(|e| ThemeError::config_parse(e.to_string()))
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, theme: ThemeType) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback theme.
    pub fn with_fallback_theme(mut self, theme: ThemeType) -> Self {
        self.fallback_theme = theme;
        self
    }

    /// Set the brand colors.
    pub fn with_brand(mut self, brand: BrandConfig) -> Self {
        self.brand = brand;
        self
    }

    /// Append an override.
    pub fn with_override(mut self, entry: OverrideConfig) -> Self {
        self.overrides.push(entry);
        self
    }

    /// Layer `other` over `self`: its themes win, its brand entries replace
    /// set ones, its overrides are appended.
    pub fn merge(mut self, other: ThemeConfig) -> Self {
        self.default_theme = other.default_theme;
        self.fallback_theme = other.fallback_theme;
        self.brand.merge(other.brand);
        self.overrides.extend(other.overrides);
        self
    }

    /// The concrete theme to show, given the platform preference if known.
    pub fn initial_theme(&self, system_preference: Option<ThemeType>) -> ThemeType {
        match self.default_theme {
            ThemeType::System => system_preference
                .filter(|t| *t != ThemeType::System)
                .unwrap_or(self.fallback_theme),
            theme => theme,
        }
    }

    /// Build the brand cascade and apply every override. The first invalid entry fails the build.
    pub fn build_registry(&self) -> ThemeResult<ThemeRegistry> {
        let mut registry = ThemeBuilder::from_brand(&self.brand.to_brand()?);
        for entry in &self.overrides {
            for (navigator, value) in entry.to_writes()? {
                registry.set(&navigator, value);
            }
        }
        Ok(registry)
    }

    /// Like [ThemeConfig::build_registry], skipping invalid brand colors and overrides with a warning.
    pub fn build_registry_lenient(&self) -> ThemeRegistry {
        let brand = self.brand.to_brand().unwrap_or_else(|e| {
            log::warn!("invalid brand configuration, using defaults: {}", e);
            Brand::default()
        });
        let mut registry = ThemeBuilder::from_brand(&brand);
        for entry in &self.overrides {
            match entry.to_writes() {
                Ok(writes) => {
                    for (navigator, value) in writes {
                        registry.set(&navigator, value);
                    }
                }
                Err(e) => log::warn!("skipping override {:?}: {}", entry, e),
            }
        }
        registry
    }

    /// Build a [ThemeManager] showing [ThemeConfig::default_theme].
    pub fn build_manager(&self) -> ThemeResult<ThemeManager> {
        let manager = ThemeManager::new(self.build_registry()?)
            .with_active_theme(self.default_theme)
            .with_system_preference(self.fallback_theme);
        log::debug!(
            "theme manager configured: {} (fallback {})",
            self.default_theme,
            self.fallback_theme
        );
        Ok(manager)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::MINIMUM_CONTRAST;
    use crate::css::CssPrefix;
    use tincture_color::contrast::contrast_ratio;

    const SAMPLE: &str = r##"
default_theme = "dark"
fallback_theme = "high-contrast-light"

[brand]
primary = "#6200EE"
link = "deep purple 200"

[[overrides]]
components = ["link"]
themes = ["dark"]
states = ["visited"]
styles = ["color", "text-decoration-color"]
value = "pink 200"

[[overrides]]
components = ["body"]
styles = ["margin"]
value = "4px 8px"
"##;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, ThemeType::System);
        assert_eq!(config.fallback_theme, ThemeType::Light);
        assert_eq!(config.initial_theme(None), ThemeType::Light);
        assert_eq!(config.initial_theme(Some(ThemeType::Dark)), ThemeType::Dark);
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.default_theme, ThemeType::Dark);
        assert_eq!(config.fallback_theme, ThemeType::HighContrastLight);
        assert_eq!(config.brand.primary.as_deref(), Some("#6200EE"));
        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.initial_theme(Some(ThemeType::Light)), ThemeType::Dark);
    }

    #[test]
    fn test_from_toml_rejects_bad_theme() {
        let err = ThemeConfig::from_toml(r#"default_theme = "sepia""#).unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ThemeConfig::from_toml(SAMPLE).unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides_apply() {
        let config = ThemeConfig::from_toml(SAMPLE).unwrap();
        let registry = config.build_registry().unwrap();

        let visited = registry
            .get(ComponentType::Link, ThemeType::Dark, ComponentState::Visited)
            .unwrap();
        let pink = Color::parse("pink-200").unwrap();
        assert_eq!(visited.color(StyleType::Color), Some(pink));
        assert_eq!(visited.color(StyleType::TextDecorationColor), Some(pink));

        let nav = Navigator::for_bucket(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .with_style(StyleType::Margin);
        assert_eq!(
            registry.build_css(&nav, &CssPrefix::empty()),
            "margin-block-start:4px;margin-inline-end:8px;margin-block-end:4px;margin-inline-start:8px;"
        );
    }

    #[test]
    fn test_strict_and_lenient_builds() {
        let config = ThemeConfig::new()
            .with_override(OverrideConfig::new("red").with_component("sidebar"))
            .with_override(
                OverrideConfig::new("")
                    .with_component("body")
                    .with_style("margin"),
            );
        assert!(matches!(
            config.build_registry(),
            Err(ThemeError::UnknownAxisValue { axis: "component", .. })
        ));

        let registry = config.build_registry_lenient();
        let body = registry
            .get(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .unwrap();
        assert!(body.get(StyleType::Margin).is_none());
    }

    #[test]
    fn test_invalid_brand_color() {
        let config = ThemeConfig::new().with_brand(BrandConfig {
            primary: Some("#GG0000".into()),
            ..BrandConfig::default()
        });
        assert!(matches!(config.build_registry(), Err(ThemeError::Color(_))));
        assert!(!config.build_registry_lenient().is_empty());
    }

    #[test]
    fn test_merge() {
        let base = ThemeConfig::from_toml(SAMPLE).unwrap();
        let user = ThemeConfig::new()
            .with_default_theme(ThemeType::Light)
            .with_brand(BrandConfig {
                link: Some("teal".into()),
                ..BrandConfig::default()
            })
            .with_override(OverrideConfig::new("inherit").with_style("color"));
        let merged = base.merge(user);
        assert_eq!(merged.default_theme, ThemeType::Light);
        assert_eq!(merged.brand.primary.as_deref(), Some("#6200EE"));
        assert_eq!(merged.brand.link.as_deref(), Some("teal"));
        assert_eq!(merged.overrides.len(), 3);
    }

    #[test]
    fn test_try_from_toml() {
        assert!(ThemeConfig::try_from_toml(SAMPLE).is_some());
        assert!(ThemeConfig::try_from_toml("default_theme = 3").is_none());
    }

    #[test]
    fn test_wildcard_style_override_keeps_style_kinds() {
        let registry = ThemeConfig::new()
            .with_override(
                OverrideConfig::new("white")
                    .with_component("body")
                    .with_theme("light"),
            )
            .with_override(
                OverrideConfig::new("#FFFFFF")
                    .with_component("body")
                    .with_theme("light"),
            )
            .build_registry()
            .unwrap();

        let body = registry
            .get(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .unwrap();
        assert_eq!(body.color(StyleType::BackgroundColor), Some(Color::WHITE));
        for style in [StyleType::Color, StyleType::AccentColor] {
            let color = body.color(style).unwrap();
            assert!(contrast_ratio(color, Color::WHITE) >= MINIMUM_CONTRAST, "{style}");
        }

        let nav = Navigator::for_bucket(ComponentType::Body, ThemeType::Light, ComponentState::Default);
        let css = registry.build_css(&nav, &CssPrefix::empty());
        assert!(!css.contains("white"), "{css}");
        assert!(css.contains("margin-block-start:0;"), "{css}");
        assert!(!css.contains("margin-block-start:#"), "{css}");
    }

    #[test]
    fn test_override_writes() {
        let writes = OverrideConfig::new("unset")
            .with_theme("dark")
            .to_writes()
            .unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0.themes(), &[ThemeType::Dark]);
        assert!(writes[0].0.styles().is_empty());
        assert_eq!(
            writes[0].1,
            Some(StyleValue::Global(crate::style::GlobalKeyword::Unset))
        );

        let err = OverrideConfig::new("red").with_style("font-size").to_writes();
        assert!(matches!(err, Err(ThemeError::UnknownStyleType { .. })));
    }
}
