#![warn(missing_docs)]

//! # Tincture Theme Registry
//!
//! Deterministic CSS theming on top of [tincture_color]. A
//! [ThemeRegistry](registry::ThemeRegistry) stores style values in a sparse
//! four-axis tree (component, theme, state, style), keeps every bucket's
//! foreground colors at WCAG AA contrast against its background, and renders
//! any slice of the tree as CSS declarations or scoped custom properties.
//!
//! ## Overview
//!
//! - **[id]**: the [ComponentType](id::ComponentType), [ThemeType](id::ThemeType)
//!   and [ComponentState](id::ComponentState) axes
//! - **[properties]**: the [StyleType](properties::StyleType) axis
//! - **[style]**: [StyleValue](style::StyleValue) and its dimension/group types
//! - **[bucket]**: one leaf and its contrast pass
//! - **[navigator]**: axis selections for reads and writes
//! - **[registry]**: the tree, `set` and `build_css`
//! - **[css]**: the CSS text builder
//! - **[brand]**: default cascade from a handful of brand colors
//! - **[config]**: TOML/environment configuration
//! - **[manager]**: the runtime facade with change notification
//!
//! ## Usage
//!
//! ```rust
//! use tincture_color::Color;
//! use tincture_theme::brand::{Brand, ThemeBuilder};
//! use tincture_theme::id::{ComponentState, ComponentType, ThemeType};
//! use tincture_theme::manager::ThemeManager;
//! use tincture_theme::navigator::Navigator;
//! use tincture_theme::properties::StyleType;
//!
//! let registry = ThemeBuilder::from_brand(&Brand::from_primary(Color::parse("teal").unwrap()));
//! let mut manager = ThemeManager::new(registry);
//!
//! let link = Navigator::new()
//!     .with_component(ComponentType::Link)
//!     .with_style(StyleType::TextDecorationColor);
//! manager.set_override(&link, None);
//!
//! let css = manager.resolve(ComponentType::Link, ThemeType::Dark, ComponentState::Hovered);
//! assert!(css.starts_with("background-color:#121212FF;color:#"));
//! assert!(!css.contains("text-decoration-color"));
//! ```

/// Contains the [axis_map::AxisMap] slot map used by every registry level.
pub mod axis_map;
/// Contains the brand cascade and [brand::ThemeBuilder].
pub mod brand;
/// Contains the [bucket::Bucket] style leaf.
pub mod bucket;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains CSS text building.
pub mod css;
/// Contains theme error types.
pub mod error;
/// Contains the registry axis enumerations.
pub mod id;
/// Contains theme management and change notification.
pub mod manager;
/// Contains the [navigator::Navigator] axis selection.
pub mod navigator;
/// Contains type-safe style property keys.
pub mod properties;
/// Contains the [registry::ThemeRegistry] tree.
pub mod registry;
/// Contains style values.
pub mod style;

pub use error::{ThemeError, ThemeResult};
