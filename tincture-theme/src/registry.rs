//! # Hierarchical Registry
//!
//! [ThemeRegistry] is a sparse four-level tree:
//! component -> theme -> state -> [Bucket]. Each level is an [AxisMap], so
//! lookups index a fixed slot array while iteration follows insertion order.
//!
//! Writes ([ThemeRegistry::set]) create missing nodes for explicitly named
//! keys and broadcast wildcard axes into the nodes that already exist.
//! Reads ([ThemeRegistry::build_css]) visit explicitly named keys only if
//! they exist and visit every existing key on a wildcard axis.
//!
//! ```rust
//! use tincture_color::Color;
//! use tincture_theme::css::CssPrefix;
//! use tincture_theme::id::{ComponentState, ComponentType, ThemeType};
//! use tincture_theme::navigator::Navigator;
//! use tincture_theme::properties::StyleType;
//! use tincture_theme::registry::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::new();
//! let bucket = Navigator::for_bucket(ComponentType::Surface, ThemeType::Light, ComponentState::Default);
//! registry.set(&bucket.clone().with_style(StyleType::BackgroundColor), Some(Color::WHITE.into()));
//! registry.set(&bucket.clone().with_style(StyleType::Color), Some(Color::BLACK.into()));
//!
//! assert_eq!(
//!     registry.build_css(&bucket, &CssPrefix::empty()),
//!     "background-color:#FFFFFFFF;color:#000000FF;"
//! );
//! assert_eq!(
//!     registry.build_css(&bucket.with_style(StyleType::Color), &CssPrefix::new("tc")),
//!     "--tc-surface-light-default-color:#000000FF;"
//! );
//! ```

use crate::axis_map::AxisMap;
use crate::bucket::Bucket;
use crate::css::{CssBuilder, CssPrefix};
use crate::id::{Axis, ComponentState, ComponentType, ThemeType};
use crate::navigator::Navigator;
use crate::style::StyleValue;

/// States of one (component, theme) pair.
pub type StateMap = AxisMap<ComponentState, Bucket, { ComponentState::COUNT }>;
/// Themes of one component.
pub type ThemeMap = AxisMap<ThemeType, StateMap, { ThemeType::COUNT }>;
/// The registry root.
pub type ComponentMap = AxisMap<ComponentType, ThemeMap, { ComponentType::COUNT }>;

/// Keys a write reaches on one axis: the explicit list, or every existing key.
fn write_keys<K: Axis, V, const N: usize>(explicit: &[K], map: Option<&AxisMap<K, V, N>>) -> Vec<K> {
    if explicit.is_empty() {
        map.map(|m| m.keys().collect()).unwrap_or_default()
    } else {
        explicit.to_vec()
    }
}

/// Keys a read visits on one axis: explicit keys that exist, or every existing key.
fn read_keys<K: Axis, V, const N: usize>(explicit: &[K], map: &AxisMap<K, V, N>) -> Vec<K> {
    if explicit.is_empty() {
        map.keys().collect()
    } else {
        explicit
            .iter()
            .copied()
            .filter(|key| map.contains_key(*key))
            .collect()
    }
}

/// The sparse component -> theme -> state -> bucket tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeRegistry {
    root: ComponentMap,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` (or remove, when `None` or empty) at every target of `navigator`.
    ///
    /// Explicit keys are created on demand, but only along paths that end in
    /// a bucket receiving a value. Wildcard axes reach the keys already
    /// present at that level. [ThemeType::System] is never stored;
    /// naming it is skipped with a warning. Returns the number of
    /// (bucket, style) writes performed.
    pub fn set(&mut self, navigator: &Navigator, value: Option<StyleValue>) -> usize {
        let themes: Vec<ThemeType> = navigator
            .themes()
            .iter()
            .copied()
            .filter(|theme| {
                if *theme == ThemeType::System {
                    log::warn!("skipping write to the system theme alias");
                    false
                } else {
                    true
                }
            })
            .collect();
        if !navigator.themes().is_empty() && themes.is_empty() {
            log::debug!("write resolved to no targets: {:?}", navigator);
            return 0;
        }

        // A missing bucket is only created when the write stores something in it.
        let value = value.filter(|v| !v.is_empty());
        let creates = value.as_ref().is_some_and(|v| {
            navigator
                .styles()
                .iter()
                .any(|style| v.coerce_for(*style).is_some())
        });

        let mut written = 0;
        for component in write_keys(navigator.components(), Some(&self.root)) {
            for theme in write_keys(&themes, self.root.get(component)) {
                let existing = self.root.get(component).and_then(|t| t.get(theme));
                let states: Vec<ComponentState> = write_keys(navigator.states(), existing)
                    .into_iter()
                    .filter(|state| creates || existing.is_some_and(|m| m.contains_key(*state)))
                    .collect();
                if states.is_empty() {
                    continue;
                }

                let state_map = self
                    .root
                    .get_or_insert_with(component, ThemeMap::new)
                    .get_or_insert_with(theme, StateMap::new);
                for state in states {
                    let bucket = state_map.get_or_insert_with(state, Bucket::new);
                    written += bucket.apply(navigator.styles(), value.as_ref());
                }
            }
        }

        if written == 0 {
            log::debug!("write resolved to no targets: {:?}", navigator);
        }
        written
    }

    /// Render every bucket `navigator` reaches, in traversal order.
    ///
    /// With a non-empty `prefix`, each level appends its CSS name to the
    /// prefix and declarations become custom properties.
    pub fn build_css(&self, navigator: &Navigator, prefix: &CssPrefix) -> String {
        let mut out = CssBuilder::new();
        let visited = self.render_into(navigator, prefix, &mut out);
        log::debug!("rendered {} bucket(s) for {:?}", visited, navigator);
        out.finish()
    }

    /// Like [ThemeRegistry::build_css], appending to `out`. Returns the number of buckets visited.
    pub fn render_into(&self, navigator: &Navigator, prefix: &CssPrefix, out: &mut CssBuilder) -> usize {
        let mut visited = 0;
        for component in read_keys(navigator.components(), &self.root) {
            let Some(theme_map) = self.root.get(component) else {
                continue;
            };
            let component_prefix = prefix.push(component.css_name());
            for theme in read_keys(navigator.themes(), theme_map) {
                let Some(state_map) = theme_map.get(theme) else {
                    continue;
                };
                let theme_prefix = component_prefix.push(theme.css_name());
                for state in read_keys(navigator.states(), state_map) {
                    let Some(bucket) = state_map.get(state) else {
                        continue;
                    };
                    bucket.render(navigator.styles(), &theme_prefix.push(state.css_name()), out);
                    visited += 1;
                }
            }
        }
        visited
    }

    /// The bucket at (component, theme, state), if present.
    pub fn get(&self, component: ComponentType, theme: ThemeType, state: ComponentState) -> Option<&Bucket> {
        self.root.get(component)?.get(theme)?.get(state)
    }

    /// Every bucket with its keys, in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentType, ThemeType, ComponentState, &Bucket)> + '_ {
        self.root.iter().flat_map(|(component, themes)| {
            themes.iter().flat_map(move |(theme, states)| {
                states
                    .iter()
                    .map(move |(state, bucket)| (component, theme, state, bucket))
            })
        })
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.iter().count()
    }

    /// Whether the registry holds no bucket.
    pub fn is_empty(&self) -> bool {
        self.bucket_count() == 0
    }

    /// Components present, in insertion order.
    pub fn components(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.root.keys()
    }
}
