use crate::id::{ComponentState, ComponentType, ThemeType};
use crate::properties::StyleType;

/// Selects keys on each of the registry's four axes.
///
/// An empty list on an axis is a wildcard. For reads it visits every
/// populated key in insertion order. For writes it broadcasts into the
/// keys already present at that level, so a wildcard only reaches
/// buckets that exist.
///
/// ```rust
/// use tincture_theme::id::{ComponentState, ComponentType, ThemeType};
/// use tincture_theme::navigator::Navigator;
/// use tincture_theme::properties::StyleType;
///
/// let nav = Navigator::new()
///     .with_component(ComponentType::Link)
///     .with_themes([ThemeType::Light, ThemeType::Dark])
///     .with_style(StyleType::Color);
/// assert!(nav.states().is_empty());
/// assert_eq!(nav.themes().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Navigator {
    components: Vec<ComponentType>,
    themes: Vec<ThemeType>,
    states: Vec<ComponentState>,
    styles: Vec<StyleType>,
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if !list.contains(&value) {
        list.push(value);
    }
}

impl Navigator {
    /// A navigator with every axis wildcarded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator selecting exactly one bucket, every style.
    pub fn for_bucket(component: ComponentType, theme: ThemeType, state: ComponentState) -> Self {
        Self::new()
            .with_component(component)
            .with_theme(theme)
            .with_state(state)
    }

    /// Add a component.
    pub fn with_component(mut self, component: ComponentType) -> Self {
        push_unique(&mut self.components, component);
        self
    }

    /// Add several components.
    pub fn with_components(mut self, components: impl IntoIterator<Item = ComponentType>) -> Self {
        for component in components {
            push_unique(&mut self.components, component);
        }
        self
    }

    /// Add a theme.
    pub fn with_theme(mut self, theme: ThemeType) -> Self {
        push_unique(&mut self.themes, theme);
        self
    }

    /// Add several themes.
    pub fn with_themes(mut self, themes: impl IntoIterator<Item = ThemeType>) -> Self {
        for theme in themes {
            push_unique(&mut self.themes, theme);
        }
        self
    }

    /// Add a state.
    pub fn with_state(mut self, state: ComponentState) -> Self {
        push_unique(&mut self.states, state);
        self
    }

    /// Add several states.
    pub fn with_states(mut self, states: impl IntoIterator<Item = ComponentState>) -> Self {
        for state in states {
            push_unique(&mut self.states, state);
        }
        self
    }

    /// Add a style.
    pub fn with_style(mut self, style: StyleType) -> Self {
        push_unique(&mut self.styles, style);
        self
    }

    /// Add several styles.
    pub fn with_styles(mut self, styles: impl IntoIterator<Item = StyleType>) -> Self {
        for style in styles {
            push_unique(&mut self.styles, style);
        }
        self
    }

    /// Selected components; empty means all.
    pub fn components(&self) -> &[ComponentType] {
        &self.components
    }

    /// Selected themes; empty means all.
    pub fn themes(&self) -> &[ThemeType] {
        &self.themes
    }

    /// Selected states; empty means all.
    pub fn states(&self) -> &[ComponentState] {
        &self.states
    }

    /// Selected styles; empty means all.
    pub fn styles(&self) -> &[StyleType] {
        &self.styles
    }

    /// Whether every axis is a wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.components.is_empty()
            && self.themes.is_empty()
            && self.states.is_empty()
            && self.styles.is_empty()
    }
}
