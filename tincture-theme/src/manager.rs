use std::sync::{Arc, RwLock};

use crate::css::{CssBuilder, CssPrefix};
use crate::id::{ComponentState, ComponentType, ThemeType};
use crate::navigator::Navigator;
use crate::registry::ThemeRegistry;
use crate::style::StyleValue;

/// Handle returned by [ThemeManager::subscribe].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// What changed, passed to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeChange {
    /// An override was written.
    Override {
        /// The targets of the write.
        navigator: Navigator,
        /// Number of (bucket, style) writes performed.
        written: usize,
    },
    /// The active theme changed.
    ActiveTheme {
        /// The previously active theme.
        previous: ThemeType,
        /// The newly active theme.
        current: ThemeType,
    },
    /// The platform preference that [ThemeType::System] resolves to changed.
    SystemPreference {
        /// The previous preference.
        previous: ThemeType,
        /// The new preference.
        current: ThemeType,
    },
    /// The whole registry was replaced.
    Replaced,
}

type Subscriber = Box<dyn Fn(&ThemeChange) + Send + Sync>;

/// Owns the published registry and the active theme selection.
///
/// Readers take [ThemeManager::snapshot] and render from it without locks.
/// Writes go through `&mut self` and copy the registry on write, so
/// snapshots handed out earlier never change.
pub struct ThemeManager {
    registry: Arc<ThemeRegistry>,
    active_theme: ThemeType,
    system_preference: ThemeType,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeManager {
    /// Create a manager following the system theme, with a light system preference.
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            active_theme: ThemeType::System,
            system_preference: ThemeType::Light,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Set the initial active theme.
    pub fn with_active_theme(mut self, theme: ThemeType) -> Self {
        self.active_theme = theme;
        self
    }

    /// Set the initial system preference. [ThemeType::System] is ignored.
    pub fn with_system_preference(mut self, theme: ThemeType) -> Self {
        if theme != ThemeType::System {
            self.system_preference = theme;
        }
        self
    }

    /// The published registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// A shared handle to the current registry. Later writes do not affect it.
    pub fn snapshot(&self) -> Arc<ThemeRegistry> {
        Arc::clone(&self.registry)
    }

    /// The selected theme, possibly [ThemeType::System].
    pub fn active_theme(&self) -> ThemeType {
        self.active_theme
    }

    /// The theme [ThemeType::System] currently resolves to.
    pub fn system_preference(&self) -> ThemeType {
        self.system_preference
    }

    /// Resolve [ThemeType::System] to the system preference; other themes map to themselves.
    pub fn resolve_theme(&self, theme: ThemeType) -> ThemeType {
        match theme {
            ThemeType::System => self.system_preference,
            theme => theme,
        }
    }

    /// The concrete theme being shown.
    pub fn effective_theme(&self) -> ThemeType {
        self.resolve_theme(self.active_theme)
    }

    /// CSS declarations of one bucket.
    pub fn resolve(&self, component: ComponentType, theme: ThemeType, state: ComponentState) -> String {
        self.resolve_with_prefix(component, theme, state, "")
    }

    /// CSS declarations of one bucket, as custom properties scoped under `prefix`.
    pub fn resolve_with_prefix(
        &self,
        component: ComponentType,
        theme: ThemeType,
        state: ComponentState,
        prefix: &str,
    ) -> String {
        let navigator = Navigator::for_bucket(component, self.resolve_theme(theme), state);
        self.registry.build_css(&navigator, &CssPrefix::new(prefix))
    }

    /// Every bucket of the effective theme as custom properties in a `:root{...}` block.
    pub fn render_stylesheet(&self, prefix: &str) -> String {
        let navigator = Navigator::new().with_theme(self.effective_theme());
        let prefix = CssPrefix::new(prefix);
        let mut css = CssBuilder::new();
        css.block(":root", |b| {
            self.registry.render_into(&navigator, &prefix, b);
        });
        css.finish()
    }

    /// Write an override into the registry and notify subscribers.
    ///
    /// Returns the number of (bucket, style) writes performed. Snapshots
    /// taken before the call keep their contents.
    pub fn set_override(&mut self, navigator: &Navigator, value: Option<StyleValue>) -> usize {
        let written = Arc::make_mut(&mut self.registry).set(navigator, value);
        self.notify(&ThemeChange::Override {
            navigator: navigator.clone(),
            written,
        });
        written
    }

    /// Replace the whole registry and notify subscribers.
    pub fn replace_registry(&mut self, registry: ThemeRegistry) {
        self.registry = Arc::new(registry);
        self.notify(&ThemeChange::Replaced);
    }

    /// Select the active theme. Notifies subscribers when it changes.
    pub fn set_active_theme(&mut self, theme: ThemeType) {
        if theme == self.active_theme {
            return;
        }
        let previous = std::mem::replace(&mut self.active_theme, theme);
        self.notify(&ThemeChange::ActiveTheme {
            previous,
            current: theme,
        });
    }

    /// Set what [ThemeType::System] resolves to. Notifies subscribers when it changes.
    ///
    /// [ThemeType::System] itself is not a valid preference and is ignored.
    pub fn set_system_preference(&mut self, theme: ThemeType) {
        if theme == ThemeType::System {
            log::warn!("ignoring 'system' as a system preference");
            return;
        }
        if theme == self.system_preference {
            return;
        }
        let previous = std::mem::replace(&mut self.system_preference, theme);
        self.notify(&ThemeChange::SystemPreference {
            previous,
            current: theme,
        });
    }

    /// Register a callback invoked after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&self, change: &ThemeChange) {
        log::debug!("theme change: {:?}", change);
        for (_, subscriber) in &self.subscribers {
            subscriber(change);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeRegistry::new())
    }
}

/// A theme manager that can be shared across threads.
pub type SharedThemeManager = Arc<RwLock<ThemeManager>>;

/// Create a shared theme manager around `registry`.
pub fn create_shared_theme_manager(registry: ThemeRegistry) -> SharedThemeManager {
    Arc::new(RwLock::new(ThemeManager::new(registry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::StyleType;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tincture_color::Color;

    fn manager() -> ThemeManager {
        let mut registry = ThemeRegistry::new();
        for (theme, bg, fg) in [
            (ThemeType::Light, Color::WHITE, Color::BLACK),
            (ThemeType::Dark, Color::BLACK, Color::WHITE),
        ] {
            let nav = Navigator::for_bucket(ComponentType::Body, theme, ComponentState::Default);
            registry.set(&nav.clone().with_style(StyleType::BackgroundColor), Some(bg.into()));
            registry.set(&nav.with_style(StyleType::Color), Some(fg.into()));
        }
        ThemeManager::new(registry)
    }

    #[test]
    fn test_resolve_follows_system_preference() {
        let mut manager = manager();
        assert_eq!(
            manager.resolve(ComponentType::Body, ThemeType::System, ComponentState::Default),
            "background-color:#FFFFFFFF;color:#000000FF;"
        );
        manager.set_system_preference(ThemeType::Dark);
        assert_eq!(
            manager.resolve(ComponentType::Body, ThemeType::System, ComponentState::Default),
            "background-color:#000000FF;color:#FFFFFFFF;"
        );
        assert_eq!(manager.effective_theme(), ThemeType::Dark);
    }

    #[test]
    fn test_resolve_with_prefix() {
        let manager = manager();
        assert_eq!(
            manager.resolve_with_prefix(
                ComponentType::Body,
                ThemeType::Dark,
                ComponentState::Default,
                "app"
            ),
            "--app-body-dark-default-background-color:#000000FF;--app-body-dark-default-color:#FFFFFFFF;"
        );
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut manager = manager();
        let before = manager.snapshot();
        let nav = Navigator::for_bucket(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .with_style(StyleType::Color);
        assert_eq!(manager.set_override(&nav, None), 1);

        let old = before
            .get(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .unwrap();
        assert_eq!(old.color(StyleType::Color), Some(Color::BLACK));
        let new = manager
            .registry()
            .get(ComponentType::Body, ThemeType::Light, ComponentState::Default)
            .unwrap();
        assert_eq!(new.color(StyleType::Color), None);
    }

    #[test]
    fn test_subscribers_receive_changes() {
        let mut manager = manager();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = manager.subscribe(move |change| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(change.clone());
            }
        });

        manager.set_active_theme(ThemeType::Dark);
        manager.set_active_theme(ThemeType::Dark);
        manager.set_system_preference(ThemeType::System);
        manager.set_system_preference(ThemeType::HighContrastLight);
        assert!(manager.unsubscribe(id));
        assert!(!manager.unsubscribe(id));
        manager.set_active_theme(ThemeType::Light);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ThemeChange::ActiveTheme {
                    previous: ThemeType::System,
                    current: ThemeType::Dark,
                },
                ThemeChange::SystemPreference {
                    previous: ThemeType::Light,
                    current: ThemeType::HighContrastLight,
                },
            ]
        );
    }

    #[test]
    fn test_render_stylesheet() {
        let manager = manager().with_active_theme(ThemeType::Dark);
        assert_eq!(
            manager.render_stylesheet("tc"),
            ":root{--tc-body-dark-default-background-color:#000000FF;--tc-body-dark-default-color:#FFFFFFFF;}"
        );
    }

    #[test]
    fn test_shared_manager() {
        let shared = create_shared_theme_manager(ThemeRegistry::new());
        if let Ok(mut manager) = shared.write() {
            manager.set_active_theme(ThemeType::HighContrastDark);
        }
        let manager = shared.read().unwrap();
        assert_eq!(manager.effective_theme(), ThemeType::HighContrastDark);
    }
}
