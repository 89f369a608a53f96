//! The theme store: single source of truth for the active palette.
//!
//! Built once at startup and passed down explicitly. Lives on the UI thread;
//! it holds `Rc`-based backends and is intentionally neither `Send` nor `Sync`.

use std::fmt;

use super::palette::Palette;
use super::style::{DocumentStyle, StyleAdapter, ThemeClassList};
use super::ThemeName;
use crate::storage::PreferenceStorage;

/// Default key for the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Hydration lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Persistence not consulted yet; render with defaults.
    #[default]
    Uninitialized,
    /// Hydration has run (whatever it found).
    Ready,
}

/// Read-only view of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub name: ThemeName,
    pub palette: &'static Palette,
    pub is_hydrated: bool,
}

impl ThemeSnapshot {
    /// Palette views should paint with: the default one until hydrated.
    pub fn render_palette(&self) -> &'static Palette {
        if self.is_hydrated {
            self.palette
        } else {
            Palette::fallback()
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ThemeSnapshot)>;

/// Holds the active theme, persists it and pushes document style.
pub struct ThemeStore {
    active: ThemeName,
    lifecycle: Lifecycle,
    storage_key: String,
    storage: Box<dyn PreferenceStorage>,
    adapter: Box<dyn StyleAdapter>,
    classes: ThemeClassList,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Create a store in the default theme. Applies the default style once so the
    /// first render already has the custom properties set.
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        adapter: impl StyleAdapter + 'static,
    ) -> Self {
        let mut store = Self {
            active: ThemeName::default(),
            lifecycle: Lifecycle::Uninitialized,
            storage_key: THEME_STORAGE_KEY.to_string(),
            storage: Box::new(storage),
            adapter: Box::new(adapter),
            classes: ThemeClassList::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        };
        store.apply_style();
        store
    }

    /// Use a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Start from an existing class list on the global element.
    pub fn with_classes(mut self, classes: ThemeClassList) -> Self {
        self.classes = classes;
        self.apply_style();
        self
    }

    /// Active theme, its palette and whether hydration has run.
    pub fn current(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            name: self.active,
            palette: self.active.palette(),
            is_hydrated: self.is_hydrated(),
        }
    }

    pub fn theme(&self) -> ThemeName {
        self.active
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_hydrated(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Current document style (what the adapter last received).
    pub fn document_style(&self) -> DocumentStyle {
        DocumentStyle::new(self.active, self.classes.clone())
    }

    /// Switch theme. Persists, restyles and notifies even when unchanged.
    pub fn set_theme(&mut self, theme: ThemeName) {
        if theme != self.active {
            tracing::debug!(from = %self.active, to = %theme, "Switching theme");
        }
        self.active = theme;
        self.persist();
        self.apply_style();
        self.notify();
    }

    /// Switch theme by name; unknown names select the default theme.
    pub fn set_theme_by_name(&mut self, name: &str) {
        let theme = match name.parse::<ThemeName>() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::debug!("{}, using default", e);
                ThemeName::default()
            }
        };
        self.set_theme(theme);
    }

    /// Reconcile with the persisted preference. Runs at most once; returns
    /// whether this call performed the hydration.
    pub fn hydrate(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Ready {
            tracing::trace!("Theme store already hydrated");
            return false;
        }

        match self.storage.load(&self.storage_key) {
            Ok(Some(stored)) => match stored.parse::<ThemeName>() {
                Ok(theme) => {
                    tracing::debug!(theme = %theme, "Restored persisted theme");
                    self.active = theme;
                }
                Err(e) => tracing::debug!("Ignoring persisted theme: {}", e),
            },
            Ok(None) => tracing::debug!("No persisted theme"),
            Err(e) => tracing::warn!("Failed to load theme preference: {}", e),
        }

        self.lifecycle = Lifecycle::Ready;
        self.apply_style();
        self.notify();
        true
    }

    /// Register a listener called after every transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&ThemeSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.storage_key, self.active.as_str()) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    fn apply_style(&mut self) {
        let style = DocumentStyle::new(self.active, self.classes.clone());
        self.classes = style.classes.clone();
        self.adapter.apply(&style);
    }

    fn notify(&mut self) {
        let snapshot = self.current();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("active", &self.active)
            .field("lifecycle", &self.lifecycle)
            .field("storage_key", &self.storage_key)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::theme::style::NoopStyle;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
        let snapshot = store.current();
        assert_eq!(snapshot.name, ThemeName::Default);
        assert!(!snapshot.is_hydrated);
        assert_eq!(store.lifecycle(), Lifecycle::Uninitialized);
    }

    #[test]
    fn test_render_palette_before_hydration() {
        let mut store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
        store.set_theme(ThemeName::Velvet);
        let snapshot = store.current();
        assert_eq!(snapshot.palette, ThemeName::Velvet.palette());
        assert_eq!(snapshot.render_palette(), Palette::fallback());

        store.hydrate();
        assert_eq!(store.current().render_palette(), ThemeName::Velvet.palette());
    }

    #[test]
    fn test_construction_applies_default_style() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _store = ThemeStore::new(MemoryStorage::new(), move |s: &DocumentStyle| {
            sink.borrow_mut().push(s.theme)
        });
        assert_eq!(*seen.borrow(), vec![ThemeName::Default]);
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryStorage::new();
        let mut store =
            ThemeStore::new(storage.clone(), NoopStyle).with_storage_key("folio.theme");
        store.set_theme(ThemeName::Light);
        assert_eq!(storage.get("folio.theme").as_deref(), Some("light"));
        assert_eq!(storage.get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn test_with_classes_keeps_other_classes() {
        let store = ThemeStore::new(MemoryStorage::new(), NoopStyle)
            .with_classes(ThemeClassList::parse("antialiased"));
        assert_eq!(
            store.document_style().classes.to_attr(),
            "antialiased theme-default"
        );
    }

    #[test]
    fn test_unsubscribe_unknown() {
        let mut store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
        let id = store.subscribe(|_| {});
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }
}
