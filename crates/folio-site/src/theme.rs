//! Theme wiring for the site.
//!
//! The [`ThemeStore`] lives in a signal provided at the root. Its style adapter
//! writes each [`DocumentStyle`] into a second signal that [`ThemedRoot`]
//! renders as the root element's classes and inline custom properties.

use dioxus::prelude::*;
use folio_core::{DocumentStyle, SiteConfig, ThemeName, ThemeSnapshot, ThemeStore};

/// Shared theme state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub store: Signal<ThemeStore>,
    pub style: Signal<DocumentStyle>,
}

impl ThemeContext {
    /// Current snapshot; subscribes the calling component to theme changes.
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.store.read().current()
    }

    pub fn set_theme(&self, theme: ThemeName) {
        let mut store = self.store;
        store.write().set_theme(theme);
    }
}

/// Build the store and provide it to the tree. Hydration runs once after the
/// first render.
pub fn use_theme_provider(config: &'static SiteConfig) -> ThemeContext {
    let style = use_signal(DocumentStyle::default);

    let store = use_signal(move || {
        let mut style = style;
        // The initial apply runs during the first render; skip no-op writes
        let mut store = ThemeStore::new(config.storage(), move |s: &DocumentStyle| {
            if *style.peek() != *s {
                style.set(s.clone());
            }
        })
        .with_storage_key(config.storage_key.clone());
        store.subscribe(|snapshot| {
            tracing::info!(theme = %snapshot.name, hydrated = snapshot.is_hydrated, "Theme applied");
        });
        store
    });

    use_effect(move || {
        let mut store = store;
        store.write().hydrate();
    });

    use_context_provider(|| ThemeContext { store, style })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Root element carrying the theme marker class and custom properties.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();
    let style = theme.style.read();
    let classes = style.classes.to_attr();
    let inline = style.inline_style();

    rsx! {
        div {
            class: "themed-root {classes}",
            "data-theme": "{style.theme}",
            style: "{inline}",
            {children}
        }
    }
}
