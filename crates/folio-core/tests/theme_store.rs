//! End-to-end behavior of the theme store over real and failing backends.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::storage::PREFERENCES_FILE;
use folio_core::{
    DocumentStyle, FileStorage, MemoryStorage, NoopStyle, PreferenceStorage, StorageError,
    ThemeName, ThemeStore,
};
use tempfile::TempDir;

/// Backend whose reads and writes always fail.
struct BrokenStorage;

impl PreferenceStorage for BrokenStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::unavailable("storage disabled"))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::io("quota exceeded"))
    }
}

fn recording_store(storage: impl PreferenceStorage + 'static) -> (ThemeStore, Rc<RefCell<Vec<DocumentStyle>>>) {
    let applied = Rc::new(RefCell::new(Vec::new()));
    let sink = applied.clone();
    let store = ThemeStore::new(storage, move |style: &DocumentStyle| {
        sink.borrow_mut().push(style.clone())
    });
    (store, applied)
}

#[test]
fn set_theme_selects_name_and_palette() {
    let mut store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
    store.hydrate();
    for &theme in ThemeName::all() {
        store.set_theme(theme);
        let snapshot = store.current();
        assert_eq!(snapshot.name, theme);
        assert_eq!(snapshot.palette, theme.palette());
        assert_eq!(snapshot.render_palette(), theme.palette());
    }
}

#[test]
fn unknown_name_falls_back_to_default() {
    let mut store = ThemeStore::new(MemoryStorage::new(), NoopStyle);
    store.set_theme(ThemeName::Olive);
    for name in ["neon", "", "OLIVE ", "theme-light"] {
        store.set_theme_by_name(name);
        assert_eq!(store.theme(), ThemeName::Default, "name {name:?}");
    }
    store.set_theme_by_name("velvet");
    assert_eq!(store.theme(), ThemeName::Velvet);
}

#[test]
fn hydration_adopts_valid_values_only() {
    let cases = [
        ("light", ThemeName::Light),
        ("velvet", ThemeName::Velvet),
        ("", ThemeName::Default),
        ("{corrupt", ThemeName::Default),
        ("sepia", ThemeName::Default),
    ];
    for (stored, expected) in cases {
        let mut store = ThemeStore::new(MemoryStorage::with_value("theme", stored), NoopStyle);
        assert!(store.hydrate());
        assert_eq!(store.theme(), expected, "stored {stored:?}");
        assert!(store.is_hydrated());
    }

    let mut store = ThemeStore::new(BrokenStorage, NoopStyle);
    assert!(store.hydrate());
    assert_eq!(store.theme(), ThemeName::Default);
    assert!(store.is_hydrated());
}

#[test]
fn hydration_happens_once() {
    let storage = MemoryStorage::with_value("theme", "olive");
    let mut store = ThemeStore::new(storage.clone(), NoopStyle);
    assert!(!store.current().is_hydrated);

    assert!(store.hydrate());
    store.set_theme(ThemeName::Light);
    assert!(!store.hydrate());
    assert_eq!(store.theme(), ThemeName::Light);
    assert!(store.current().is_hydrated);
}

#[test]
fn setting_same_theme_twice_is_idempotent() {
    let once_storage = MemoryStorage::new();
    let mut once = ThemeStore::new(once_storage.clone(), NoopStyle);
    once.set_theme(ThemeName::Olive);

    let twice_storage = MemoryStorage::new();
    let mut twice = ThemeStore::new(twice_storage.clone(), NoopStyle);
    twice.set_theme(ThemeName::Olive);
    twice.set_theme(ThemeName::Olive);

    assert_eq!(once.current(), twice.current());
    assert_eq!(once.document_style(), twice.document_style());
    assert_eq!(once_storage.get("theme"), twice_storage.get("theme"));
}

#[test]
fn round_trip_through_memory_storage() {
    let storage = MemoryStorage::new();
    let mut first = ThemeStore::new(storage.clone(), NoopStyle);
    first.hydrate();
    first.set_theme(ThemeName::Olive);
    drop(first);

    let mut second = ThemeStore::new(storage, NoopStyle);
    assert_eq!(second.theme(), ThemeName::Default);
    second.hydrate();
    assert_eq!(second.theme(), ThemeName::Olive);
}

#[test]
fn round_trip_through_file_storage() {
    let dir = TempDir::new().unwrap();

    let mut first = ThemeStore::new(FileStorage::in_dir(dir.path()), NoopStyle);
    first.hydrate();
    first.set_theme(ThemeName::Velvet);

    let raw = std::fs::read_to_string(dir.path().join(PREFERENCES_FILE)).unwrap();
    assert!(raw.contains("\"velvet\""));

    let mut second = ThemeStore::new(FileStorage::in_dir(dir.path()), NoopStyle);
    second.hydrate();
    assert_eq!(second.theme(), ThemeName::Velvet);
}

#[test]
fn failing_write_still_switches_theme() {
    let (mut store, applied) = recording_store(BrokenStorage);
    store.hydrate();
    store.set_theme(ThemeName::Light);
    assert_eq!(store.theme(), ThemeName::Light);
    assert_eq!(applied.borrow().last().unwrap().theme, ThemeName::Light);
}

#[test]
fn every_transition_leaves_one_marker() {
    let (mut store, applied) = recording_store(MemoryStorage::with_value("theme", "olive"));
    store.hydrate();
    store.set_theme(ThemeName::Velvet);
    store.set_theme_by_name("nope");
    store.set_theme(ThemeName::Light);

    let applied = applied.borrow();
    // construction, hydration and three sets
    assert_eq!(applied.len(), 5);
    for style in applied.iter() {
        assert_eq!(style.classes.theme_markers(), vec![style.theme]);
        assert_eq!(style.property("--background"), Some(style.theme.palette().background));
        assert_eq!(style.body_foreground, style.theme.palette().foreground);
    }
    let themes: Vec<_> = applied.iter().map(|s| s.theme).collect();
    assert_eq!(
        themes,
        [
            ThemeName::Default,
            ThemeName::Olive,
            ThemeName::Velvet,
            ThemeName::Default,
            ThemeName::Light
        ]
    );
}

#[test]
fn subscribers_follow_transitions_until_unsubscribed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();

    let mut store = ThemeStore::new(MemoryStorage::with_value("theme", "light"), NoopStyle);
    let id = store.subscribe(move |snapshot| sink.borrow_mut().push((snapshot.name, snapshot.is_hydrated)));

    store.hydrate();
    store.set_theme(ThemeName::Olive);
    assert!(store.unsubscribe(id));
    store.set_theme(ThemeName::Velvet);

    assert_eq!(
        *seen.borrow(),
        vec![(ThemeName::Light, true), (ThemeName::Olive, true)]
    );
}
