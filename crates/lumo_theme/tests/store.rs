use lumo_core::Color;
use lumo_theme::{
    ColorScheme, FileStorage, LumoTheme, ManualAppearance, MemoryStorage, PreferenceStorage,
    ThemeError, ThemePreference, ThemeSettings, ThemeStore, PREFERENCE_KEY,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn store_with(
    storage: Arc<MemoryStorage>,
    appearance: Arc<ManualAppearance>,
) -> ThemeStore {
    ThemeStore::builder()
        .storage(storage)
        .appearance(appearance)
        .build()
}

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lumo-theme-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("preferences.toml")
}

#[test]
fn every_preference_round_trips() {
    let store = store_with(Arc::new(MemoryStorage::new()), Arc::new(ManualAppearance::new(false)));

    for preference in ThemePreference::ALL {
        store.set_preference(preference);
        assert_eq!(store.preference(), preference);
    }
}

#[test]
fn system_preference_follows_the_os_signal() {
    let appearance = Arc::new(ManualAppearance::new(false));
    let store = store_with(Arc::new(MemoryStorage::new()), appearance.clone());

    store.set_preference(ThemePreference::System);
    assert_eq!(store.resolved_theme(), ColorScheme::Light);

    appearance.set_prefers_dark(true);
    assert_eq!(store.resolved_theme(), ColorScheme::Dark);

    appearance.set_prefers_dark(false);
    assert_eq!(store.resolved_theme(), ColorScheme::Light);
}

#[test]
fn explicit_preference_ignores_the_os_signal() {
    let appearance = Arc::new(ManualAppearance::new(false));
    let store = store_with(Arc::new(MemoryStorage::new()), appearance.clone());

    store.set_preference(ThemePreference::Light);
    appearance.set_prefers_dark(true);
    assert_eq!(store.resolved_theme(), ColorScheme::Light);
    assert!(!store.is_watching_system());
}

#[test]
fn system_dark_persists_the_raw_preference() {
    let storage = Arc::new(MemoryStorage::new());
    let appearance = Arc::new(ManualAppearance::new(true));
    let store = store_with(storage.clone(), appearance);

    store.set_preference(ThemePreference::System);

    assert_eq!(store.resolved_theme(), ColorScheme::Dark);
    assert_eq!(storage.get(PREFERENCE_KEY).as_deref(), Some("system"));
}

#[test]
fn unsubscribed_callback_never_runs_again() {
    let appearance = Arc::new(ManualAppearance::new(false));
    let store = store_with(Arc::new(MemoryStorage::new()), appearance.clone());
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_preference(ThemePreference::Dark);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(subscription.is_active());

    assert!(subscription.unsubscribe());

    store.set_preference(ThemePreference::Light);
    store.set_preference(ThemePreference::System);
    appearance.set_prefers_dark(true);
    appearance.set_prefers_dark(false);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscribers_receive_the_new_resolved_theme_only_on_change() {
    let appearance = Arc::new(ManualAppearance::new(true));
    let store = store_with(Arc::new(MemoryStorage::new()), appearance);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let log = seen.clone();
    let _subscription = store.subscribe(move |scheme| log.lock().unwrap().push(scheme));

    // system already resolves to dark
    store.set_preference(ThemePreference::Dark);
    store.set_preference(ThemePreference::Light);
    store.set_preference(ThemePreference::Light);

    assert_eq!(*seen.lock().unwrap(), vec![ColorScheme::Light]);
}

#[test]
fn subscriber_may_unsubscribe_itself_during_notification() {
    let store = store_with(Arc::new(MemoryStorage::new()), Arc::new(ManualAppearance::new(false)));
    let calls = Arc::new(AtomicUsize::new(0));
    let slot = Arc::new(Mutex::new(None::<lumo_theme::Subscription>));

    let counter = calls.clone();
    let own = slot.clone();
    let subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        if let Some(subscription) = own.lock().unwrap().take() {
            subscription.unsubscribe();
        }
    });
    *slot.lock().unwrap() = Some(subscription);

    store.set_preference(ThemePreference::Dark);
    store.set_preference(ThemePreference::Light);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn preference_churn_keeps_at_most_one_os_watch() {
    let appearance = Arc::new(ManualAppearance::new(false));
    let store = store_with(Arc::new(MemoryStorage::new()), appearance.clone());
    assert_eq!(appearance.watcher_count(), 1, "default preference is system");

    for _ in 0..5 {
        store.set_preference(ThemePreference::System);
        store.set_preference(ThemePreference::System);
        assert_eq!(appearance.watcher_count(), 1);

        store.set_preference(ThemePreference::Dark);
        assert_eq!(appearance.watcher_count(), 0);
    }

    store.set_preference(ThemePreference::System);
    drop(store);
    assert_eq!(appearance.watcher_count(), 0, "dropping the store releases its watch");
}

#[test]
fn invalid_preference_string_is_rejected_without_change() {
    let storage = Arc::new(MemoryStorage::new());
    let store = store_with(storage.clone(), Arc::new(ManualAppearance::new(false)));
    store.set_preference(ThemePreference::Dark);

    let err = store.set_preference_str("sepia").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidPreference { ref value } if value == "sepia"));
    assert_eq!(store.preference(), ThemePreference::Dark);
    assert_eq!(storage.get(PREFERENCE_KEY).as_deref(), Some("dark"));

    store.set_preference_str("light").unwrap();
    assert_eq!(store.resolved_theme(), ColorScheme::Light);
}

#[test]
fn unavailable_storage_keeps_the_session_working() {
    let appearance = Arc::new(ManualAppearance::new(false));
    let store = ThemeStore::builder()
        .storage(Arc::new(MemoryStorage::unavailable()))
        .appearance(appearance)
        .default_preference(ThemePreference::Light)
        .build();

    assert!(!store.is_persistent());
    assert_eq!(store.preference(), ThemePreference::Light);

    store.set_preference(ThemePreference::Dark);
    assert_eq!(store.preference(), ThemePreference::Dark);
    assert_eq!(store.resolved_theme(), ColorScheme::Dark);
    assert!(!store.is_persistent());
}

#[test]
fn startup_prefers_persisted_then_default_then_system() {
    let appearance = Arc::new(ManualAppearance::new(false));

    let persisted = ThemeStore::builder()
        .storage(Arc::new(MemoryStorage::with_value(PREFERENCE_KEY, "dark")))
        .appearance(appearance.clone())
        .default_preference(ThemePreference::Light)
        .build();
    assert_eq!(persisted.preference(), ThemePreference::Dark);

    let defaulted = ThemeStore::builder()
        .storage(Arc::new(MemoryStorage::new()))
        .appearance(appearance.clone())
        .default_preference(ThemePreference::Light)
        .build();
    assert_eq!(defaulted.preference(), ThemePreference::Light);

    let bare = store_with(Arc::new(MemoryStorage::new()), appearance);
    assert_eq!(bare.preference(), ThemePreference::System);
}

#[test]
fn malformed_persisted_value_falls_back_to_default() {
    let storage = Arc::new(MemoryStorage::with_value(PREFERENCE_KEY, "DARK"));
    let store = ThemeStore::builder()
        .storage(storage.clone())
        .appearance(Arc::new(ManualAppearance::new(false)))
        .default_preference(ThemePreference::Light)
        .build();

    assert_eq!(store.preference(), ThemePreference::Light);
    // building never writes
    assert_eq!(storage.get(PREFERENCE_KEY).as_deref(), Some("DARK"));
}

#[test]
fn color_tokens_follow_the_resolved_theme() {
    let store = store_with(Arc::new(MemoryStorage::new()), Arc::new(ManualAppearance::new(false)));

    store.set_preference(ThemePreference::Dark);
    let dark = store.color_tokens();
    assert!(Arc::ptr_eq(&dark, store.bundle().dark()));
    assert_eq!(*dark, LumoTheme::dark());

    assert_eq!(store.toggle_scheme(), ColorScheme::Light);
    assert_eq!(store.preference(), ThemePreference::Light);
    assert!(Arc::ptr_eq(&store.color_tokens(), store.bundle().light()));
}

#[test]
fn file_storage_round_trips_and_keeps_foreign_keys() {
    let path = temp_path("file-round-trip");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "font = \"inter\"\n").unwrap();

    let storage = Arc::new(FileStorage::new(&path));
    let store = ThemeStore::builder()
        .storage(storage.clone())
        .appearance(Arc::new(ManualAppearance::new(false)))
        .build();
    store.set_preference(ThemePreference::Dark);
    drop(store);

    assert_eq!(storage.load("font").unwrap().as_deref(), Some("inter"));
    assert_eq!(storage.load(PREFERENCE_KEY).unwrap().as_deref(), Some("dark"));

    let reopened = ThemeStore::builder()
        .storage(Arc::new(FileStorage::new(&path)))
        .appearance(Arc::new(ManualAppearance::new(false)))
        .build();
    assert_eq!(reopened.preference(), ThemePreference::Dark);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn store_from_memory_settings() {
    let settings = ThemeSettings::from_toml_str(
        r##"
        [theme]
        default_preference = "dark"
        storage = "memory"

        [theme.colors.dark]
        "highlight.default" = "#7c3aed"
        "##,
    )
    .unwrap();

    let store = ThemeStore::from_settings(&settings, Arc::new(ManualAppearance::new(false))).unwrap();
    assert_eq!(store.preference(), ThemePreference::Dark);
    assert!(store.is_persistent());
    assert_eq!(store.color_tokens().highlight.default, Color::from_hex(0x7C3AED));
}
