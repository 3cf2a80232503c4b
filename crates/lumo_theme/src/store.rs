//! Reactive theme store
//!
//! [`ThemeStore`] owns the user's [`ThemePreference`], resolves it into a
//! [`ColorScheme`], persists the raw preference, and tells subscribers when
//! the resolved scheme changes.
//!
//! The preference and resolved scheme are stored together behind one lock so
//! readers never see a torn pair. The OS appearance watch exists exactly while
//! the preference is `system` and is released when the store is dropped.
//! Subscribers run after every lock is released, so they may call back into
//! the store.

use crate::config::ThemeSettings;
use crate::error::ThemeResult;
use crate::platform::{ManualAppearance, SystemAppearance, WatchId};
use crate::storage::{MemoryStorage, PreferenceStorage, PREFERENCE_KEY};
use crate::theme::{ColorScheme, ThemeBundle, ThemePreference};
use crate::themes::LumoTheme;
use crate::tokens::ColorTokens;
use lumo_core::{ObserverId, Observers};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

/// Preference and resolved scheme, read and written as one value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub resolved: ColorScheme,
}

struct StoreState {
    snapshot: ThemeSnapshot,
    system_watch: Option<WatchId>,
}

struct StoreInner {
    bundle: ThemeBundle,
    storage: Arc<dyn PreferenceStorage>,
    appearance: Arc<dyn SystemAppearance>,
    state: RwLock<StoreState>,
    subscribers: Observers<ColorScheme>,
    persistent: AtomicBool,
}

impl StoreInner {
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, preference: ThemePreference) {
        match self.storage.store(PREFERENCE_KEY, preference.as_str()) {
            Ok(()) => self.persistent.store(true, Ordering::SeqCst),
            Err(err) => {
                self.persistent.store(false, Ordering::SeqCst);
                tracing::warn!(error = %err, %preference, "theme preference not persisted; keeping it for this session");
            }
        }
    }

    /// Persist and apply under one write lock
    fn update(self: &Arc<Self>, preference: ThemePreference) -> Option<ColorScheme> {
        let mut state = self.write();
        self.persist(preference);
        self.apply(&mut state, preference)
    }

    /// Returns the new scheme if it changed
    fn apply(
        self: &Arc<Self>,
        state: &mut StoreState,
        preference: ThemePreference,
    ) -> Option<ColorScheme> {
        if preference.follows_system() {
            if state.system_watch.is_none() {
                state.system_watch = Some(self.watch_system());
            }
        } else if let Some(id) = state.system_watch.take() {
            self.appearance.unwatch(id);
        }

        let resolved = preference.resolve(self.appearance.prefers_dark());
        let previous = state.snapshot.resolved;
        state.snapshot = ThemeSnapshot {
            preference,
            resolved,
        };

        (previous != resolved).then_some(resolved)
    }

    fn watch_system(self: &Arc<Self>) -> WatchId {
        let weak = Arc::downgrade(self);
        let id = self.appearance.watch(Arc::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                inner.on_system_change(prefers_dark);
            }
        }));
        tracing::debug!("watching system appearance");
        id
    }

    fn on_system_change(&self, prefers_dark: bool) {
        let changed = {
            let mut state = self.write();
            if !state.snapshot.preference.follows_system() {
                return;
            }
            let resolved = ColorScheme::from_prefers_dark(prefers_dark);
            let previous = state.snapshot.resolved;
            state.snapshot.resolved = resolved;
            (previous != resolved).then_some(resolved)
        };

        if let Some(scheme) = changed {
            tracing::debug!(%scheme, "resolved theme followed system appearance");
            self.subscribers.notify(scheme);
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = state.system_watch.take() {
            self.appearance.unwatch(id);
        }
    }
}

/// Shared handle to a theme store. Clones refer to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    pub fn builder() -> ThemeStoreBuilder {
        ThemeStoreBuilder::default()
    }

    /// Store with the storage backend named in `settings`
    pub fn from_settings(
        settings: &ThemeSettings,
        appearance: Arc<dyn SystemAppearance>,
    ) -> ThemeResult<Self> {
        let mut builder = Self::builder()
            .bundle(settings.bundle()?)
            .storage(settings.open_storage()?)
            .appearance(appearance);
        if let Some(preference) = settings.default_preference {
            builder = builder.default_preference(preference);
        }
        Ok(builder.build())
    }

    pub fn preference(&self) -> ThemePreference {
        self.inner.read().snapshot.preference
    }

    pub fn resolved_theme(&self) -> ColorScheme {
        self.inner.read().snapshot.resolved
    }

    /// Preference and resolved scheme from the same instant
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.read().snapshot
    }

    /// Tokens for the resolved scheme
    pub fn color_tokens(&self) -> Arc<ColorTokens> {
        let resolved = self.resolved_theme();
        self.inner.bundle.for_scheme(resolved).clone()
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.inner.bundle
    }

    /// Persist and apply a preference, then notify subscribers if the
    /// resolved scheme changed. Persistence failures are logged, not returned.
    pub fn set_preference(&self, preference: ThemePreference) {
        if let Some(scheme) = self.inner.update(preference) {
            tracing::debug!(%preference, %scheme, "resolved theme changed");
            self.inner.subscribers.notify(scheme);
        }
    }

    /// Parse and apply a preference literal. Anything other than `light`,
    /// `dark`, or `system` leaves the preference unchanged.
    pub fn set_preference_str(&self, value: &str) -> ThemeResult<()> {
        let preference = value.parse::<ThemePreference>().map_err(|err| {
            tracing::warn!(value, "rejected theme preference");
            err
        })?;
        self.set_preference(preference);
        Ok(())
    }

    /// Switch to the explicit opposite of the resolved scheme
    pub fn toggle_scheme(&self) -> ColorScheme {
        let next = self.resolved_theme().toggle();
        self.set_preference(next.into());
        next
    }

    /// Call `callback` with the new resolved scheme whenever it changes
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        let id = self.inner.subscribers.insert(callback);
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// True while an OS appearance watch is registered
    pub fn is_watching_system(&self) -> bool {
        self.inner.read().system_watch.is_some()
    }

    /// False after the last write to storage failed
    pub fn is_persistent(&self) -> bool {
        self.inner.persistent.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.inner.bundle.name())
            .field("snapshot", &self.snapshot())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// A revocable subscription to resolved-theme changes
#[must_use = "dropping a Subscription keeps the callback registered; call unsubscribe() to revoke it"]
#[derive(Debug)]
pub struct Subscription {
    id: ObserverId,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Revoke the callback. It is never invoked after this returns.
    pub fn unsubscribe(self) -> bool {
        match self.store.upgrade() {
            Some(inner) => inner.subscribers.remove(self.id),
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.store
            .upgrade()
            .is_some_and(|inner| inner.subscribers.contains(self.id))
    }
}

/// Builder for [`ThemeStore`]
#[derive(Default)]
pub struct ThemeStoreBuilder {
    bundle: Option<ThemeBundle>,
    storage: Option<Arc<dyn PreferenceStorage>>,
    appearance: Option<Arc<dyn SystemAppearance>>,
    default_preference: Option<ThemePreference>,
}

impl ThemeStoreBuilder {
    /// Token bundle (defaults to the Lumo theme)
    pub fn bundle(mut self, bundle: ThemeBundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Persistence backend (defaults to session-only memory)
    pub fn storage(mut self, storage: Arc<dyn PreferenceStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// OS appearance signal (defaults to a detected [`ManualAppearance`])
    pub fn appearance(mut self, appearance: Arc<dyn SystemAppearance>) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Used when nothing valid is persisted
    pub fn default_preference(mut self, preference: ThemePreference) -> Self {
        self.default_preference = Some(preference);
        self
    }

    /// Read the persisted preference (else the default, else `system`) and
    /// start the store. Building never writes to storage.
    pub fn build(self) -> ThemeStore {
        let bundle = self.bundle.unwrap_or_else(LumoTheme::bundle);
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let appearance = self
            .appearance
            .unwrap_or_else(|| Arc::new(ManualAppearance::detect()));

        let (persisted, persistent) = load_persisted(storage.as_ref());
        let preference = persisted
            .or(self.default_preference)
            .unwrap_or_default();

        let inner = Arc::new(StoreInner {
            bundle,
            storage,
            appearance,
            state: RwLock::new(StoreState {
                snapshot: ThemeSnapshot {
                    preference,
                    resolved: ColorScheme::default(),
                },
                system_watch: None,
            }),
            subscribers: Observers::new(),
            persistent: AtomicBool::new(persistent),
        });
        {
            let mut state = inner.write();
            inner.apply(&mut state, preference);
        }

        let store = ThemeStore { inner };
        tracing::debug!(
            %preference,
            resolved = %store.resolved_theme(),
            persistent,
            "theme store ready"
        );
        store
    }
}

fn load_persisted(storage: &dyn PreferenceStorage) -> (Option<ThemePreference>, bool) {
    match storage.load(PREFERENCE_KEY) {
        Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
            Ok(preference) => (Some(preference), true),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring persisted theme preference");
                (None, true)
            }
        },
        Ok(None) => (None, true),
        Err(err) => {
            tracing::warn!(error = %err, "theme preference storage unavailable; using defaults");
            (None, false)
        }
    }
}
