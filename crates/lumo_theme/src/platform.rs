//! OS appearance signal
//!
//! The store only needs a "prefers dark" boolean and a way to hear about
//! changes. [`SystemAppearance`] is that seam; the platform layer implements it
//! or drives a [`ManualAppearance`].

use crate::theme::ColorScheme;
use lumo_core::{ObserverId, Observers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle for a registered appearance watch
pub type WatchId = ObserverId;

/// Callback receiving the new "prefers dark" value
pub type SchemeCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Env var forcing the detected scheme (`light` or `dark`)
pub const COLOR_SCHEME_ENV: &str = "LUMO_COLOR_SCHEME";

/// The OS "prefers dark" signal with change notification
pub trait SystemAppearance: Send + Sync {
    fn prefers_dark(&self) -> bool;

    /// Start delivering changes to `callback`
    fn watch(&self, callback: SchemeCallback) -> WatchId;

    /// Stop delivering changes. Returns false for an unknown id.
    fn unwatch(&self, id: WatchId) -> bool;
}

/// An appearance signal set from inside the process.
///
/// Watchers hear only actual changes; setting the current value is a no-op.
#[derive(Debug)]
pub struct ManualAppearance {
    prefers_dark: AtomicBool,
    watchers: Observers<bool>,
}

impl ManualAppearance {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            watchers: Observers::new(),
        }
    }

    /// Seed from [`detect_system_color_scheme`]
    pub fn detect() -> Self {
        Self::new(detect_system_color_scheme() == ColorScheme::Dark)
    }

    /// Update the signal. Returns true if the value changed and watchers ran.
    pub fn set_prefers_dark(&self, prefers_dark: bool) -> bool {
        let previous = self.prefers_dark.swap(prefers_dark, Ordering::SeqCst);
        if previous == prefers_dark {
            return false;
        }

        tracing::debug!(prefers_dark, "system appearance changed");
        self.watchers.notify(prefers_dark);
        true
    }

    /// Number of live watches
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}

impl Default for ManualAppearance {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SystemAppearance for ManualAppearance {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn watch(&self, callback: SchemeCallback) -> WatchId {
        self.watchers.insert_shared(callback)
    }

    fn unwatch(&self, id: WatchId) -> bool {
        self.watchers.remove(id)
    }
}

/// Best-effort read of the desktop color scheme.
///
/// `LUMO_COLOR_SCHEME` wins when set to `light` or `dark`; otherwise a
/// `GTK_THEME` ending in `:dark` or `-dark` means dark. Anything else is light.
pub fn detect_system_color_scheme() -> ColorScheme {
    let explicit = std::env::var(COLOR_SCHEME_ENV).ok();
    let gtk_theme = std::env::var("GTK_THEME").ok();
    let scheme = scheme_from_env(explicit.as_deref(), gtk_theme.as_deref());
    tracing::debug!(%scheme, "detected system color scheme");
    scheme
}

fn scheme_from_env(explicit: Option<&str>, gtk_theme: Option<&str>) -> ColorScheme {
    match explicit.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("dark") => return ColorScheme::Dark,
        Some("light") => return ColorScheme::Light,
        Some(other) if !other.is_empty() => {
            tracing::warn!(value = other, "ignoring unrecognized {}", COLOR_SCHEME_ENV);
        }
        _ => {}
    }

    match gtk_theme.map(str::to_ascii_lowercase) {
        Some(theme) if theme.ends_with(":dark") || theme.ends_with("-dark") => ColorScheme::Dark,
        _ => ColorScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn watchers_hear_only_changes() {
        let appearance = ManualAppearance::new(false);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        let id = appearance.watch(Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(!appearance.set_prefers_dark(false));
        assert!(appearance.set_prefers_dark(true));
        assert!(appearance.prefers_dark());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(appearance.unwatch(id));
        assert_eq!(appearance.watcher_count(), 0);
        appearance.set_prefers_dark(false);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn explicit_override_beats_gtk_theme() {
        assert_eq!(scheme_from_env(Some("dark"), None), ColorScheme::Dark);
        assert_eq!(
            scheme_from_env(Some("Light"), Some("Adwaita:dark")),
            ColorScheme::Light
        );
    }

    #[test]
    fn gtk_dark_suffix_means_dark() {
        assert_eq!(scheme_from_env(None, Some("Adwaita:dark")), ColorScheme::Dark);
        assert_eq!(scheme_from_env(None, Some("Yaru-dark")), ColorScheme::Dark);
        assert_eq!(scheme_from_env(Some("sepia"), Some("Adwaita")), ColorScheme::Light);
        assert_eq!(scheme_from_env(None, None), ColorScheme::Light);
    }
}
