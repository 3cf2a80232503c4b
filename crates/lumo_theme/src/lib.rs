//! Lumo Theme
//!
//! Theme resolution for Lumo components: color and shadow tokens, a reactive
//! store for the user's light/dark/system preference, and shadow composition.
//!
//! # Overview
//!
//! - **Tokens**: [`ColorTokens`] addressed by [`ColorToken`] or dotted path,
//!   and [`ShadowKey`] definitions tinted by those tokens
//! - **Store**: [`ThemeStore`] resolves a [`ThemePreference`] into a
//!   [`ColorScheme`], follows the OS appearance while the preference is
//!   `system`, persists the raw preference, and notifies subscribers
//! - **Shadows**: [`compose_shadow`] stacks base, border, and focus layers
//!
//! # Quick Start
//!
//! ```rust
//! use lumo_theme::{
//!     compose_shadow, ColorScheme, ManualAppearance, MemoryStorage, ShadowOptions,
//!     ThemePreference, ThemeStore,
//! };
//! use std::sync::Arc;
//!
//! let appearance = Arc::new(ManualAppearance::new(false));
//! let store = ThemeStore::builder()
//!     .storage(Arc::new(MemoryStorage::new()))
//!     .appearance(appearance.clone())
//!     .build();
//!
//! assert_eq!(store.preference(), ThemePreference::System);
//! appearance.set_prefers_dark(true);
//! assert_eq!(store.resolved_theme(), ColorScheme::Dark);
//!
//! let tokens = store.color_tokens();
//! let shadow = compose_shadow("regular.card", &tokens, ShadowOptions::new().border());
//! assert_eq!(shadow.layers().len(), 3);
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod platform;
pub mod storage;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use compose::{
    compose, compose_shadow, ComposedShadow, FocusType, LayerRole, ShadowLayer, ShadowOptions,
};
pub use config::{ColorOverrides, StorageKind, ThemeSettings};
pub use error::{StorageError, ThemeError, ThemeResult};
pub use platform::{detect_system_color_scheme, ManualAppearance, SystemAppearance, WatchId};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, PREFERENCE_KEY};
pub use store::{Subscription, ThemeSnapshot, ThemeStore, ThemeStoreBuilder};
pub use theme::{ColorScheme, ThemeBundle, ThemePreference};
pub use themes::LumoTheme;
pub use tokens::*;
