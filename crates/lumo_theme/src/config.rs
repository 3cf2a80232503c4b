//! Theme settings
//!
//! Settings live under a `[theme]` table so they can share a file with other
//! application configuration:
//!
//! ```toml
//! [theme]
//! default_preference = "system"
//! storage = "file"
//! storage_path = "/home/me/.config/lumo/preferences.toml"
//!
//! [theme.colors.common]
//! "highlight.default" = "#7c3aed"
//!
//! [theme.colors.dark]
//! "bg.primary" = "#0b0b0f"
//! ```

use crate::error::{ThemeError, ThemeResult};
use crate::storage::{FileStorage, MemoryStorage, PreferenceStorage};
use crate::theme::{ThemeBundle, ThemePreference};
use crate::themes::LumoTheme;
use crate::tokens::{ColorToken, ColorTokens};
use lumo_core::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Env var overriding the default preference
pub const THEME_ENV: &str = "LUMO_THEME";
/// Env var selecting storage: `memory`, or a path to a preferences file
pub const THEME_STORAGE_ENV: &str = "LUMO_THEME_STORAGE";
/// Env var pointing at a settings file
pub const THEME_CONFIG_ENV: &str = "LUMO_THEME_CONFIG";

/// Where the preference is persisted
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

/// Startup settings for a theme store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Used when nothing valid is persisted; `None` means `system`
    pub default_preference: Option<ThemePreference>,
    pub storage: StorageKind,
    /// Overrides the default preferences file location
    pub storage_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "ColorOverrides::is_empty")]
    pub colors: ColorOverrides,
}

/// Color overrides keyed by token path, values `#RRGGBB` or `#RRGGBBAA`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    /// Applied to both schemes, before the per-scheme tables
    pub common: BTreeMap<String, String>,
    pub light: BTreeMap<String, String>,
    pub dark: BTreeMap<String, String>,
}

impl ColorOverrides {
    pub fn is_empty(&self) -> bool {
        self.common.is_empty() && self.light.is_empty() && self.dark.is_empty()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct SettingsFile {
    #[serde(default)]
    theme: ThemeSettings,
}

impl ThemeSettings {
    pub fn from_toml_str(contents: &str) -> ThemeResult<Self> {
        let file: SettingsFile = toml::from_str(contents)?;
        Ok(file.theme)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded theme settings");
        Ok(settings)
    }

    /// Settings from `LUMO_THEME_CONFIG` (or defaults), then env overrides
    pub fn from_env_or_default() -> ThemeResult<Self> {
        let mut settings = match std::env::var_os(THEME_CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path))?,
            _ => Self::default(),
        };
        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Apply `LUMO_THEME` and `LUMO_THEME_STORAGE` using `lookup` to read variables.
    ///
    /// An invalid `LUMO_THEME` is logged and ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(THEME_ENV).filter(|v| !v.trim().is_empty()) {
            match value.trim().parse::<ThemePreference>() {
                Ok(preference) => self.default_preference = Some(preference),
                Err(err) => tracing::warn!(error = %err, "ignoring {}", THEME_ENV),
            }
        }

        if let Some(value) = lookup(THEME_STORAGE_ENV).filter(|v| !v.trim().is_empty()) {
            let value = value.trim();
            if value.eq_ignore_ascii_case("memory") {
                self.storage = StorageKind::Memory;
            } else {
                self.storage = StorageKind::File;
                self.storage_path = Some(PathBuf::from(value));
            }
        }
    }

    pub fn to_toml(&self) -> ThemeResult<String> {
        let file = SettingsFile {
            theme: self.clone(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// The built-in theme with the color overrides applied
    pub fn bundle(&self) -> ThemeResult<ThemeBundle> {
        if self.colors.is_empty() {
            return Ok(LumoTheme::bundle());
        }

        let mut light = LumoTheme::light();
        let mut dark = LumoTheme::dark();
        for (tokens, scheme) in [(&mut light, &self.colors.light), (&mut dark, &self.colors.dark)] {
            apply_overrides(tokens, &self.colors.common)?;
            apply_overrides(tokens, scheme)?;
        }
        Ok(ThemeBundle::new(LumoTheme::NAME, light, dark))
    }

    /// Build the storage backend these settings name
    pub fn open_storage(&self) -> ThemeResult<Arc<dyn PreferenceStorage>> {
        let storage: Arc<dyn PreferenceStorage> = match self.storage {
            StorageKind::Memory => Arc::new(MemoryStorage::new()),
            StorageKind::File => match &self.storage_path {
                Some(path) => Arc::new(FileStorage::new(path)),
                None => Arc::new(FileStorage::at_default_location()?),
            },
        };
        Ok(storage)
    }
}

fn apply_overrides(tokens: &mut ColorTokens, overrides: &BTreeMap<String, String>) -> ThemeResult<()> {
    for (path, value) in overrides {
        let token = ColorToken::from_path(path)
            .ok_or_else(|| ThemeError::UnknownColorToken { path: path.clone() })?;
        let color = value
            .parse::<Color>()
            .map_err(|source| ThemeError::InvalidColor {
                path: path.clone(),
                source,
            })?;
        *tokens.get_mut(token) = color;
    }
    Ok(())
}
