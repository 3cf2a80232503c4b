//! Locating and loading `lumo.toml`

use anyhow::{Context, Result};
use lumo_theme::config::THEME_CONFIG_ENV;
use lumo_theme::ThemeSettings;
use std::path::{Path, PathBuf};

/// Settings file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lumo.toml";

/// Load the effective settings.
///
/// An explicit `--config` wins. Otherwise `LUMO_THEME_CONFIG` is honored, and
/// `./lumo.toml` is read only when that variable is unset. Env overrides apply
/// on top in every case.
pub fn load_settings(explicit: Option<&Path>) -> Result<ThemeSettings> {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if std::env::var_os(THEME_CONFIG_ENV).is_none() && local.is_file() => Some(local),
        None => None,
    };

    let settings = match file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            let mut settings = ThemeSettings::from_file(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            settings.apply_env(|name| std::env::var(name).ok());
            settings
        }
        None => ThemeSettings::from_env_or_default()
            .with_context(|| format!("Failed to load settings named by {}", THEME_CONFIG_ENV))?,
    };

    tracing::debug!(?settings, "effective theme settings");
    Ok(settings)
}
