//! Theme error types

use lumo_core::ColorParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the preference storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend cannot be used at all (no home directory, blocked storage)
    #[error("preference storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("failed to read preferences from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write preferences to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode preferences")]
    Serialize(#[from] toml::ser::Error),
}

impl StorageError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Theme-level errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A preference string outside `light`, `dark`, `system`
    #[error("invalid theme preference '{value}', expected light, dark, or system")]
    InvalidPreference { value: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to read theme settings from {}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to encode theme settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    /// A color override named a path that is not a color token
    #[error("unknown color token '{path}'")]
    UnknownColorToken { path: String },

    #[error("invalid color for '{path}'")]
    InvalidColor {
        path: String,
        #[source]
        source: ColorParseError,
    },
}

impl ThemeError {
    pub fn invalid_preference(value: impl Into<String>) -> Self {
        Self::InvalidPreference {
            value: value.into(),
        }
    }
}

/// Result type for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;
