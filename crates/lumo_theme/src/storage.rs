//! Preference persistence
//!
//! The store persists a single key, [`PREFERENCE_KEY`], holding the raw
//! preference literal. Backends are plain key/value stores so they can share a
//! file with other settings.

use crate::error::StorageError;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use toml::{Table, Value};

/// Key under which the theme preference is persisted
pub const PREFERENCE_KEY: &str = "theme";

/// A durable key/value store for user preferences
pub trait PreferenceStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<FxHashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        storage
    }

    /// Storage that rejects every operation, like a browser with storage blocked
    pub fn unavailable() -> Self {
        Self {
            values: RwLock::default(),
            unavailable: true,
        }
    }

    /// Read a value without going through the trait
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::unavailable("memory storage disabled"))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML key/value file.
///
/// Writes are read-modify-write so keys owned by other tools survive.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/lumo/preferences.toml`, else `$HOME/.config/lumo/preferences.toml`
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME")
                    .filter(|dir| !dir.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .ok_or_else(|| StorageError::unavailable("no config directory (HOME is unset)"))?;

        Ok(base.join("lumo").join("preferences.toml"))
    }

    pub fn at_default_location() -> Result<Self, StorageError> {
        Self::default_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Table, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        contents.parse::<Table>().map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_table()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::warn!(path = %self.path.display(), key, value = %other, "ignoring non-string preference");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(StorageError::Parse { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "replacing malformed preferences file");
                Table::new()
            }
            Err(err) => return Err(err),
        };
        table.insert(key.to_string(), Value::String(value.to_string()));

        let contents = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), key, value, "preference stored");
        Ok(())
    }
}
