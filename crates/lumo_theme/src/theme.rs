//! Color schemes, user preferences, and light/dark token bundles

use crate::error::ThemeError;
use crate::tokens::ColorTokens;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The concrete scheme actually applied (the resolved theme)
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Map the OS "prefers dark" signal onto a scheme
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's choice. Persisted verbatim; `System` defers to the OS signal.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// The literal persisted for this preference
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn follows_system(self) -> bool {
        self == ThemePreference::System
    }

    /// Resolve against the current OS signal
    pub fn resolve(self, prefers_dark: bool) -> ColorScheme {
        match self {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => ColorScheme::from_prefers_dark(prefers_dark),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Accepts exactly `light`, `dark`, or `system`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::invalid_preference(other)),
        }
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemePreference::Light,
            ColorScheme::Dark => ThemePreference::Dark,
        }
    }
}

/// A named light/dark pair of color tokens.
///
/// Token sets are created once and shared; switching schemes hands out the
/// other `Arc`, never a mutated copy.
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<ColorTokens>,
    dark: Arc<ColorTokens>,
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: ColorTokens, dark: ColorTokens) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<ColorTokens> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &Arc<ColorTokens> {
        &self.light
    }

    pub fn dark(&self) -> &Arc<ColorTokens> {
        &self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::LumoTheme;

    #[test]
    fn preference_parses_only_known_literals() {
        for preference in ThemePreference::ALL {
            assert_eq!(preference.as_str().parse::<ThemePreference>().unwrap(), preference);
        }

        for bad in ["", "Dark", "auto", "light "] {
            let err = bad.parse::<ThemePreference>().unwrap_err();
            assert!(matches!(err, ThemeError::InvalidPreference { .. }), "{bad:?}");
        }
    }

    #[test]
    fn preference_serializes_as_lowercase_literal() {
        let json = serde_json::to_string(&ThemePreference::System).unwrap();
        assert_eq!(json, "\"system\"");

        let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemePreference::Dark);
    }

    #[test]
    fn explicit_preferences_ignore_the_os_signal() {
        assert_eq!(ThemePreference::Light.resolve(true), ColorScheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ColorScheme::Dark);
        assert_eq!(ThemePreference::System.resolve(true), ColorScheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ColorScheme::Light);
    }

    #[test]
    fn bundle_hands_out_shared_token_sets() {
        let bundle = LumoTheme::bundle();
        let first = bundle.for_scheme(ColorScheme::Dark).clone();
        let second = bundle.for_scheme(ColorScheme::Dark).clone();
        assert!(Arc::ptr_eq(&first, &second));
        assert_ne!(
            bundle.for_scheme(ColorScheme::Light).bg.primary,
            bundle.for_scheme(ColorScheme::Dark).bg.primary
        );
    }
}
