//! Style tables
//!
//! A [`StyleTable`] maps (variant, state) to a [`StyleEntry`] written in color
//! tokens. Tables are validated when built: every declared pair must have an
//! entry and nothing outside the declaration may appear. Resolving an entry
//! against concrete [`ColorTokens`] yields a [`VisualStyleRecord`].

use crate::error::ConfigurationError;
use crate::state::InteractionState;
use lumo_core::Color;
use lumo_theme::{compose, ColorToken, ColorTokens, FocusType, ShadowKey, ShadowOptions};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// A closed set of named choices (style variants, sizes)
pub trait Named: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    fn name(self) -> &'static str;
}

/// Background paint of an entry
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Fill {
    Token(ColorToken),
    Transparent,
}

impl Fill {
    pub fn resolve(self, tokens: &ColorTokens) -> Color {
        match self {
            Fill::Token(token) => tokens.get(token),
            Fill::Transparent => Color::TRANSPARENT,
        }
    }
}

/// Shadow of an entry: a shadow key plus border and focus options
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct ShadowStyle {
    pub key: ShadowKey,
    pub options: ShadowOptions,
}

/// One cell of a style table, expressed in tokens
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct StyleEntry {
    pub background: Fill,
    pub text: ColorToken,
    pub border: Option<ColorToken>,
    pub shadow: Option<ShadowStyle>,
}

impl StyleEntry {
    pub fn filled(background: ColorToken, text: ColorToken) -> Self {
        Self {
            background: Fill::Token(background),
            text,
            border: None,
            shadow: None,
        }
    }

    /// Transparent background
    pub fn clear(text: ColorToken) -> Self {
        Self {
            background: Fill::Transparent,
            text,
            border: None,
            shadow: None,
        }
    }

    pub fn border(mut self, border: ColorToken) -> Self {
        self.border = Some(border);
        self
    }

    pub fn shadow(mut self, key: ShadowKey) -> Self {
        let options = self.shadow.map(|shadow| shadow.options).unwrap_or_default();
        self.shadow = Some(ShadowStyle { key, options });
        self
    }

    /// Add focus rings, on top of the entry's shadow or on their own
    pub fn focus(mut self, focus: FocusType) -> Self {
        let mut shadow = self.shadow.unwrap_or(ShadowStyle {
            key: ShadowKey::ComponentFocus,
            options: ShadowOptions::default(),
        });
        shadow.options.focus = Some(focus);
        self.shadow = Some(shadow);
        self
    }

    pub fn resolve(&self, tokens: &ColorTokens) -> VisualStyleRecord {
        VisualStyleRecord {
            background: self.background.resolve(tokens),
            text: tokens.get(self.text),
            border: self.border.map(|token| tokens.get(token)),
            shadow: match self.shadow {
                Some(shadow) => compose(shadow.key, tokens, shadow.options).to_css(),
                None => "none".to_string(),
            },
        }
    }
}

/// Concrete style for one element in one state
#[derive(Clone, Debug, PartialEq)]
pub struct VisualStyleRecord {
    pub background: Color,
    pub text: Color,
    pub border: Option<Color>,
    /// CSS `box-shadow` value, `none` when there is no shadow
    pub shadow: String,
}

impl VisualStyleRecord {
    /// Transparent background, primary text, no border, no shadow
    pub fn unstyled(tokens: &ColorTokens) -> Self {
        Self {
            background: Color::TRANSPARENT,
            text: tokens.text.primary,
            border: None,
            shadow: "none".to_string(),
        }
    }
}

/// Validated (variant, state) lookup for one component kind
#[derive(Clone, Debug)]
pub struct StyleTable<V: Named> {
    kind: &'static str,
    entries: FxHashMap<V, FxHashMap<InteractionState, StyleEntry>>,
}

impl<V: Named> StyleTable<V> {
    pub fn builder(kind: &'static str) -> StyleTableBuilder<V> {
        StyleTableBuilder {
            kind,
            entries: FxHashMap::default(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn get(&self, variant: V, state: InteractionState) -> Result<&StyleEntry, ConfigurationError> {
        let states = self
            .entries
            .get(&variant)
            .ok_or(ConfigurationError::UndeclaredVariant {
                kind: self.kind,
                variant: variant.name(),
            })?;

        states.get(&state).ok_or(ConfigurationError::UndeclaredState {
            kind: self.kind,
            state,
        })
    }

    /// Number of (variant, state) entries
    pub fn len(&self) -> usize {
        self.entries.values().map(|states| states.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collects entries, then checks them against the declared variants and states
pub struct StyleTableBuilder<V: Named> {
    kind: &'static str,
    entries: FxHashMap<V, FxHashMap<InteractionState, StyleEntry>>,
}

impl<V: Named> StyleTableBuilder<V> {
    pub fn entry(mut self, variant: V, state: InteractionState, entry: StyleEntry) -> Self {
        self.entries.entry(variant).or_default().insert(state, entry);
        self
    }

    /// All rows of one variant
    pub fn variant<I>(mut self, variant: V, rows: I) -> Self
    where
        I: IntoIterator<Item = (InteractionState, StyleEntry)>,
    {
        self.entries.entry(variant).or_default().extend(rows);
        self
    }

    pub fn build(
        self,
        variants: &[V],
        states: &[InteractionState],
    ) -> Result<StyleTable<V>, ConfigurationError> {
        for (variant, rows) in &self.entries {
            if !variants.contains(variant) {
                return Err(ConfigurationError::UndeclaredVariant {
                    kind: self.kind,
                    variant: variant.name(),
                });
            }
            if let Some(state) = rows.keys().find(|state| !states.contains(state)) {
                return Err(ConfigurationError::UndeclaredState {
                    kind: self.kind,
                    state: *state,
                });
            }
        }

        for variant in variants {
            for state in states {
                let present = self
                    .entries
                    .get(variant)
                    .is_some_and(|rows| rows.contains_key(state));
                if !present {
                    return Err(ConfigurationError::MissingEntry {
                        kind: self.kind,
                        variant: variant.name(),
                        state: *state,
                    });
                }
            }
        }

        Ok(StyleTable {
            kind: self.kind,
            entries: self.entries,
        })
    }
}

/// Unwrap a built table; an incomplete table is a programming error
pub(crate) fn complete<V: Named>(table: Result<StyleTable<V>, ConfigurationError>) -> StyleTable<V> {
    match table {
        Ok(table) => table,
        Err(err) => panic!("invalid style table: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_theme::LumoTheme;

    #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
    enum Tone {
        Plain,
        Loud,
    }

    impl Named for Tone {
        fn name(self) -> &'static str {
            match self {
                Tone::Plain => "plain",
                Tone::Loud => "loud",
            }
        }
    }

    const STATES: &[InteractionState] = &[InteractionState::Default, InteractionState::Hover];

    fn row(state: InteractionState) -> (InteractionState, StyleEntry) {
        (state, StyleEntry::clear(ColorToken::TextPrimary))
    }

    #[test]
    fn gap_is_reported_at_build() {
        let err = StyleTable::builder("tone")
            .variant(Tone::Plain, STATES.iter().copied().map(row))
            .variant(Tone::Loud, [row(InteractionState::Default)])
            .build(&[Tone::Plain, Tone::Loud], STATES)
            .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::MissingEntry {
                kind: "tone",
                variant: "loud",
                state: InteractionState::Hover,
            }
        );
    }

    #[test]
    fn stray_state_is_rejected() {
        let err = StyleTable::builder("tone")
            .variant(Tone::Plain, STATES.iter().copied().map(row))
            .entry(
                Tone::Plain,
                InteractionState::Selected,
                StyleEntry::clear(ColorToken::TextPrimary),
            )
            .build(&[Tone::Plain], STATES)
            .unwrap_err();

        assert!(matches!(err, ConfigurationError::UndeclaredState { .. }));
    }

    #[test]
    fn entry_resolves_against_tokens() {
        let tokens = LumoTheme::light();
        let record = StyleEntry::filled(ColorToken::StatePrimary, ColorToken::TextInverse)
            .border(ColorToken::BorderDefault)
            .resolve(&tokens);

        assert_eq!(record.background, tokens.bg.state.primary);
        assert_eq!(record.text, tokens.text.inverse);
        assert_eq!(record.border, Some(tokens.border.default));
        assert_eq!(record.shadow, "none");
    }

    #[test]
    fn focus_without_shadow_uses_focus_key() {
        let entry = StyleEntry::clear(ColorToken::TextPrimary).focus(FocusType::Misc);
        let shadow = entry.shadow.unwrap();
        assert_eq!(shadow.key, ShadowKey::ComponentFocus);
        assert_eq!(shadow.options.focus, Some(FocusType::Misc));
    }
}
