//! Color tokens for theming
//!
//! Tokens are addressed either by the [`ColorToken`] enum or by their dotted
//! semantic path (`bg.state.primary`, `text.inverse`, ...). Both address the
//! same nested [`ColorTokens`] record.

use lumo_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Backgrounds
    BgPrimary,
    BgSecondary,
    BgTertiary,

    // Interactive fills
    StatePrimary,
    StatePrimaryHover,
    StatePrimaryPress,
    StateSecondary,
    StateSecondaryHover,
    StateSecondaryPress,
    StateSoft,
    StateSoftHover,
    StateSoftPress,
    StateGhostHover,
    StateGhostPress,
    StateDestructive,
    StateDestructiveHover,
    StateDestructivePress,
    StateDisabled,

    // Text
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    TextDisabled,
    TextDestructive,

    // Borders
    BorderDefault,
    BorderStrong,
    BorderHover,
    BorderDestructive,

    // Focus highlights
    Highlight,
    HighlightDestructive,
    HighlightSoft,
    HighlightInput,

    // Shadow tints
    ShadowSubtle,
    ShadowStrong,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 34] = [
        ColorToken::BgPrimary,
        ColorToken::BgSecondary,
        ColorToken::BgTertiary,
        ColorToken::StatePrimary,
        ColorToken::StatePrimaryHover,
        ColorToken::StatePrimaryPress,
        ColorToken::StateSecondary,
        ColorToken::StateSecondaryHover,
        ColorToken::StateSecondaryPress,
        ColorToken::StateSoft,
        ColorToken::StateSoftHover,
        ColorToken::StateSoftPress,
        ColorToken::StateGhostHover,
        ColorToken::StateGhostPress,
        ColorToken::StateDestructive,
        ColorToken::StateDestructiveHover,
        ColorToken::StateDestructivePress,
        ColorToken::StateDisabled,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextTertiary,
        ColorToken::TextInverse,
        ColorToken::TextDisabled,
        ColorToken::TextDestructive,
        ColorToken::BorderDefault,
        ColorToken::BorderStrong,
        ColorToken::BorderHover,
        ColorToken::BorderDestructive,
        ColorToken::Highlight,
        ColorToken::HighlightDestructive,
        ColorToken::HighlightSoft,
        ColorToken::HighlightInput,
        ColorToken::ShadowSubtle,
        ColorToken::ShadowStrong,
    ];

    /// Dotted semantic path of this token
    pub fn path(self) -> &'static str {
        match self {
            ColorToken::BgPrimary => "bg.primary",
            ColorToken::BgSecondary => "bg.secondary",
            ColorToken::BgTertiary => "bg.tertiary",
            ColorToken::StatePrimary => "bg.state.primary",
            ColorToken::StatePrimaryHover => "bg.state.primary_hover",
            ColorToken::StatePrimaryPress => "bg.state.primary_press",
            ColorToken::StateSecondary => "bg.state.secondary",
            ColorToken::StateSecondaryHover => "bg.state.secondary_hover",
            ColorToken::StateSecondaryPress => "bg.state.secondary_press",
            ColorToken::StateSoft => "bg.state.soft",
            ColorToken::StateSoftHover => "bg.state.soft_hover",
            ColorToken::StateSoftPress => "bg.state.soft_press",
            ColorToken::StateGhostHover => "bg.state.ghost_hover",
            ColorToken::StateGhostPress => "bg.state.ghost_press",
            ColorToken::StateDestructive => "bg.state.destructive",
            ColorToken::StateDestructiveHover => "bg.state.destructive_hover",
            ColorToken::StateDestructivePress => "bg.state.destructive_press",
            ColorToken::StateDisabled => "bg.state.disabled",
            ColorToken::TextPrimary => "text.primary",
            ColorToken::TextSecondary => "text.secondary",
            ColorToken::TextTertiary => "text.tertiary",
            ColorToken::TextInverse => "text.inverse",
            ColorToken::TextDisabled => "text.disabled",
            ColorToken::TextDestructive => "text.destructive",
            ColorToken::BorderDefault => "border.default",
            ColorToken::BorderStrong => "border.strong",
            ColorToken::BorderHover => "border.hover",
            ColorToken::BorderDestructive => "border.destructive",
            ColorToken::Highlight => "highlight.default",
            ColorToken::HighlightDestructive => "highlight.destructive",
            ColorToken::HighlightSoft => "highlight.soft",
            ColorToken::HighlightInput => "highlight.input",
            ColorToken::ShadowSubtle => "shadow.subtle",
            ColorToken::ShadowStrong => "shadow.strong",
        }
    }

    /// Look a token up by its dotted path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.path() == path)
    }
}

/// Background colors
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundColors {
    /// Page / element-edge background (also the focus cutout color)
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub state: StateColors,
}

/// Fills for interactive elements, one per variant family and state
#[derive(Clone, Debug, PartialEq)]
pub struct StateColors {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_press: Color,
    pub secondary: Color,
    pub secondary_hover: Color,
    pub secondary_press: Color,
    pub soft: Color,
    pub soft_hover: Color,
    pub soft_press: Color,
    pub ghost_hover: Color,
    pub ghost_press: Color,
    pub destructive: Color,
    pub destructive_hover: Color,
    pub destructive_press: Color,
    pub disabled: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub inverse: Color,
    pub disabled: Color,
    pub destructive: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BorderColors {
    pub default: Color,
    pub strong: Color,
    pub hover: Color,
    pub destructive: Color,
}

/// Focus ring colors
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightColors {
    pub default: Color,
    pub destructive: Color,
    pub soft: Color,
    pub input: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShadowColors {
    pub subtle: Color,
    pub strong: Color,
}

/// Complete set of semantic color tokens for one resolved theme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub bg: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub highlight: HighlightColors,
    pub shadow: ShadowColors,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        let state = &self.bg.state;
        match token {
            ColorToken::BgPrimary => self.bg.primary,
            ColorToken::BgSecondary => self.bg.secondary,
            ColorToken::BgTertiary => self.bg.tertiary,
            ColorToken::StatePrimary => state.primary,
            ColorToken::StatePrimaryHover => state.primary_hover,
            ColorToken::StatePrimaryPress => state.primary_press,
            ColorToken::StateSecondary => state.secondary,
            ColorToken::StateSecondaryHover => state.secondary_hover,
            ColorToken::StateSecondaryPress => state.secondary_press,
            ColorToken::StateSoft => state.soft,
            ColorToken::StateSoftHover => state.soft_hover,
            ColorToken::StateSoftPress => state.soft_press,
            ColorToken::StateGhostHover => state.ghost_hover,
            ColorToken::StateGhostPress => state.ghost_press,
            ColorToken::StateDestructive => state.destructive,
            ColorToken::StateDestructiveHover => state.destructive_hover,
            ColorToken::StateDestructivePress => state.destructive_press,
            ColorToken::StateDisabled => state.disabled,
            ColorToken::TextPrimary => self.text.primary,
            ColorToken::TextSecondary => self.text.secondary,
            ColorToken::TextTertiary => self.text.tertiary,
            ColorToken::TextInverse => self.text.inverse,
            ColorToken::TextDisabled => self.text.disabled,
            ColorToken::TextDestructive => self.text.destructive,
            ColorToken::BorderDefault => self.border.default,
            ColorToken::BorderStrong => self.border.strong,
            ColorToken::BorderHover => self.border.hover,
            ColorToken::BorderDestructive => self.border.destructive,
            ColorToken::Highlight => self.highlight.default,
            ColorToken::HighlightDestructive => self.highlight.destructive,
            ColorToken::HighlightSoft => self.highlight.soft,
            ColorToken::HighlightInput => self.highlight.input,
            ColorToken::ShadowSubtle => self.shadow.subtle,
            ColorToken::ShadowStrong => self.shadow.strong,
        }
    }

    /// Mutable access to the color behind a token key
    pub fn get_mut(&mut self, token: ColorToken) -> &mut Color {
        match token {
            ColorToken::BgPrimary => &mut self.bg.primary,
            ColorToken::BgSecondary => &mut self.bg.secondary,
            ColorToken::BgTertiary => &mut self.bg.tertiary,
            ColorToken::StatePrimary => &mut self.bg.state.primary,
            ColorToken::StatePrimaryHover => &mut self.bg.state.primary_hover,
            ColorToken::StatePrimaryPress => &mut self.bg.state.primary_press,
            ColorToken::StateSecondary => &mut self.bg.state.secondary,
            ColorToken::StateSecondaryHover => &mut self.bg.state.secondary_hover,
            ColorToken::StateSecondaryPress => &mut self.bg.state.secondary_press,
            ColorToken::StateSoft => &mut self.bg.state.soft,
            ColorToken::StateSoftHover => &mut self.bg.state.soft_hover,
            ColorToken::StateSoftPress => &mut self.bg.state.soft_press,
            ColorToken::StateGhostHover => &mut self.bg.state.ghost_hover,
            ColorToken::StateGhostPress => &mut self.bg.state.ghost_press,
            ColorToken::StateDestructive => &mut self.bg.state.destructive,
            ColorToken::StateDestructiveHover => &mut self.bg.state.destructive_hover,
            ColorToken::StateDestructivePress => &mut self.bg.state.destructive_press,
            ColorToken::StateDisabled => &mut self.bg.state.disabled,
            ColorToken::TextPrimary => &mut self.text.primary,
            ColorToken::TextSecondary => &mut self.text.secondary,
            ColorToken::TextTertiary => &mut self.text.tertiary,
            ColorToken::TextInverse => &mut self.text.inverse,
            ColorToken::TextDisabled => &mut self.text.disabled,
            ColorToken::TextDestructive => &mut self.text.destructive,
            ColorToken::BorderDefault => &mut self.border.default,
            ColorToken::BorderStrong => &mut self.border.strong,
            ColorToken::BorderHover => &mut self.border.hover,
            ColorToken::BorderDestructive => &mut self.border.destructive,
            ColorToken::Highlight => &mut self.highlight.default,
            ColorToken::HighlightDestructive => &mut self.highlight.destructive,
            ColorToken::HighlightSoft => &mut self.highlight.soft,
            ColorToken::HighlightInput => &mut self.highlight.input,
            ColorToken::ShadowSubtle => &mut self.shadow.subtle,
            ColorToken::ShadowStrong => &mut self.shadow.strong,
        }
    }

    /// Get a color by dotted path, e.g. `bg.state.primary`
    pub fn lookup(&self, path: &str) -> Option<Color> {
        ColorToken::from_path(path).map(|token| self.get(token))
    }

    /// Every `(path, color)` pair, in token declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        ColorToken::ALL
            .into_iter()
            .map(move |token| (token.path(), self.get(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::LumoTheme;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for token in ColorToken::ALL {
            assert!(seen.insert(token.path()), "duplicate path {}", token.path());
            assert_eq!(ColorToken::from_path(token.path()), Some(token));
        }
    }

    #[test]
    fn lookup_by_path_matches_nested_field() {
        let tokens = LumoTheme::light();
        assert_eq!(
            tokens.lookup("bg.state.primary"),
            Some(tokens.bg.state.primary)
        );
        assert_eq!(tokens.lookup("text.inverse"), Some(tokens.text.inverse));
        assert_eq!(tokens.lookup("bg.state.nope"), None);
    }
}
