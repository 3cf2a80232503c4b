//! Button styles
//!
//! # Example
//!
//! ```rust
//! use lumo_cn::prelude::*;
//! use lumo_theme::LumoTheme;
//!
//! let tokens = LumoTheme::light();
//! let style = Button::resolve_style(
//!     &tokens,
//!     ButtonVariant::Primary,
//!     ButtonSize::Medium,
//!     InteractionFlags::new().hovered(true),
//! );
//! assert_eq!(style.visual.background, tokens.bg.state.primary_hover);
//! assert_eq!(style.metrics.height, 36.0);
//! ```

use crate::error::ConfigurationError;
use crate::state::InteractionState::{self, *};
use crate::style::{ComponentStyle, SizeMetrics};
use crate::table::{complete, Named, StyleEntry, StyleTable};
use lumo_theme::ColorToken::*;
use lumo_theme::{FocusType, ShadowKey};
use std::sync::OnceLock;

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the accent color
    #[default]
    Primary,
    /// Muted fill with a border
    Secondary,
    /// Page background with a strong (dashed) outline
    Dashed,
    /// Tinted accent fill
    Soft,
    /// No fill until hovered
    Ghost,
    /// Ghost with secondary text
    GhostMuted,
    /// Red fill for dangerous actions
    Destructive,
}

impl Named for ButtonVariant {
    fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Dashed => "dashed",
            ButtonVariant::Soft => "soft",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::GhostMuted => "ghostMuted",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Square, icon only
    Icon,
}

impl Named for ButtonSize {
    fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// The button component kind
pub struct Button;

impl Button {
    /// Build the button table without caching it
    pub fn build_table() -> Result<StyleTable<ButtonVariant>, ConfigurationError> {
        let lifted = |bg, text| StyleEntry::filled(bg, text).shadow(ShadowKey::ComponentButton);

        StyleTable::builder(Self::KIND)
            .variant(
                ButtonVariant::Primary,
                [
                    (Default, lifted(StatePrimary, TextInverse)),
                    (Hover, lifted(StatePrimaryHover, TextInverse)),
                    (Press, StyleEntry::filled(StatePrimaryPress, TextInverse)),
                    (Focus, lifted(StatePrimary, TextInverse).focus(FocusType::Default)),
                    (Loading, StyleEntry::filled(StatePrimary, TextInverse)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled)),
                ],
            )
            .variant(
                ButtonVariant::Secondary,
                [
                    (Default, lifted(StateSecondary, TextPrimary).border(BorderDefault)),
                    (Hover, lifted(StateSecondaryHover, TextPrimary).border(BorderHover)),
                    (Press, StyleEntry::filled(StateSecondaryPress, TextPrimary).border(BorderHover)),
                    (
                        Focus,
                        lifted(StateSecondary, TextPrimary)
                            .border(BorderDefault)
                            .focus(FocusType::Default),
                    ),
                    (Loading, StyleEntry::filled(StateSecondary, TextSecondary).border(BorderDefault)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled).border(BorderDefault)),
                ],
            )
            .variant(
                ButtonVariant::Dashed,
                [
                    (Default, StyleEntry::filled(BgPrimary, TextPrimary).border(BorderStrong)),
                    (Hover, StyleEntry::filled(StateGhostHover, TextPrimary).border(BorderHover)),
                    (Press, StyleEntry::filled(StateGhostPress, TextPrimary).border(BorderHover)),
                    (
                        Focus,
                        StyleEntry::filled(BgPrimary, TextPrimary)
                            .border(BorderStrong)
                            .focus(FocusType::Default),
                    ),
                    (Loading, StyleEntry::filled(BgPrimary, TextSecondary).border(BorderStrong)),
                    (Disabled, StyleEntry::filled(BgPrimary, TextDisabled).border(BorderDefault)),
                ],
            )
            .variant(
                ButtonVariant::Soft,
                [
                    (Default, StyleEntry::filled(StateSoft, StatePrimary)),
                    (Hover, StyleEntry::filled(StateSoftHover, StatePrimary)),
                    (Press, StyleEntry::filled(StateSoftPress, StatePrimary)),
                    (Focus, StyleEntry::filled(StateSoft, StatePrimary).focus(FocusType::Misc)),
                    (Loading, StyleEntry::filled(StateSoft, StatePrimary)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled)),
                ],
            )
            .variant(
                ButtonVariant::Ghost,
                [
                    (Default, StyleEntry::clear(TextPrimary)),
                    (Hover, StyleEntry::filled(StateGhostHover, TextPrimary)),
                    (Press, StyleEntry::filled(StateGhostPress, TextPrimary)),
                    (Focus, StyleEntry::clear(TextPrimary).focus(FocusType::Default)),
                    (Loading, StyleEntry::clear(TextSecondary)),
                    (Disabled, StyleEntry::clear(TextDisabled)),
                ],
            )
            .variant(
                ButtonVariant::GhostMuted,
                [
                    (Default, StyleEntry::clear(TextSecondary)),
                    (Hover, StyleEntry::filled(StateGhostHover, TextPrimary)),
                    (Press, StyleEntry::filled(StateGhostPress, TextPrimary)),
                    (Focus, StyleEntry::clear(TextSecondary).focus(FocusType::Default)),
                    (Loading, StyleEntry::clear(TextTertiary)),
                    (Disabled, StyleEntry::clear(TextDisabled)),
                ],
            )
            .variant(
                ButtonVariant::Destructive,
                [
                    (Default, lifted(StateDestructive, TextInverse)),
                    (Hover, lifted(StateDestructiveHover, TextInverse)),
                    (Press, StyleEntry::filled(StateDestructivePress, TextInverse)),
                    (
                        Focus,
                        lifted(StateDestructive, TextInverse).focus(FocusType::Destructive),
                    ),
                    (Loading, StyleEntry::filled(StateDestructive, TextInverse)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled)),
                ],
            )
            .build(Self::VARIANTS, Self::STATES)
    }
}

impl ComponentStyle for Button {
    type Variant = ButtonVariant;
    type Size = ButtonSize;

    const KIND: &'static str = "button";
    const VARIANTS: &'static [ButtonVariant] = &[
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Dashed,
        ButtonVariant::Soft,
        ButtonVariant::Ghost,
        ButtonVariant::GhostMuted,
        ButtonVariant::Destructive,
    ];
    const SIZES: &'static [ButtonSize] = &[
        ButtonSize::Small,
        ButtonSize::Medium,
        ButtonSize::Large,
        ButtonSize::Icon,
    ];
    const STATES: &'static [InteractionState] = &[Default, Hover, Press, Focus, Loading, Disabled];

    fn table() -> &'static StyleTable<ButtonVariant> {
        static TABLE: OnceLock<StyleTable<ButtonVariant>> = OnceLock::new();
        TABLE.get_or_init(|| complete(Self::build_table()))
    }

    fn metrics(size: ButtonSize) -> SizeMetrics {
        match size {
            ButtonSize::Small => SizeMetrics {
                height: 28.0,
                padding_x: 10.0,
                padding_y: 4.0,
                gap: 4.0,
                icon_size: 14.0,
                corner_radius: 6.0,
                font_size: 13.0,
            },
            ButtonSize::Medium => SizeMetrics {
                height: 36.0,
                padding_x: 14.0,
                padding_y: 8.0,
                gap: 6.0,
                icon_size: 16.0,
                corner_radius: 8.0,
                font_size: 14.0,
            },
            ButtonSize::Large => SizeMetrics {
                height: 44.0,
                padding_x: 20.0,
                padding_y: 10.0,
                gap: 8.0,
                icon_size: 18.0,
                corner_radius: 10.0,
                font_size: 16.0,
            },
            ButtonSize::Icon => SizeMetrics {
                height: 36.0,
                padding_x: 8.0,
                padding_y: 8.0,
                gap: 0.0,
                icon_size: 18.0,
                corner_radius: 8.0,
                font_size: 14.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        let table = Button::build_table().unwrap();
        assert_eq!(table.len(), Button::VARIANTS.len() * Button::STATES.len());
    }

    #[test]
    fn variant_names_round_trip() {
        for variant in Button::VARIANTS {
            assert_eq!(Button::variant_named(variant.name()), Some(*variant));
        }
        for size in Button::SIZES {
            assert_eq!(Button::size_named(size.name()), Some(*size));
        }
    }
}
