//! Chip styles
//!
//! Chips are toggle-like: `selected` is a real state, `loading` never is.

use crate::error::ConfigurationError;
use crate::state::InteractionState::{self, *};
use crate::style::{ComponentStyle, SizeMetrics};
use crate::table::{complete, Named, StyleEntry, StyleTable};
use lumo_theme::ColorToken::*;
use lumo_theme::FocusType;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ChipVariant {
    /// Outlined neutral chip
    #[default]
    Default,
    Soft,
    Ghost,
    GhostMuted,
}

impl Named for ChipVariant {
    fn name(self) -> &'static str {
        match self {
            ChipVariant::Default => "default",
            ChipVariant::Soft => "soft",
            ChipVariant::Ghost => "ghost",
            ChipVariant::GhostMuted => "ghostMuted",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ChipSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl Named for ChipSize {
    fn name(self) -> &'static str {
        match self {
            ChipSize::Small => "sm",
            ChipSize::Medium => "md",
            ChipSize::Large => "lg",
        }
    }
}

/// The chip component kind
pub struct Chip;

impl Chip {
    pub fn build_table() -> Result<StyleTable<ChipVariant>, ConfigurationError> {
        StyleTable::builder(Self::KIND)
            .variant(
                ChipVariant::Default,
                [
                    (Default, StyleEntry::filled(BgPrimary, TextPrimary).border(BorderDefault)),
                    (Hover, StyleEntry::filled(StateSecondaryHover, TextPrimary).border(BorderHover)),
                    (Press, StyleEntry::filled(StateSecondaryPress, TextPrimary).border(BorderHover)),
                    (
                        Focus,
                        StyleEntry::filled(BgPrimary, TextPrimary)
                            .border(BorderDefault)
                            .focus(FocusType::Misc),
                    ),
                    (Selected, StyleEntry::filled(StatePrimary, TextInverse).border(StatePrimary)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled).border(BorderDefault)),
                ],
            )
            .variant(
                ChipVariant::Soft,
                [
                    (Default, StyleEntry::filled(StateSecondary, TextPrimary)),
                    (Hover, StyleEntry::filled(StateSecondaryHover, TextPrimary)),
                    (Press, StyleEntry::filled(StateSecondaryPress, TextPrimary)),
                    (Focus, StyleEntry::filled(StateSecondary, TextPrimary).focus(FocusType::Misc)),
                    (Selected, StyleEntry::filled(StateSoftPress, StatePrimary)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled)),
                ],
            )
            .variant(
                ChipVariant::Ghost,
                [
                    (Default, StyleEntry::clear(TextPrimary)),
                    (Hover, StyleEntry::filled(StateGhostHover, TextPrimary)),
                    (Press, StyleEntry::filled(StateGhostPress, TextPrimary)),
                    (Focus, StyleEntry::clear(TextPrimary).focus(FocusType::Misc)),
                    (Selected, StyleEntry::filled(StateSoft, StatePrimary)),
                    (Disabled, StyleEntry::clear(TextDisabled)),
                ],
            )
            .variant(
                ChipVariant::GhostMuted,
                [
                    (Default, StyleEntry::clear(TextSecondary)),
                    (Hover, StyleEntry::filled(StateGhostHover, TextPrimary)),
                    (Press, StyleEntry::filled(StateGhostPress, TextPrimary)),
                    (Focus, StyleEntry::clear(TextSecondary).focus(FocusType::Misc)),
                    (Selected, StyleEntry::filled(StateGhostPress, TextPrimary)),
                    (Disabled, StyleEntry::clear(TextDisabled)),
                ],
            )
            .build(Self::VARIANTS, Self::STATES)
    }
}

impl ComponentStyle for Chip {
    type Variant = ChipVariant;
    type Size = ChipSize;

    const KIND: &'static str = "chip";
    const VARIANTS: &'static [ChipVariant] = &[
        ChipVariant::Default,
        ChipVariant::Soft,
        ChipVariant::Ghost,
        ChipVariant::GhostMuted,
    ];
    const SIZES: &'static [ChipSize] = &[ChipSize::Small, ChipSize::Medium, ChipSize::Large];
    const STATES: &'static [InteractionState] = &[Default, Hover, Press, Focus, Selected, Disabled];

    fn table() -> &'static StyleTable<ChipVariant> {
        static TABLE: OnceLock<StyleTable<ChipVariant>> = OnceLock::new();
        TABLE.get_or_init(|| complete(Self::build_table()))
    }

    fn metrics(size: ChipSize) -> SizeMetrics {
        match size {
            ChipSize::Small => SizeMetrics {
                height: 24.0,
                padding_x: 8.0,
                padding_y: 2.0,
                gap: 4.0,
                icon_size: 12.0,
                corner_radius: 12.0,
                font_size: 12.0,
            },
            ChipSize::Medium => SizeMetrics {
                height: 28.0,
                padding_x: 10.0,
                padding_y: 4.0,
                gap: 6.0,
                icon_size: 14.0,
                corner_radius: 14.0,
                font_size: 13.0,
            },
            ChipSize::Large => SizeMetrics {
                height: 32.0,
                padding_x: 12.0,
                padding_y: 6.0,
                gap: 6.0,
                icon_size: 16.0,
                corner_radius: 16.0,
                font_size: 14.0,
            },
        }
    }
}
