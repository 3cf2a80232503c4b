//! Text input styles
//!
//! Inputs never report `loading` or `selected`. Focus uses the input ring,
//! which draws outside the background cutout.

use crate::error::ConfigurationError;
use crate::state::InteractionState::{self, *};
use crate::style::{ComponentStyle, SizeMetrics};
use crate::table::{complete, Named, StyleEntry, StyleTable};
use lumo_theme::ColorToken::*;
use lumo_theme::{FocusType, ShadowKey};
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum InputVariant {
    /// Page background with a border
    #[default]
    Default,
    /// Filled, borderless
    Soft,
}

impl Named for InputVariant {
    fn name(self) -> &'static str {
        match self {
            InputVariant::Default => "default",
            InputVariant::Soft => "soft",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl Named for InputSize {
    fn name(self) -> &'static str {
        match self {
            InputSize::Small => "sm",
            InputSize::Medium => "md",
            InputSize::Large => "lg",
        }
    }
}

/// The input component kind
pub struct Input;

impl Input {
    pub fn build_table() -> Result<StyleTable<InputVariant>, ConfigurationError> {
        let field = |bg, border| {
            StyleEntry::filled(bg, TextPrimary)
                .border(border)
                .shadow(ShadowKey::ComponentInput)
        };

        StyleTable::builder(Self::KIND)
            .variant(
                InputVariant::Default,
                [
                    (Default, field(BgPrimary, BorderDefault)),
                    (Hover, field(BgPrimary, BorderHover)),
                    (Press, field(BgPrimary, BorderHover)),
                    (Focus, field(BgPrimary, HighlightInput).focus(FocusType::Input)),
                    (Disabled, StyleEntry::filled(BgSecondary, TextDisabled).border(BorderDefault)),
                ],
            )
            .variant(
                InputVariant::Soft,
                [
                    (Default, StyleEntry::filled(BgSecondary, TextPrimary)),
                    (Hover, StyleEntry::filled(BgTertiary, TextPrimary)),
                    (Press, StyleEntry::filled(BgTertiary, TextPrimary)),
                    (Focus, StyleEntry::filled(BgPrimary, TextPrimary).focus(FocusType::Input)),
                    (Disabled, StyleEntry::filled(BgSecondary, TextDisabled)),
                ],
            )
            .build(Self::VARIANTS, Self::STATES)
    }
}

impl ComponentStyle for Input {
    type Variant = InputVariant;
    type Size = InputSize;

    const KIND: &'static str = "input";
    const VARIANTS: &'static [InputVariant] = &[InputVariant::Default, InputVariant::Soft];
    const SIZES: &'static [InputSize] = &[InputSize::Small, InputSize::Medium, InputSize::Large];
    const STATES: &'static [InteractionState] = &[Default, Hover, Press, Focus, Disabled];

    fn table() -> &'static StyleTable<InputVariant> {
        static TABLE: OnceLock<StyleTable<InputVariant>> = OnceLock::new();
        TABLE.get_or_init(|| complete(Self::build_table()))
    }

    fn metrics(size: InputSize) -> SizeMetrics {
        match size {
            InputSize::Small => SizeMetrics {
                height: 32.0,
                padding_x: 10.0,
                padding_y: 6.0,
                gap: 6.0,
                icon_size: 14.0,
                corner_radius: 6.0,
                font_size: 13.0,
            },
            InputSize::Medium => SizeMetrics {
                height: 40.0,
                padding_x: 12.0,
                padding_y: 8.0,
                gap: 8.0,
                icon_size: 16.0,
                corner_radius: 8.0,
                font_size: 14.0,
            },
            InputSize::Large => SizeMetrics {
                height: 48.0,
                padding_x: 14.0,
                padding_y: 10.0,
                gap: 8.0,
                icon_size: 18.0,
                corner_radius: 10.0,
                font_size: 16.0,
            },
        }
    }
}
