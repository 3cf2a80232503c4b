//! Checkbox styles
//!
//! `selected` is the checked state. The text color is the checkmark color.

use crate::error::ConfigurationError;
use crate::state::InteractionState::{self, *};
use crate::style::{ComponentStyle, SizeMetrics};
use crate::table::{complete, Named, StyleEntry, StyleTable};
use lumo_theme::ColorToken::*;
use lumo_theme::FocusType;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum CheckboxVariant {
    #[default]
    Default,
    /// Red outline and fill, for consent to destructive actions
    Destructive,
}

impl Named for CheckboxVariant {
    fn name(self) -> &'static str {
        match self {
            CheckboxVariant::Default => "default",
            CheckboxVariant::Destructive => "destructive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum CheckboxSize {
    /// 14px box
    Small,
    /// 18px box
    #[default]
    Medium,
    /// 22px box
    Large,
}

impl Named for CheckboxSize {
    fn name(self) -> &'static str {
        match self {
            CheckboxSize::Small => "sm",
            CheckboxSize::Medium => "md",
            CheckboxSize::Large => "lg",
        }
    }
}

/// The checkbox component kind
pub struct Checkbox;

impl Checkbox {
    pub fn build_table() -> Result<StyleTable<CheckboxVariant>, ConfigurationError> {
        StyleTable::builder(Self::KIND)
            .variant(
                CheckboxVariant::Default,
                [
                    (Default, StyleEntry::filled(BgPrimary, TextInverse).border(BorderStrong)),
                    (Hover, StyleEntry::filled(BgPrimary, TextInverse).border(BorderHover)),
                    (Press, StyleEntry::filled(StateGhostPress, TextInverse).border(BorderHover)),
                    (
                        Focus,
                        StyleEntry::filled(BgPrimary, TextInverse)
                            .border(BorderStrong)
                            .focus(FocusType::Default),
                    ),
                    (Selected, StyleEntry::filled(StatePrimary, TextInverse).border(StatePrimary)),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled).border(BorderDefault)),
                ],
            )
            .variant(
                CheckboxVariant::Destructive,
                [
                    (Default, StyleEntry::filled(BgPrimary, TextInverse).border(BorderDestructive)),
                    (Hover, StyleEntry::filled(BgPrimary, TextInverse).border(StateDestructiveHover)),
                    (
                        Press,
                        StyleEntry::filled(StateGhostPress, TextInverse).border(StateDestructivePress),
                    ),
                    (
                        Focus,
                        StyleEntry::filled(BgPrimary, TextInverse)
                            .border(BorderDestructive)
                            .focus(FocusType::Destructive),
                    ),
                    (
                        Selected,
                        StyleEntry::filled(StateDestructive, TextInverse).border(StateDestructive),
                    ),
                    (Disabled, StyleEntry::filled(StateDisabled, TextDisabled).border(BorderDefault)),
                ],
            )
            .build(Self::VARIANTS, Self::STATES)
    }
}

impl ComponentStyle for Checkbox {
    type Variant = CheckboxVariant;
    type Size = CheckboxSize;

    const KIND: &'static str = "checkbox";
    const VARIANTS: &'static [CheckboxVariant] =
        &[CheckboxVariant::Default, CheckboxVariant::Destructive];
    const SIZES: &'static [CheckboxSize] = &[
        CheckboxSize::Small,
        CheckboxSize::Medium,
        CheckboxSize::Large,
    ];
    const STATES: &'static [InteractionState] = &[Default, Hover, Press, Focus, Selected, Disabled];

    fn table() -> &'static StyleTable<CheckboxVariant> {
        static TABLE: OnceLock<StyleTable<CheckboxVariant>> = OnceLock::new();
        TABLE.get_or_init(|| complete(Self::build_table()))
    }

    fn metrics(size: CheckboxSize) -> SizeMetrics {
        // height is the box edge; icon_size is the checkmark
        match size {
            CheckboxSize::Small => SizeMetrics {
                height: 14.0,
                padding_x: 0.0,
                padding_y: 0.0,
                gap: 6.0,
                icon_size: 10.0,
                corner_radius: 3.0,
                font_size: 13.0,
            },
            CheckboxSize::Medium => SizeMetrics {
                height: 18.0,
                padding_x: 0.0,
                padding_y: 0.0,
                gap: 8.0,
                icon_size: 12.0,
                corner_radius: 4.0,
                font_size: 14.0,
            },
            CheckboxSize::Large => SizeMetrics {
                height: 22.0,
                padding_x: 0.0,
                padding_y: 0.0,
                gap: 8.0,
                icon_size: 16.0,
                corner_radius: 4.0,
                font_size: 16.0,
            },
        }
    }
}
