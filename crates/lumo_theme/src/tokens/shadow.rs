//! Shadow tokens for theming
//!
//! Shadows are defined once, independent of the color scheme. Every layer
//! names the color token that tints it, so the same definition renders
//! correctly against light and dark tokens.

use super::color::{ColorToken, ColorTokens};
use lumo_core::Shadow;

/// Shadow family. Regular shadows lift surfaces (cards, modals); component
/// shadows sit on controls.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowFamily {
    Regular,
    Component,
}

/// Semantic shadow token keys, addressed as `family.name`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowKey {
    RegularSmall,
    RegularCard,
    RegularModal,
    RegularPopover,
    ComponentButton,
    ComponentInput,
    /// Focus-only shadow: no base layers, rings come from the focus options
    ComponentFocus,
}

/// One base shadow layer, tinted by a color token
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayerToken {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: ColorToken,
}

impl ShadowLayerToken {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: ColorToken) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Resolve the layer against concrete color tokens
    pub fn resolve(&self, tokens: &ColorTokens) -> Shadow {
        Shadow::new(
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            tokens.get(self.color),
        )
    }
}

/// A named shadow: its base layers and whether it takes a border ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowDefinition {
    pub layers: &'static [ShadowLayerToken],
    /// Surfaces that draw their outline as a shadow ring when asked for a border
    pub bordered: bool,
}

const SMALL: &[ShadowLayerToken] = &[ShadowLayerToken::new(0.0, 1.0, 2.0, 0.0, ColorToken::ShadowSubtle)];

const CARD: &[ShadowLayerToken] = &[
    ShadowLayerToken::new(0.0, 1.0, 3.0, 0.0, ColorToken::ShadowSubtle),
    ShadowLayerToken::new(0.0, 1.0, 2.0, -1.0, ColorToken::ShadowSubtle),
];

const MODAL: &[ShadowLayerToken] = &[
    ShadowLayerToken::new(0.0, 20.0, 25.0, -5.0, ColorToken::ShadowStrong),
    ShadowLayerToken::new(0.0, 8.0, 10.0, -6.0, ColorToken::ShadowStrong),
];

const POPOVER: &[ShadowLayerToken] = &[
    ShadowLayerToken::new(0.0, 10.0, 15.0, -3.0, ColorToken::ShadowStrong),
    ShadowLayerToken::new(0.0, 4.0, 6.0, -4.0, ColorToken::ShadowStrong),
];

const BUTTON: &[ShadowLayerToken] = &[ShadowLayerToken::new(0.0, 1.0, 2.0, 0.0, ColorToken::ShadowSubtle)];

const INPUT: &[ShadowLayerToken] = &[ShadowLayerToken::new(0.0, 1.0, 2.0, 0.0, ColorToken::ShadowSubtle)];

impl ShadowKey {
    pub const ALL: [ShadowKey; 7] = [
        ShadowKey::RegularSmall,
        ShadowKey::RegularCard,
        ShadowKey::RegularModal,
        ShadowKey::RegularPopover,
        ShadowKey::ComponentButton,
        ShadowKey::ComponentInput,
        ShadowKey::ComponentFocus,
    ];

    /// Dotted key, e.g. `regular.card`
    pub fn path(self) -> &'static str {
        match self {
            ShadowKey::RegularSmall => "regular.small",
            ShadowKey::RegularCard => "regular.card",
            ShadowKey::RegularModal => "regular.modal",
            ShadowKey::RegularPopover => "regular.popover",
            ShadowKey::ComponentButton => "component.button",
            ShadowKey::ComponentInput => "component.input",
            ShadowKey::ComponentFocus => "component.focus",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.path() == path)
    }

    pub fn family(self) -> ShadowFamily {
        match self {
            ShadowKey::RegularSmall
            | ShadowKey::RegularCard
            | ShadowKey::RegularModal
            | ShadowKey::RegularPopover => ShadowFamily::Regular,
            ShadowKey::ComponentButton | ShadowKey::ComponentInput | ShadowKey::ComponentFocus => {
                ShadowFamily::Component
            }
        }
    }

    pub fn definition(self) -> ShadowDefinition {
        match self {
            ShadowKey::RegularSmall => ShadowDefinition {
                layers: SMALL,
                bordered: false,
            },
            ShadowKey::RegularCard => ShadowDefinition {
                layers: CARD,
                bordered: true,
            },
            ShadowKey::RegularModal => ShadowDefinition {
                layers: MODAL,
                bordered: true,
            },
            ShadowKey::RegularPopover => ShadowDefinition {
                layers: POPOVER,
                bordered: true,
            },
            ShadowKey::ComponentButton => ShadowDefinition {
                layers: BUTTON,
                bordered: false,
            },
            ShadowKey::ComponentInput => ShadowDefinition {
                layers: INPUT,
                bordered: false,
            },
            ShadowKey::ComponentFocus => ShadowDefinition {
                layers: &[],
                bordered: false,
            },
        }
    }
}
