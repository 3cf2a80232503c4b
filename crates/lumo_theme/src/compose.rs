//! Shadow composition
//!
//! A composed shadow is assembled in a fixed order: the key's base layers,
//! then the optional border ring, then the focus rings. Unknown keys degrade
//! to no base layers instead of failing.

use crate::tokens::{ColorToken, ColorTokens, ShadowKey};
use lumo_core::Shadow;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Which focus ring to draw
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FocusType {
    Default,
    Destructive,
    /// Wider, softer ring for miscellaneous controls
    Misc,
    /// Input ring; drawn before the cutout
    Input,
}

impl FocusType {
    pub const ALL: [FocusType; 4] = [
        FocusType::Default,
        FocusType::Destructive,
        FocusType::Misc,
        FocusType::Input,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FocusType::Default => "default",
            FocusType::Destructive => "destructive",
            FocusType::Misc => "misc",
            FocusType::Input => "input",
        }
    }

    fn ring(self) -> (f32, ColorToken) {
        match self {
            FocusType::Default => (3.0, ColorToken::Highlight),
            FocusType::Destructive => (3.0, ColorToken::HighlightDestructive),
            FocusType::Misc => (4.0, ColorToken::HighlightSoft),
            FocusType::Input => (3.0, ColorToken::HighlightInput),
        }
    }
}

impl FromStr for FocusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|focus| focus.as_str() == s)
            .ok_or_else(|| format!("unknown focus type '{}'", s))
    }
}

impl fmt::Display for FocusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options applied on top of a shadow key's base layers
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct ShadowOptions {
    pub with_border: bool,
    pub focus: Option<FocusType>,
}

impl ShadowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self) -> Self {
        self.with_border = true;
        self
    }

    pub fn focus(mut self, focus: FocusType) -> Self {
        self.focus = Some(focus);
        self
    }
}

/// What a composed layer is for
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum LayerRole {
    Base,
    Border,
    /// Background-colored ring separating the focus ring from the element
    FocusCutout,
    FocusRing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub role: LayerRole,
    pub shadow: Shadow,
}

/// Base, border, and focus layers in render order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposedShadow {
    layers: SmallVec<[ShadowLayer; 6]>,
}

impl ComposedShadow {
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    pub fn roles(&self) -> impl Iterator<Item = LayerRole> + '_ {
        self.layers.iter().map(|layer| layer.role)
    }

    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }

    /// CSS `box-shadow` value; `none` when there are no layers
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    fn push(&mut self, role: LayerRole, shadow: Shadow) {
        self.layers.push(ShadowLayer { role, shadow });
    }
}

impl fmt::Display for ComposedShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", layer.shadow)?;
        }
        Ok(())
    }
}

/// Compose a shadow by dotted key, e.g. `regular.card`.
///
/// An unknown key contributes no base layers; border and focus options still apply.
pub fn compose_shadow(key: &str, tokens: &ColorTokens, options: ShadowOptions) -> ComposedShadow {
    match ShadowKey::from_path(key) {
        Some(key) => compose(key, tokens, options),
        None => {
            tracing::debug!(key, "unknown shadow key; composing without base layers");
            let mut composed = ComposedShadow::default();
            push_focus(&mut composed, tokens, options.focus);
            composed
        }
    }
}

/// Compose a shadow for a known key
pub fn compose(key: ShadowKey, tokens: &ColorTokens, options: ShadowOptions) -> ComposedShadow {
    let definition = key.definition();
    let mut composed = ComposedShadow::default();

    for layer in definition.layers {
        composed.push(LayerRole::Base, layer.resolve(tokens));
    }

    if options.with_border && definition.bordered {
        composed.push(
            LayerRole::Border,
            Shadow::ring(1.0, tokens.get(ColorToken::BorderDefault)),
        );
    }

    push_focus(&mut composed, tokens, options.focus);
    composed
}

fn push_focus(composed: &mut ComposedShadow, tokens: &ColorTokens, focus: Option<FocusType>) {
    let Some(focus) = focus else {
        return;
    };

    let cutout = Shadow::ring(1.0, tokens.get(ColorToken::BgPrimary));
    let (spread, color) = focus.ring();
    let ring = Shadow::ring(spread, tokens.get(color));

    if focus == FocusType::Input {
        composed.push(LayerRole::FocusRing, ring);
        composed.push(LayerRole::FocusCutout, cutout);
    } else {
        composed.push(LayerRole::FocusCutout, cutout);
        composed.push(LayerRole::FocusRing, ring);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::LumoTheme;

    #[test]
    fn focus_only_key_has_just_rings() {
        let tokens = LumoTheme::light();
        let composed = compose(
            ShadowKey::ComponentFocus,
            &tokens,
            ShadowOptions::new().focus(FocusType::Default),
        );
        assert_eq!(
            composed.roles().collect::<Vec<_>>(),
            vec![LayerRole::FocusCutout, LayerRole::FocusRing]
        );
        assert_eq!(
            composed.to_css(),
            "0px 0px 0px 1px #ffffff, 0px 0px 0px 3px #93c5fd"
        );
    }

    #[test]
    fn misc_focus_ring_is_wider() {
        let tokens = LumoTheme::light();
        let composed = compose(
            ShadowKey::ComponentFocus,
            &tokens,
            ShadowOptions::new().focus(FocusType::Misc),
        );
        assert_eq!(composed.layers()[1].shadow.spread, 4.0);
    }

    #[test]
    fn border_is_ignored_for_unbordered_keys() {
        let tokens = LumoTheme::dark();
        let composed = compose(ShadowKey::ComponentButton, &tokens, ShadowOptions::new().border());
        assert!(composed.roles().all(|role| role == LayerRole::Base));
    }

    #[test]
    fn focus_type_parses_its_names() {
        for focus in FocusType::ALL {
            assert_eq!(focus.as_str().parse::<FocusType>(), Ok(focus));
        }
        assert!("glow".parse::<FocusType>().is_err());
    }
}
