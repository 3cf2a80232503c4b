//! Per-component style resolution
//!
//! Every component kind implements [`ComponentStyle`]: a closed set of
//! variants and sizes, the interaction states it supports, a static style
//! table, and size metrics. Colors and metrics are looked up independently.

use crate::error::ConfigurationError;
use crate::state::{InteractionFlags, InteractionState};
use crate::table::{Named, StyleTable, VisualStyleRecord};
use lumo_theme::ColorTokens;

/// Spacing and sizing for one size variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeMetrics {
    pub height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub gap: f32,
    pub icon_size: f32,
    pub corner_radius: f32,
    pub font_size: f32,
}

/// Output of one style query
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub state: InteractionState,
    pub visual: VisualStyleRecord,
    pub metrics: SizeMetrics,
}

/// A component kind with a style table
pub trait ComponentStyle: 'static {
    type Variant: Named + Default;
    type Size: Named + Default;

    /// Kind name used in logs and errors
    const KIND: &'static str;
    const VARIANTS: &'static [Self::Variant];
    const SIZES: &'static [Self::Size];
    /// States the style table covers
    const STATES: &'static [InteractionState];

    /// The validated table, built on first use
    fn table() -> &'static StyleTable<Self::Variant>;

    fn metrics(size: Self::Size) -> SizeMetrics;

    fn variant_named(name: &str) -> Option<Self::Variant> {
        Self::VARIANTS.iter().copied().find(|variant| variant.name() == name)
    }

    fn size_named(name: &str) -> Option<Self::Size> {
        Self::SIZES.iter().copied().find(|size| size.name() == name)
    }

    /// Look up the visual style for an already resolved state.
    ///
    /// Asking for a state the kind does not declare is a configuration error.
    /// Debug builds panic; release builds log it and return an unstyled record.
    fn visual(
        tokens: &ColorTokens,
        variant: Self::Variant,
        state: InteractionState,
    ) -> VisualStyleRecord {
        match Self::table().get(variant, state) {
            Ok(entry) => entry.resolve(tokens),
            Err(err) => undeclared(tokens, err),
        }
    }

    /// Clear the flags of states this kind never enters, so a stray
    /// `selected` or `loading` cannot pick an undeclared state.
    fn declared_flags(flags: InteractionFlags) -> InteractionFlags {
        let declared = |state| Self::STATES.contains(&state);
        InteractionFlags {
            hovered: flags.hovered && declared(InteractionState::Hover),
            pressed: flags.pressed && declared(InteractionState::Press),
            focused: flags.focused && declared(InteractionState::Focus),
            loading: flags.loading && declared(InteractionState::Loading),
            disabled: flags.disabled && declared(InteractionState::Disabled),
            selected: flags.selected && declared(InteractionState::Selected),
        }
    }

    /// Resolve flags to a state, then look up visuals and metrics.
    ///
    /// Flags for states the kind does not declare are ignored.
    fn resolve_style(
        tokens: &ColorTokens,
        variant: Self::Variant,
        size: Self::Size,
        flags: InteractionFlags,
    ) -> ResolvedStyle {
        let state = Self::declared_flags(flags).state();
        ResolvedStyle {
            state,
            visual: Self::visual(tokens, variant, state),
            metrics: Self::metrics(size),
        }
    }

    /// Like [`resolve_style`](Self::resolve_style) with the variant given by
    /// name. An unrecognized name falls back to the default variant.
    fn resolve_named(
        tokens: &ColorTokens,
        variant_name: &str,
        size: Self::Size,
        flags: InteractionFlags,
    ) -> ResolvedStyle {
        let variant = Self::variant_named(variant_name).unwrap_or_else(|| {
            let fallback = Self::Variant::default();
            tracing::warn!(
                kind = Self::KIND,
                variant = variant_name,
                fallback = fallback.name(),
                "unknown style variant; using default"
            );
            fallback
        });
        Self::resolve_style(tokens, variant, size, flags)
    }
}

fn undeclared(tokens: &ColorTokens, err: ConfigurationError) -> VisualStyleRecord {
    if cfg!(debug_assertions) {
        panic!("{err}");
    }
    tracing::error!(error = %err, "style lookup outside the declared table");
    VisualStyleRecord::unstyled(tokens)
}
