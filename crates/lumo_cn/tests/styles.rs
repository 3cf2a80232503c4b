use lumo_cn::prelude::*;
use lumo_cn::{ConfigurationError, StyleTable};
use lumo_theme::{ColorTokens, LumoTheme};

fn themes() -> [ColorTokens; 2] {
    [LumoTheme::light(), LumoTheme::dark()]
}

fn all_flags() -> impl Iterator<Item = InteractionFlags> {
    (0u8..64).map(|bits| InteractionFlags {
        hovered: bits & 1 != 0,
        pressed: bits & 2 != 0,
        focused: bits & 4 != 0,
        loading: bits & 8 != 0,
        disabled: bits & 16 != 0,
        selected: bits & 32 != 0,
    })
}

fn assert_complete<C: ComponentStyle>(table: Result<StyleTable<C::Variant>, ConfigurationError>) {
    let table = table.unwrap_or_else(|err| panic!("{} table: {}", C::KIND, err));
    for variant in C::VARIANTS {
        for state in C::STATES {
            assert!(
                table.get(*variant, *state).is_ok(),
                "{} missing {:?}/{}",
                C::KIND,
                variant,
                state
            );
        }
    }
    assert_eq!(table.len(), C::VARIANTS.len() * C::STATES.len());
}

#[test]
fn every_component_table_is_complete() {
    assert_complete::<Button>(Button::build_table());
    assert_complete::<Chip>(Chip::build_table());
    assert_complete::<Checkbox>(Checkbox::build_table());
    assert_complete::<Input>(Input::build_table());
}

#[test]
fn disabled_primary_ignores_hover() {
    for tokens in themes() {
        let flags = InteractionFlags::new().disabled(true).hovered(true);
        let style = Button::resolve_style(&tokens, ButtonVariant::Primary, ButtonSize::Medium, flags);

        let disabled = Button::visual(&tokens, ButtonVariant::Primary, InteractionState::Disabled);
        let hover = Button::visual(&tokens, ButtonVariant::Primary, InteractionState::Hover);

        assert_eq!(style.state, InteractionState::Disabled);
        assert_eq!(style.visual.background, disabled.background);
        assert_ne!(style.visual.background, hover.background);
    }
}

#[test]
fn disabled_wins_for_every_flag_combination() {
    for flags in all_flags().filter(|flags| flags.disabled) {
        assert_eq!(InteractionState::resolve(&flags), InteractionState::Disabled);
    }
}

fn assert_deterministic<C: ComponentStyle>(tokens: &ColorTokens) {
    for flags in all_flags() {
        for variant in C::VARIANTS {
            for size in C::SIZES {
                let first = C::resolve_style(tokens, *variant, *size, flags);
                let second = C::resolve_style(tokens, *variant, *size, flags);
                assert_eq!(first, second);
                assert_eq!(first.visual.shadow.as_bytes(), second.visual.shadow.as_bytes());
                assert!(C::STATES.contains(&first.state), "{} {:?}", C::KIND, flags);
            }
        }
    }
}

#[test]
fn repeated_resolution_is_identical() {
    for tokens in themes() {
        assert_deterministic::<Button>(&tokens);
        assert_deterministic::<Chip>(&tokens);
        assert_deterministic::<Checkbox>(&tokens);
        assert_deterministic::<Input>(&tokens);
    }
}

#[test]
fn flags_for_undeclared_states_are_ignored() {
    let tokens = LumoTheme::light();

    let button = Button::resolve_style(
        &tokens,
        ButtonVariant::Primary,
        ButtonSize::Medium,
        InteractionFlags::new().selected(true).hovered(true),
    );
    assert_eq!(button.state, InteractionState::Hover);
    assert_eq!(
        button.visual,
        Button::visual(&tokens, ButtonVariant::Primary, InteractionState::Hover)
    );

    let chip = Chip::resolve_style(
        &tokens,
        ChipVariant::Default,
        ChipSize::Medium,
        InteractionFlags::new().loading(true),
    );
    assert_eq!(chip.state, InteractionState::Default);

    let input = Input::resolve_style(
        &tokens,
        InputVariant::Default,
        InputSize::Medium,
        InteractionFlags::new().loading(true).selected(true).focused(true),
    );
    assert_eq!(input.state, InteractionState::Focus);
}

#[test]
fn toggle_components_render_selected() {
    let tokens = LumoTheme::light();
    let flags = InteractionFlags::new().selected(true).hovered(true);

    let chip = Chip::resolve_style(&tokens, ChipVariant::Default, ChipSize::Medium, flags);
    assert_eq!(chip.state, InteractionState::Selected);
    assert_eq!(chip.visual.background, tokens.bg.state.primary);

    let checkbox = Checkbox::resolve_style(
        &tokens,
        CheckboxVariant::Destructive,
        CheckboxSize::Small,
        flags,
    );
    assert_eq!(checkbox.visual.background, tokens.bg.state.destructive);
}

#[test]
fn focused_input_uses_input_ring_order() {
    let tokens = LumoTheme::light();
    let style = Input::resolve_style(
        &tokens,
        InputVariant::Default,
        InputSize::Medium,
        InteractionFlags::new().focused(true),
    );

    let ring = format!("0px 0px 0px 3px {}", tokens.highlight.input);
    let cutout = format!("0px 0px 0px 1px {}", tokens.bg.primary);
    let ring_at = style.visual.shadow.find(&ring).unwrap();
    let cutout_at = style.visual.shadow.find(&cutout).unwrap();
    assert!(ring_at < cutout_at, "{}", style.visual.shadow);
}

#[test]
fn metrics_do_not_depend_on_variant_or_state() {
    let tokens = LumoTheme::dark();
    let rest = Button::resolve_style(&tokens, ButtonVariant::Ghost, ButtonSize::Large, InteractionFlags::new());
    let pressed = Button::resolve_style(
        &tokens,
        ButtonVariant::Destructive,
        ButtonSize::Large,
        InteractionFlags::new().pressed(true),
    );
    assert_eq!(rest.metrics, pressed.metrics);
    assert_eq!(rest.metrics, Button::metrics(ButtonSize::Large));
}

/// Documented contract: an unrecognized variant name falls back to the
/// kind's default variant instead of failing.
#[test]
fn unknown_variant_name_falls_back_to_default_variant() {
    let tokens = LumoTheme::light();
    let flags = InteractionFlags::new().hovered(true);

    let named = Button::resolve_named(&tokens, "neon", ButtonSize::Medium, flags);
    let default = Button::resolve_style(&tokens, ButtonVariant::default(), ButtonSize::Medium, flags);
    assert_eq!(named, default);

    let exact = Chip::resolve_named(&tokens, "ghostMuted", ChipSize::Small, flags);
    let typed = Chip::resolve_style(&tokens, ChipVariant::GhostMuted, ChipSize::Small, flags);
    assert_eq!(exact, typed);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "does not declare state selected")]
fn direct_lookup_of_undeclared_state_panics_in_debug_builds() {
    let tokens = LumoTheme::light();
    Input::visual(&tokens, InputVariant::Default, InteractionState::Selected);
}
