//! Interaction flags and the single state they resolve to

use lumo_core::events::event_types;
use lumo_core::EventType;
use std::fmt;

/// Live interaction flags for one element.
///
/// Flags are independent; any combination may be set at once.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct InteractionFlags {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
    pub loading: bool,
    pub disabled: bool,
    pub selected: bool,
}

impl InteractionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Fold a pointer or focus event into the flags. Returns true if any flag changed.
    ///
    /// Loading, disabled, and selected are owned by the caller and never
    /// touched here.
    pub fn apply_event(&mut self, event_type: EventType) -> bool {
        let before = *self;
        match event_type {
            event_types::POINTER_ENTER => self.hovered = true,
            event_types::POINTER_LEAVE => {
                self.hovered = false;
                self.pressed = false;
            }
            event_types::POINTER_DOWN => self.pressed = true,
            event_types::POINTER_UP | event_types::DRAG_END => self.pressed = false,
            event_types::FOCUS => self.focused = true,
            event_types::BLUR => self.focused = false,
            _ => {}
        }
        *self != before
    }

    /// The state these flags resolve to
    pub fn state(&self) -> InteractionState {
        InteractionState::resolve(self)
    }
}

/// The single discrete state an element renders in
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    Press,
    Focus,
    Loading,
    Selected,
    Disabled,
}

impl InteractionState {
    pub const ALL: [InteractionState; 7] = [
        InteractionState::Default,
        InteractionState::Hover,
        InteractionState::Press,
        InteractionState::Focus,
        InteractionState::Loading,
        InteractionState::Selected,
        InteractionState::Disabled,
    ];

    /// Resolve flags by fixed precedence:
    /// disabled, loading, selected, focus, press, hover, then default.
    pub fn resolve(flags: &InteractionFlags) -> Self {
        if flags.disabled {
            InteractionState::Disabled
        } else if flags.loading {
            InteractionState::Loading
        } else if flags.selected {
            InteractionState::Selected
        } else if flags.focused {
            InteractionState::Focus
        } else if flags.pressed {
            InteractionState::Press
        } else if flags.hovered {
            InteractionState::Hover
        } else {
            InteractionState::Default
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionState::Default => "default",
            InteractionState::Hover => "hover",
            InteractionState::Press => "press",
            InteractionState::Focus => "focus",
            InteractionState::Loading => "loading",
            InteractionState::Selected => "selected",
            InteractionState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flag_combinations() -> impl Iterator<Item = InteractionFlags> {
        (0u8..64).map(|bits| InteractionFlags {
            hovered: bits & 1 != 0,
            pressed: bits & 2 != 0,
            focused: bits & 4 != 0,
            loading: bits & 8 != 0,
            disabled: bits & 16 != 0,
            selected: bits & 32 != 0,
        })
    }

    #[test]
    fn disabled_wins_over_everything() {
        for flags in all_flag_combinations().filter(|flags| flags.disabled) {
            assert_eq!(flags.state(), InteractionState::Disabled, "{:?}", flags);
        }
    }

    #[test]
    fn precedence_order_is_fixed() {
        let flags = InteractionFlags::new().hovered(true);
        assert_eq!(flags.state(), InteractionState::Hover);

        let flags = flags.pressed(true);
        assert_eq!(flags.state(), InteractionState::Press);

        let flags = flags.focused(true);
        assert_eq!(flags.state(), InteractionState::Focus);

        let flags = flags.selected(true);
        assert_eq!(flags.state(), InteractionState::Selected);

        let flags = flags.loading(true);
        assert_eq!(flags.state(), InteractionState::Loading);

        let flags = flags.disabled(true);
        assert_eq!(flags.state(), InteractionState::Disabled);

        assert_eq!(InteractionFlags::new().state(), InteractionState::Default);
    }

    #[test]
    fn pointer_and_focus_events_drive_flags() {
        let mut flags = InteractionFlags::new();

        assert!(flags.apply_event(event_types::POINTER_ENTER));
        assert!(flags.apply_event(event_types::POINTER_DOWN));
        assert_eq!(flags.state(), InteractionState::Press);

        assert!(flags.apply_event(event_types::POINTER_UP));
        assert_eq!(flags.state(), InteractionState::Hover);

        assert!(flags.apply_event(event_types::FOCUS));
        assert!(!flags.apply_event(event_types::FOCUS));

        flags.apply_event(event_types::POINTER_DOWN);
        assert!(flags.apply_event(event_types::POINTER_LEAVE));
        assert!(!flags.hovered && !flags.pressed);

        assert!(flags.apply_event(event_types::BLUR));
        assert_eq!(flags.state(), InteractionState::Default);
    }

    #[test]
    fn unrelated_events_leave_flags_alone() {
        let mut flags = InteractionFlags::new().disabled(true).selected(true);
        assert!(!flags.apply_event(999));
        assert!(flags.disabled && flags.selected);
    }
}
