//! Input event ids
//!
//! The platform layer translates native input into these ids; the component
//! layer folds them into interaction flags.

/// Event type identifier
pub type EventType = u32;

/// Event types that affect an element's interaction state
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Drag ended (pointer released after a drag, possibly outside the element)
    pub const DRAG_END: EventType = 7;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
}
