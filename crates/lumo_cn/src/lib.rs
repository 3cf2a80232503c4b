//! # Lumo Component Styles (lumo_cn)
//!
//! Turns (style variant, size, live interaction flags) into one concrete
//! visual style per interactive component.
//!
//! - **Interaction states**: [`InteractionState::resolve`] collapses flags by
//!   fixed precedence: disabled, loading, selected, focus, press, hover
//! - **Style tables**: one validated [`StyleTable`] per component kind, keyed
//!   by variant and state, written in color tokens
//! - **Metrics**: [`SizeMetrics`] per size, looked up separately from color
//!
//! ## Example
//!
//! ```rust
//! use lumo_cn::prelude::*;
//! use lumo_theme::LumoTheme;
//!
//! let tokens = LumoTheme::dark();
//! let flags = InteractionFlags::new().disabled(true).hovered(true);
//!
//! let style = Button::resolve_style(&tokens, ButtonVariant::Primary, ButtonSize::Small, flags);
//! assert_eq!(style.state, InteractionState::Disabled);
//! assert_eq!(style.visual.background, tokens.bg.state.disabled);
//! ```

pub mod components;
pub mod error;
pub mod state;
pub mod style;
pub mod table;

pub use components::*;
pub use error::ConfigurationError;
pub use state::{InteractionFlags, InteractionState};
pub use style::{ComponentStyle, ResolvedStyle, SizeMetrics};
pub use table::{Fill, Named, ShadowStyle, StyleEntry, StyleTable, VisualStyleRecord};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::*;
    pub use crate::state::{InteractionFlags, InteractionState};
    pub use crate::style::{ComponentStyle, ResolvedStyle, SizeMetrics};
    pub use crate::table::{Named, VisualStyleRecord};
    // Re-export commonly needed theme types
    pub use lumo_theme::{ColorScheme, ColorTokens, FocusType, ShadowOptions};
}
