//! Built-in themes

mod lumo;

pub use lumo::{palette, LumoTheme};
