//! Design tokens for theming
//!
//! - Colors, addressed by enum or dotted semantic path
//! - Shadows, defined once and tinted by color tokens

mod color;
mod shadow;

pub use color::*;
pub use shadow::*;
