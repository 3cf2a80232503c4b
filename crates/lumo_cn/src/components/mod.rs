//! Component kinds and their style tables

pub mod button;
pub mod checkbox;
pub mod chip;
pub mod input;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use checkbox::{Checkbox, CheckboxSize, CheckboxVariant};
pub use chip::{Chip, ChipSize, ChipVariant};
pub use input::{Input, InputSize, InputVariant};
