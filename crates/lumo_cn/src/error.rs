//! Style table errors

use crate::state::InteractionState;
use thiserror::Error;

/// A style table that does not cover what its component declares
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A declared (variant, state) pair has no entry
    #[error("{kind} style table has no entry for variant {variant} in state {state}")]
    MissingEntry {
        kind: &'static str,
        variant: &'static str,
        state: InteractionState,
    },

    /// An entry or lookup names a variant the component does not declare
    #[error("{kind} does not declare variant {variant}")]
    UndeclaredVariant {
        kind: &'static str,
        variant: &'static str,
    },

    /// An entry or lookup names a state the component does not declare
    #[error("{kind} does not declare state {state}")]
    UndeclaredState {
        kind: &'static str,
        state: InteractionState,
    },
}
