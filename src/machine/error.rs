//! Machine error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors raised when the machine and its arena disagree.
///
/// Normal graph operation (empty machine, dead ends, overwritten edges) never
/// produces an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("Current state '{id}' is missing from the arena")]
    MissingState { id: StateId },

    #[error("State '{id}' is not a node of this machine")]
    UnknownNode { id: StateId },
}
