//! What a tick did, and where the machine stands.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Result of a single [`tick`](super::StateMachine::tick).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// No current state; nothing happened
    Idle,

    /// The current state ran and has not finished
    Ticked { state: StateId },

    /// The current state finished and the machine moved along its edge
    Transitioned { from: StateId, to: StateId },

    /// The current state finished with no outgoing edge
    Halted { from: StateId },
}

impl TickOutcome {
    /// True when the tick ended an activation.
    pub fn finished(&self) -> bool {
        matches!(self, Self::Transitioned { .. } | Self::Halted { .. })
    }
}

/// Lifecycle of the machine itself.
///
/// `Unstarted -> Running` on the first registered transition,
/// `Running -> Halted` when a finished state has no outgoing edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    Unstarted,
    Running,
    Halted,
}
