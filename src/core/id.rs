//! Stable identities for states registered in a graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a state inside a [`StateArena`](super::StateArena).
///
/// Ids are random UUIDs, so they never depend on insertion order and stay
/// valid for as long as the state lives in its arena. The machine keys its
/// node set and edge map by these ids and never by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(Uuid);

impl StateId {
    /// Generate a fresh id.
    pub fn new() -> Self {
        StateId(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from a checkpoint.
    pub fn from_uuid(uuid: Uuid) -> Self {
        StateId(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
