//! Owning storage for states.
//!
//! Machines only hold [`StateId`] keys. The arena owns the state values and
//! must outlive every machine that references its ids; several machines may
//! share one arena.

use super::id::StateId;
use super::state::State;
use std::collections::HashMap;
use std::fmt;

/// Registry that owns boxed states keyed by id.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateArena, TimedState};
///
/// let mut arena = StateArena::new();
/// let idle = arena.insert(TimedState::unbounded("Idle"));
///
/// assert!(arena.contains(idle));
/// assert_eq!(arena.get(idle).map(|s| s.name()), Some("Idle"));
/// ```
#[derive(Default)]
pub struct StateArena {
    states: HashMap<StateId, Box<dyn State>>,
}

impl StateArena {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Take ownership of a state and hand back its identity.
    pub fn insert<S: State + 'static>(&mut self, state: S) -> StateId {
        self.insert_boxed(Box::new(state))
    }

    pub fn insert_boxed(&mut self, state: Box<dyn State>) -> StateId {
        let id = StateId::new();
        self.states.insert(id, state);
        id
    }

    pub fn get(&self, id: StateId) -> Option<&dyn State> {
        self.states.get(&id).map(|state| state.as_ref())
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut (dyn State + 'static)> {
        self.states.get_mut(&id).map(|state| state.as_mut())
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    /// Remove a state. Machines still holding `id` will report it missing on
    /// their next tick.
    pub fn remove(&mut self, id: StateId) -> Option<Box<dyn State>> {
        self.states.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.keys().copied()
    }
}

impl fmt::Debug for StateArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.states.iter().map(|(id, state)| (id, state.name())))
            .finish()
    }
}
