//! Builder for constructing state machines.

use crate::builder::error::{BuildError, BuildIssue};
use crate::core::{StateArena, StateId};
use crate::machine::{MachineConfig, StateMachine};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// Edges are registered in the order they were queued, so the first queued
/// `from` becomes the initial state.
///
/// # Example
///
/// ```rust
/// use tickstate::builder::StateMachineBuilder;
/// use tickstate::core::{StateArena, TimedState};
///
/// let mut arena = StateArena::new();
/// let red = arena.insert(TimedState::new("Red", 3.0));
/// let green = arena.insert(TimedState::new("Green", 3.0));
/// let yellow = arena.insert(TimedState::new("Yellow", 1.0));
///
/// let machine = StateMachineBuilder::new()
///     .cycle([red, green, yellow])
///     .record_history(true)
///     .build(&arena)
///     .unwrap();
///
/// assert_eq!(machine.current(), Some(red));
/// assert_eq!(machine.successor(yellow), Some(red));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    edges: Vec<(StateId, StateId)>,
    config: MachineConfig,
}

impl StateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single edge.
    pub fn transition(mut self, from: StateId, to: StateId) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Queue several edges at once.
    pub fn transitions<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (StateId, StateId)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Queue `a -> b -> c ...` for consecutive ids.
    pub fn chain<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        let ids: Vec<StateId> = ids.into_iter().collect();
        self.edges
            .extend(ids.windows(2).map(|pair| (pair[0], pair[1])));
        self
    }

    /// Like [`chain`](Self::chain), closed with an edge from the last id back
    /// to the first. A single id becomes a self-loop.
    pub fn cycle<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        let ids: Vec<StateId> = ids.into_iter().collect();
        if let (Some(first), Some(last)) = (ids.first().copied(), ids.last().copied()) {
            self = self.chain(ids);
            self.edges.push((last, first));
        }
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Bound the history. Implies `record_history(true)`.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.record_history = true;
        self.config.history_capacity = Some(capacity);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate against `arena`, accumulating ALL issues.
    pub fn validate(&self, arena: &StateArena) -> Validation<(), NonEmptyVec<BuildIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildIssue>>> = Vec::new();

        if self.edges.is_empty() {
            checks.push(Validation::fail(BuildIssue::NoTransitions));
        }

        let mut seen = HashSet::new();
        for id in self.edges.iter().flat_map(|(from, to)| [*from, *to]) {
            if !seen.insert(id) {
                continue;
            }
            let check = if arena.contains(id) {
                Validation::success(())
            } else {
                Validation::fail(BuildIssue::UnknownState { id })
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    /// Returns every validation issue if any state is unknown or no edge was
    /// queued.
    pub fn build(self, arena: &StateArena) -> Result<StateMachine, BuildError> {
        if let Validation::Failure(issues) = self.validate(arena) {
            return Err(BuildError::Invalid(issues.iter().copied().collect()));
        }

        let mut machine = StateMachine::with_config(self.config);
        for (from, to) in self.edges {
            machine.create_transition(from, to);
        }

        debug!(
            nodes = machine.node_count(),
            edges = machine.edge_count(),
            "built state machine"
        );
        Ok(machine)
    }
}
