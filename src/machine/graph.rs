//! The tick-driven state machine.

use crate::core::{DeltaTime, StateArena, StateHistory, StateId, TransitionRecord};
use crate::machine::config::MachineConfig;
use crate::machine::error::MachineError;
use crate::machine::outcome::{MachineStatus, TickOutcome};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Drives a single current state through a graph of single-successor edges.
///
/// The machine holds [`StateId`] keys only; the states themselves live in a
/// [`StateArena`] passed to every call that needs to run hooks.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{DeltaTime, StateArena, TimedState};
/// use tickstate::machine::{MachineStatus, StateMachine, TickOutcome};
///
/// let mut arena = StateArena::new();
/// let a = arena.insert(TimedState::new("A", 2.0));
/// let b = arena.insert(TimedState::new("B", 1.0));
///
/// let mut machine = StateMachine::new();
/// machine.create_transition(a, b);
///
/// let dt = DeltaTime::from_secs(1.0);
/// assert_eq!(machine.tick(&mut arena, dt)?, TickOutcome::Ticked { state: a });
/// assert_eq!(machine.tick(&mut arena, dt)?, TickOutcome::Transitioned { from: a, to: b });
/// assert_eq!(machine.tick(&mut arena, dt)?, TickOutcome::Halted { from: b });
/// assert_eq!(machine.status(), MachineStatus::Halted);
/// # Ok::<(), tickstate::machine::MachineError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachine {
    pub(crate) nodes: HashSet<StateId>,
    pub(crate) edges: HashMap<StateId, StateId>,
    pub(crate) current: Option<StateId>,
    pub(crate) entered: bool,
    pub(crate) clock: f64,
    pub(crate) history: Option<StateHistory>,
}

impl StateMachine {
    /// Create an empty, unstarted machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty machine with history recording set up by `config`.
    pub fn with_config(config: MachineConfig) -> Self {
        let history = match (config.record_history, config.history_capacity) {
            (false, _) => None,
            (true, None) => Some(StateHistory::new()),
            (true, Some(capacity)) => Some(StateHistory::with_capacity(capacity)),
        };
        Self {
            history,
            ..Self::default()
        }
    }

    /// Register `from -> to`, adding both as nodes.
    ///
    /// A node has at most one successor: registering a second edge from the
    /// same `from` replaces the first. When no state is current (a fresh or
    /// halted machine), `from` becomes the current state and begins on the
    /// next tick.
    pub fn create_transition(&mut self, from: StateId, to: StateId) {
        let seed = self.current.is_none();
        self.nodes.insert(from);
        self.nodes.insert(to);

        if let Some(previous) = self.edges.insert(from, to) {
            if previous != to {
                debug!(%from, %previous, %to, "replaced outgoing edge");
            }
        }

        if seed {
            debug!(initial = %from, "machine started");
            self.current = Some(from);
            self.entered = false;
        }
    }

    /// Advance the current state by `dt`.
    ///
    /// Runs `on_begin` if the activation has not begun, then `on_tick`. If the
    /// state reports finished, runs `on_end` and follows its outgoing edge.
    /// The successor's `on_begin` waits for the next tick.
    ///
    /// Ticking a machine with no current state is a no-op. The only error is
    /// a current id missing from `arena`, in which case nothing runs and the
    /// machine is left unchanged.
    pub fn tick(
        &mut self,
        arena: &mut StateArena,
        dt: DeltaTime,
    ) -> Result<TickOutcome, MachineError> {
        let Some(id) = self.current else {
            return Ok(TickOutcome::Idle);
        };

        let Some(state) = arena.get_mut(id) else {
            warn!(%id, "current state missing from arena");
            return Err(MachineError::MissingState { id });
        };

        if !self.entered {
            trace!(state = state.name(), %id, "on_begin");
            state.on_begin();
            self.entered = true;
        }

        state.on_tick(dt);
        self.clock += f64::from(dt.as_secs());

        if !state.finished() {
            trace!(state = state.name(), %id, %dt, "ticked");
            return Ok(TickOutcome::Ticked { state: id });
        }

        trace!(state = state.name(), %id, "on_end");
        state.on_end();
        self.entered = false;

        Ok(self.transition(id))
    }

    fn transition(&mut self, from: StateId) -> TickOutcome {
        let next = self.edges.get(&from).copied();
        self.current = next;

        if let Some(history) = self.history.as_mut() {
            history.record(TransitionRecord {
                from,
                to: next,
                at: self.clock,
            });
        }

        match next {
            Some(to) => {
                debug!(%from, %to, clock = self.clock, "transitioned");
                TickOutcome::Transitioned { from, to }
            }
            None => {
                debug!(%from, clock = self.clock, "halted at dead end");
                TickOutcome::Halted { from }
            }
        }
    }

    /// Steer the machine to `id`, which must already be a node.
    ///
    /// Resumes a halted machine at a chosen node. An activation in progress is
    /// abandoned without `on_end` (the state never finished) but its elapsed
    /// time is reset. `id` begins a fresh activation on the next tick.
    pub fn set_current(&mut self, arena: &mut StateArena, id: StateId) -> Result<(), MachineError> {
        if !self.nodes.contains(&id) {
            return Err(MachineError::UnknownNode { id });
        }
        self.interrupt(arena);
        debug!(%id, "current state reassigned");
        self.current = Some(id);
        Ok(())
    }

    /// Drop every node, edge and record, returning to `Unstarted`.
    ///
    /// The next registered transition picks a fresh initial state. States in
    /// `arena` are untouched apart from resetting an interrupted activation.
    pub fn clear(&mut self, arena: &mut StateArena) {
        self.interrupt(arena);
        self.nodes.clear();
        self.edges.clear();
        self.current = None;
        self.clock = 0.0;
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
        debug!("machine cleared");
    }

    /// Abandon the current activation, if one has begun.
    pub(crate) fn interrupt(&mut self, arena: &mut StateArena) {
        if let (true, Some(id)) = (self.entered, self.current) {
            if let Some(state) = arena.get_mut(id) {
                state.timer_mut().reset();
            }
            trace!(%id, "activation interrupted");
        }
        self.entered = false;
    }

    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// True once `on_begin` ran for the current activation.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// True when no state is current. Also true for an unstarted machine.
    pub fn is_halted(&self) -> bool {
        self.current.is_none()
    }

    pub fn status(&self) -> MachineStatus {
        match (self.current, self.nodes.is_empty()) {
            (Some(_), _) => MachineStatus::Running,
            (None, true) => MachineStatus::Unstarted,
            (None, false) => MachineStatus::Halted,
        }
    }

    pub fn successor(&self, id: StateId) -> Option<StateId> {
        self.edges.get(&id).copied()
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = StateId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = (StateId, StateId)> + '_ {
        self.edges.iter().map(|(from, to)| (*from, *to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total simulated seconds ticked into states.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Recorded transitions, if history is enabled.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }
}
