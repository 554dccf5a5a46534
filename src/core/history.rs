//! Transition history tracking.
//!
//! Records are stamped with the machine clock (simulated seconds), not wall
//! time, so histories from replayed or fixed-step runs compare equal.

use super::id::StateId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single transition taken by a machine.
///
/// `to` is `None` when the finishing state had no outgoing edge and the
/// machine halted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that finished
    pub from: StateId,
    /// Its successor, if any
    pub to: Option<StateId>,
    /// Machine clock at the moment of the transition, in seconds
    pub at: f64,
}

impl TransitionRecord {
    pub fn is_halt(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered history of transitions with an optional capacity.
///
/// When a capacity is set, the oldest records are dropped first.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateHistory, StateId, TransitionRecord};
///
/// let a = StateId::new();
/// let b = StateId::new();
///
/// let mut history = StateHistory::new();
/// history.record(TransitionRecord { from: a, to: Some(b), at: 2.0 });
/// history.record(TransitionRecord { from: b, to: None, at: 3.0 });
///
/// assert_eq!(history.path(), vec![a, b]);
/// assert_eq!(history.span(), Some(1.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    records: VecDeque<TransitionRecord>,
    capacity: Option<usize>,
}

impl StateHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a history that keeps at most `capacity` records.
    ///
    /// Only the bound is stored; storage grows as records arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.records.len() >= capacity {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// States visited, in order: the first record's `from`, then every
    /// successor. A halt contributes nothing.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().filter_map(|record| record.to));
        path
    }

    /// Simulated seconds between the first and last retained record.
    pub fn span(&self) -> Option<f64> {
        match (self.records.front(), self.records.back()) {
            (Some(first), Some(last)) => Some(last.at - first.at),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
