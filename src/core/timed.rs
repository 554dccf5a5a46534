//! The plain timed state.

use super::state::{State, StateTimer};

/// A named state that uses every default hook.
///
/// Useful on its own for delays and phases that only need to last a given
/// time, and as the building block in tests.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{DeltaTime, State, TimedState};
///
/// let mut wait = TimedState::new("Wait", 1.0);
/// wait.on_tick(DeltaTime::from_secs(1.0));
/// assert!(wait.finished());
/// assert_eq!(wait.name(), "Wait");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimedState {
    name: String,
    timer: StateTimer,
}

impl TimedState {
    pub fn new(name: impl Into<String>, seconds: f32) -> Self {
        Self {
            name: name.into(),
            timer: StateTimer::new(seconds),
        }
    }

    /// A state that stays current until the machine is steered elsewhere.
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timer: StateTimer::unbounded(),
        }
    }
}

impl State for TimedState {
    fn name(&self) -> &str {
        &self.name
    }

    fn timer(&self) -> &StateTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut StateTimer {
        &mut self.timer
    }
}
