//! The `State` capability trait and the timer that drives its defaults.
//!
//! A state is a node with a time-bounded activation. The machine calls its
//! hooks in a fixed order for every activation:
//! `on_begin -> on_tick* -> on_end`.

use super::time::DeltaTime;
use serde::{Deserialize, Serialize};

/// Duration/elapsed pair backing the default lifecycle hooks.
///
/// `elapsed` only carries meaning while the owning state is current; the
/// default `on_end` resets it to zero. Deserialized timers go through the
/// same clamping as [`StateTimer::new`] and [`StateTimer::set_elapsed`].
///
/// # Example
///
/// ```rust
/// use tickstate::core::{DeltaTime, StateTimer};
///
/// let mut timer = StateTimer::new(1.0);
/// timer.advance(DeltaTime::from_secs(0.5));
/// assert!(!timer.is_complete());
/// assert_eq!(timer.remaining(), 0.5);
///
/// timer.advance(DeltaTime::from_secs(0.5));
/// assert!(timer.is_complete());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTimer")]
pub struct StateTimer {
    duration: f32,
    elapsed: f32,
}

#[derive(Deserialize)]
struct RawTimer {
    duration: f32,
    elapsed: f32,
}

impl From<RawTimer> for StateTimer {
    fn from(raw: RawTimer) -> Self {
        let mut timer = if raw.duration.is_infinite() && raw.duration > 0.0 {
            StateTimer::unbounded()
        } else {
            StateTimer::new(raw.duration)
        };
        timer.set_elapsed(raw.elapsed);
        timer
    }
}

impl StateTimer {
    /// Timer that completes once `seconds` have accumulated.
    ///
    /// Negative or NaN durations clamp to zero, which completes on the first
    /// tick.
    pub fn new(seconds: f32) -> Self {
        let duration = if seconds.is_nan() || seconds < 0.0 {
            0.0
        } else {
            seconds
        };
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Timer that never completes on its own.
    pub fn unbounded() -> Self {
        Self {
            duration: f32::INFINITY,
            elapsed: 0.0,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_unbounded(&self) -> bool {
        self.duration.is_infinite()
    }

    /// Time left before completion, never negative.
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn advance(&mut self, dt: DeltaTime) {
        self.elapsed += dt.as_secs();
    }

    /// Boundary inclusive: `elapsed == duration` counts as complete.
    pub fn is_complete(&self) -> bool {
        !self.is_unbounded() && self.elapsed >= self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Overwrite the accumulated time. Used when resuming from a checkpoint.
    pub fn set_elapsed(&mut self, seconds: f32) {
        self.elapsed = if seconds.is_nan() || seconds < 0.0 {
            0.0
        } else {
            seconds
        };
    }
}

impl Default for StateTimer {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Capability interface for machine states.
///
/// Implementors expose a [`StateTimer`] and override whichever hooks they
/// need. The defaults give the plain timed behavior: `on_tick` accumulates
/// elapsed time, `finished` compares it against the duration, and `on_end`
/// resets it.
///
/// Hooks are invoked by [`StateMachine`](crate::machine::StateMachine) only,
/// never interleaved with another state's hooks.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{DeltaTime, State, StateTimer};
///
/// struct Blink {
///     timer: StateTimer,
///     visible: bool,
/// }
///
/// impl State for Blink {
///     fn name(&self) -> &str {
///         "Blink"
///     }
///
///     fn timer(&self) -> &StateTimer {
///         &self.timer
///     }
///
///     fn timer_mut(&mut self) -> &mut StateTimer {
///         &mut self.timer
///     }
///
///     fn on_tick(&mut self, dt: DeltaTime) {
///         self.visible = !self.visible;
///         self.timer.advance(dt);
///     }
/// }
///
/// let mut blink = Blink { timer: StateTimer::new(1.0), visible: false };
/// blink.on_tick(DeltaTime::from_secs(1.0));
/// assert!(blink.visible);
/// assert!(blink.finished());
/// ```
pub trait State: Send {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &str {
        "state"
    }

    fn timer(&self) -> &StateTimer;

    fn timer_mut(&mut self) -> &mut StateTimer;

    /// Called once per activation, before the first `on_tick`.
    fn on_begin(&mut self) {}

    /// Called once per machine tick while this state is current.
    fn on_tick(&mut self, dt: DeltaTime) {
        self.timer_mut().advance(dt);
    }

    /// Completion predicate. Must not have side effects.
    fn finished(&self) -> bool {
        self.timer().is_complete()
    }

    /// Called once per activation, after `finished` returned true and
    /// before the machine follows the outgoing edge.
    fn on_end(&mut self) {
        self.timer_mut().reset();
    }
}
