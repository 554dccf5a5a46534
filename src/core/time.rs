//! Simulated time deltas fed to the machine on every tick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Time elapsed between two ticks, in seconds.
///
/// The machine is agnostic to where the value comes from: a frame timer,
/// a fixed simulation step, or a test feeding constants. Deltas are never
/// negative; construction clamps negative and NaN inputs to zero.
///
/// # Example
///
/// ```rust
/// use tickstate::core::DeltaTime;
/// use std::time::Duration;
///
/// let dt = DeltaTime::from_secs(0.25);
/// assert_eq!(dt.as_millis(), 250.0);
///
/// let from_std: DeltaTime = Duration::from_millis(500).into();
/// assert_eq!(from_std.as_secs(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DeltaTime(f32);

impl DeltaTime {
    /// A zero-length tick.
    pub const ZERO: DeltaTime = DeltaTime(0.0);

    /// Create a delta from seconds.
    pub fn from_secs(seconds: f32) -> Self {
        if seconds.is_nan() || seconds < 0.0 {
            Self::ZERO
        } else {
            DeltaTime(seconds)
        }
    }

    /// Create a delta from milliseconds.
    pub fn from_millis(millis: f32) -> Self {
        Self::from_secs(millis / 1_000.0)
    }

    pub fn as_secs(self) -> f32 {
        self.0
    }

    pub fn as_millis(self) -> f32 {
        self.0 * 1_000.0
    }

    pub fn as_micros(self) -> f32 {
        self.0 * 1_000_000.0
    }

    pub fn as_nanos(self) -> f32 {
        self.0 * 1_000_000_000.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f32> for DeltaTime {
    fn from(seconds: f32) -> Self {
        Self::from_secs(seconds)
    }
}

impl From<Duration> for DeltaTime {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs_f32())
    }
}

impl From<DeltaTime> for f32 {
    fn from(dt: DeltaTime) -> Self {
        dt.0
    }
}

impl fmt::Display for DeltaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
