//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Options that shape a machine without touching its graph.
///
/// Serializable so an embedding application can keep it next to its own
/// settings.
///
/// # Example
///
/// ```rust
/// use tickstate::machine::MachineConfig;
///
/// let config: MachineConfig =
///     serde_json::from_str(r#"{ "record_history": true, "history_capacity": 64 }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_capacity, Some(64));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Record every transition taken
    pub record_history: bool,
    /// Keep at most this many records (oldest dropped first)
    pub history_capacity: Option<usize>,
}
