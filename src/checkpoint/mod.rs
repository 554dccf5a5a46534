//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint captures where a machine is in its run: the current state,
//! the begin latch, that state's elapsed time and the machine clock. The
//! graph topology is never captured; a checkpoint is restored into a machine
//! rebuilt with the same edges and an arena holding the same ids.

use crate::core::{StateArena, StateId};
use crate::machine::{MachineError, StateMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Extension given to checkpoint files saved without one.
pub const DEFAULT_EXTENSION: &str = "dat";

/// Serializable run position of a state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// Current state, `None` when unstarted or halted
    pub current: Option<StateId>,

    /// Whether the current activation has begun
    pub entered: bool,

    /// Elapsed seconds of the current state
    pub elapsed: f32,

    /// Machine clock in simulated seconds
    pub clock: f64,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Write the binary form to `path`, adding `.dat` if it has no extension.
    /// Returns the path actually written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, CheckpointError> {
        let path = with_default_extension(path.as_ref());
        std::fs::write(&path, self.to_bytes()?)?;
        debug!(path = %path.display(), checkpoint = %self.id, "checkpoint saved");
        Ok(path)
    }

    /// Read a checkpoint written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        let path = with_default_extension(path.as_ref());
        let bytes = std::fs::read(&path)?;
        Self::from_bytes(&bytes)
    }
}

fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

fn validation(message: impl Into<String>) -> CheckpointError {
    CheckpointError::ValidationFailed(message.into())
}

impl StateMachine {
    /// Capture the machine's run position.
    pub fn checkpoint(&self, arena: &StateArena) -> Result<Checkpoint, MachineError> {
        let elapsed = match self.current {
            Some(id) => arena
                .get(id)
                .ok_or(MachineError::MissingState { id })?
                .timer()
                .elapsed(),
            None => 0.0,
        };

        Ok(Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            current: self.current,
            entered: self.entered,
            elapsed,
            clock: self.clock,
        })
    }

    /// Resume from `checkpoint`.
    ///
    /// The checkpoint's state must be a node of this machine and present in
    /// `arena`. An activation in progress is abandoned as with
    /// [`set_current`](StateMachine::set_current). On error the machine and
    /// arena are unchanged.
    pub fn restore(
        &mut self,
        arena: &mut StateArena,
        checkpoint: &Checkpoint,
    ) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if !(checkpoint.clock.is_finite() && checkpoint.clock >= 0.0) {
            return Err(validation(format!("invalid clock {}", checkpoint.clock)));
        }
        if !(checkpoint.elapsed.is_finite() && checkpoint.elapsed >= 0.0) {
            return Err(validation(format!("invalid elapsed {}", checkpoint.elapsed)));
        }

        match checkpoint.current {
            Some(id) if !self.nodes.contains(&id) => {
                return Err(validation(format!("state '{id}' is not a node of this machine")));
            }
            Some(id) if !arena.contains(id) => {
                return Err(validation(format!("state '{id}' is missing from the arena")));
            }
            None if checkpoint.entered => {
                return Err(validation("entered latch set without a current state"));
            }
            _ => {}
        }

        self.interrupt(arena);
        self.current = checkpoint.current;
        self.entered = checkpoint.entered;
        self.clock = checkpoint.clock;

        if let Some(state) = checkpoint.current.and_then(|id| arena.get_mut(id)) {
            state.timer_mut().set_elapsed(checkpoint.elapsed);
        }

        debug!(
            checkpoint = %checkpoint.id,
            current = ?checkpoint.current,
            clock = checkpoint.clock,
            "restored from checkpoint"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeltaTime, TimedState};
    use crate::machine::{MachineStatus, TickOutcome};

    fn two_state_machine() -> (StateArena, StateMachine, StateId, StateId) {
        let mut arena = StateArena::new();
        let a = arena.insert(TimedState::new("A", 2.0));
        let b = arena.insert(TimedState::new("B", 1.0));
        let mut machine = StateMachine::new();
        machine.create_transition(a, b);
        (arena, machine, a, b)
    }

    #[test]
    fn checkpoint_captures_run_position() {
        let (mut arena, mut machine, a, _) = two_state_machine();
        machine.tick(&mut arena, DeltaTime::from_secs(1.5)).unwrap();

        let checkpoint = machine.checkpoint(&arena).unwrap();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.current, Some(a));
        assert!(checkpoint.entered);
        assert_eq!(checkpoint.elapsed, 1.5);
        assert_eq!(checkpoint.clock, 1.5);
    }

    #[test]
    fn restore_resumes_mid_activation() {
        let (mut arena, mut machine, a, b) = two_state_machine();
        machine.tick(&mut arena, DeltaTime::from_secs(1.5)).unwrap();
        let checkpoint = machine.checkpoint(&arena).unwrap();

        // A fresh process rebuilds the same graph over the same arena.
        let mut resumed = StateMachine::new();
        resumed.create_transition(a, b);
        arena.get_mut(a).unwrap().timer_mut().reset();

        resumed.restore(&mut arena, &checkpoint).unwrap();
        assert!(resumed.is_entered());
        assert_eq!(resumed.clock(), 1.5);

        let outcome = resumed
            .tick(&mut arena, DeltaTime::from_secs(0.5))
            .unwrap();
        assert_eq!(outcome, TickOutcome::Transitioned { from: a, to: b });
    }

    #[test]
    fn restore_halted_checkpoint() {
        let (mut arena, mut machine, _, _) = two_state_machine();
        for _ in 0..3 {
            machine.tick(&mut arena, DeltaTime::from_secs(1.0)).unwrap();
        }
        let checkpoint = machine.checkpoint(&arena).unwrap();
        assert_eq!(checkpoint.current, None);

        let (mut arena2, mut fresh, _, _) = two_state_machine();
        fresh.restore(&mut arena2, &checkpoint).unwrap();
        assert_eq!(fresh.status(), MachineStatus::Halted);
    }

    #[test]
    fn checkpoint_requires_current_in_arena() {
        let (_, machine, a, _) = two_state_machine();
        let result = machine.checkpoint(&StateArena::new());
        assert_eq!(result, Err(MachineError::MissingState { id: a }));
    }

    #[test]
    fn restore_rejects_unknown_node() {
        let (mut arena, mut machine, _, _) = two_state_machine();
        let stray = arena.insert(TimedState::new("Stray", 1.0));
        let mut checkpoint = machine.checkpoint(&arena).unwrap();
        checkpoint.current = Some(stray);

        let result = machine.restore(&mut arena, &checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_unsupported_version() {
        let (mut arena, mut machine, _, _) = two_state_machine();
        let mut checkpoint = machine.checkpoint(&arena).unwrap();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = machine.restore(&mut arena, &checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn restore_rejects_latch_without_state() {
        let (mut arena, mut machine, _, _) = two_state_machine();
        let mut checkpoint = machine.checkpoint(&arena).unwrap();
        checkpoint.current = None;
        checkpoint.entered = true;

        let result = machine.restore(&mut arena, &checkpoint);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn json_roundtrip() {
        let (arena, machine, _, _) = two_state_machine();
        let checkpoint = machine.checkpoint(&arena).unwrap();

        let json = checkpoint.to_json().unwrap();
        assert_eq!(Checkpoint::from_json(&json).unwrap(), checkpoint);
    }

    #[test]
    fn binary_rejects_garbage() {
        let result = Checkpoint::from_bytes(&[0xff, 0x01]);
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn save_adds_default_extension() {
        let dir = tempfile::tempdir().unwrap();
        let (arena, machine, _, _) = two_state_machine();
        let checkpoint = machine.checkpoint(&arena).unwrap();

        let written = checkpoint.save(dir.path().join("run")).unwrap();
        assert_eq!(written.extension().unwrap(), DEFAULT_EXTENSION);

        let loaded = Checkpoint::load(dir.path().join("run")).unwrap();
        assert_eq!(loaded, checkpoint);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Checkpoint::load(dir.path().join("absent.dat"));
        assert!(matches!(result, Err(CheckpointError::Io(_))));
    }
}
