//! The tick-driven machine and its outcomes.
//!
//! A [`StateMachine`] owns the node set, the single-successor edge map, the
//! current-state cursor and the begin latch. Callers feed it time with
//! [`StateMachine::tick`]; it runs the current state's hooks and follows
//! edges as states finish.

mod config;
mod error;
mod graph;
mod outcome;

pub use config::MachineConfig;
pub use error::MachineError;
pub use graph::StateMachine;
pub use outcome::{MachineStatus, TickOutcome};
