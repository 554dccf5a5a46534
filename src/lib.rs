//! Tickstate: a tick-driven finite state machine
//!
//! A machine advances a single current state through a directed graph of
//! states as simulated time passes. Each state has a time budget and three
//! lifecycle hooks; when a state reports it has finished, the machine follows
//! that state's single outgoing edge.
//!
//! # Core Concepts
//!
//! - **State**: capability trait with `on_begin`, `on_tick`, `on_end` and a
//!   `finished` predicate driven by a [`StateTimer`](core::StateTimer)
//! - **Arena**: owns the states; machines hold only [`StateId`](core::StateId) keys
//! - **Machine**: single-successor edge map plus a current-state cursor,
//!   advanced by [`tick`](machine::StateMachine::tick)
//! - **Checkpoint**: serializable run position for resuming a machine
//!
//! # Example
//!
//! ```rust
//! use tickstate::builder::StateMachineBuilder;
//! use tickstate::core::{DeltaTime, StateArena, TimedState};
//! use tickstate::machine::TickOutcome;
//!
//! let mut arena = StateArena::new();
//! let windup = arena.insert(TimedState::new("Windup", 0.5));
//! let strike = arena.insert(TimedState::new("Strike", 0.25));
//!
//! let mut machine = StateMachineBuilder::new()
//!     .transition(windup, strike)
//!     .build(&arena)
//!     .unwrap();
//!
//! let dt = DeltaTime::from_secs(0.25);
//! assert_eq!(machine.tick(&mut arena, dt).unwrap(), TickOutcome::Ticked { state: windup });
//! assert_eq!(
//!     machine.tick(&mut arena, dt).unwrap(),
//!     TickOutcome::Transitioned { from: windup, to: strike }
//! );
//! assert_eq!(machine.tick(&mut arena, dt).unwrap(), TickOutcome::Halted { from: strike });
//! assert!(machine.is_halted());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{DeltaTime, State, StateArena, StateId, StateTimer, TimedState};
pub use crate::machine::{MachineStatus, StateMachine, TickOutcome};
