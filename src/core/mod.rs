//! Core building blocks: time, state identity, the `State` trait and its
//! owning arena, plus transition history.
//!
//! Nothing here knows about graphs or ticking; that lives in
//! [`machine`](crate::machine).

mod arena;
mod history;
mod id;
mod state;
mod time;
mod timed;

pub use arena::StateArena;
pub use history::{StateHistory, TransitionRecord};
pub use id::StateId;
pub use state::{State, StateTimer};
pub use time::DeltaTime;
pub use timed::TimedState;
