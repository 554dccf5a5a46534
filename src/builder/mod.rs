//! Builder API for state machine construction.
//!
//! Queue edges fluently, then validate them against an arena in one pass
//! that reports every problem found.

pub mod error;
pub mod machine;

pub use error::{BuildError, BuildIssue};
pub use machine::StateMachineBuilder;
