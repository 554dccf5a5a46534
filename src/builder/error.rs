//! Build errors for the state machine builder.

use crate::core::StateId;
use thiserror::Error;

/// A single problem found while validating a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildIssue {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("State '{id}' is not in the arena")]
    UnknownState { id: StateId },
}

/// Errors that can occur when building a state machine.
///
/// Validation reports every issue at once rather than the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Invalid state machine ({} issue(s)): {}", .0.len(), describe(.0))]
    Invalid(Vec<BuildIssue>),
}

impl BuildError {
    pub fn issues(&self) -> &[BuildIssue] {
        match self {
            Self::Invalid(issues) => issues,
        }
    }
}

fn describe(issues: &[BuildIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_issue() {
        let id = StateId::new();
        let error = BuildError::Invalid(vec![
            BuildIssue::NoTransitions,
            BuildIssue::UnknownState { id },
        ]);

        let message = error.to_string();
        assert!(message.contains("2 issue(s)"));
        assert!(message.contains("No transitions defined"));
        assert!(message.contains(&id.to_string()));
    }
}
