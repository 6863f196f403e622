//! Per-submission state machine
//!
//! ```text
//! Idle ──begin──▶ AwaitingReply ──succeed──▶ Succeeded
//!                      │
//!                      └────fail────▶ Failed
//! ```
//!
//! Both outcomes are terminal; there are no retries.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    AwaitingReply,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::AwaitingReply => "awaiting_reply",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }

    /// `Idle -> AwaitingReply`
    pub fn begin(self) -> Result<Self, DomainError> {
        self.transition(SubmissionState::Idle, SubmissionState::AwaitingReply)
    }

    /// `AwaitingReply -> Succeeded`
    pub fn succeed(self) -> Result<Self, DomainError> {
        self.transition(SubmissionState::AwaitingReply, SubmissionState::Succeeded)
    }

    /// `AwaitingReply -> Failed`
    pub fn fail(self) -> Result<Self, DomainError> {
        self.transition(SubmissionState::AwaitingReply, SubmissionState::Failed)
    }

    fn transition(self, expected: Self, next: Self) -> Result<Self, DomainError> {
        if self == expected {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let state = SubmissionState::default().begin().unwrap().succeed().unwrap();
        assert_eq!(state, SubmissionState::Succeeded);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_failure_path() {
        let state = SubmissionState::Idle.begin().unwrap().fail().unwrap();
        assert_eq!(state, SubmissionState::Failed);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_terminal_states_reject_transitions() {
        assert!(SubmissionState::Succeeded.fail().is_err());
        assert!(SubmissionState::Failed.begin().is_err());
        assert!(SubmissionState::Failed.succeed().is_err());
    }

    #[test]
    fn test_cannot_finish_without_begin() {
        let err = SubmissionState::Idle.succeed().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: "idle",
                to: "succeeded"
            }
        );
    }
}
