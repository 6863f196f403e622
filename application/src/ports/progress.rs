//! Progress notification port
//!
//! Defines the interface for reporting progress while a ticket is submitted.

use ticket_desk_domain::{SubmissionMode, SubmissionState, TicketRequest, TicketResponse};

/// Callback for progress updates during a submission
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait SubmissionProgressNotifier: Send + Sync {
    /// Called before anything else happens for a submission
    fn on_submission_start(&self, request: &TicketRequest, mode: SubmissionMode);

    /// Called on every state machine transition
    fn on_state_change(&self, _state: SubmissionState) {}

    /// Called once with the response that will be shown
    fn on_submission_complete(&self, response: &TicketResponse);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgressNotifier for NoProgress {
    fn on_submission_start(&self, _request: &TicketRequest, _mode: SubmissionMode) {}
    fn on_submission_complete(&self, _response: &TicketResponse) {}
}
