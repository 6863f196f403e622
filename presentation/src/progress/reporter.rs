//! Progress reporting for ticket submissions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use ticket_desk_application::SubmissionProgressNotifier;
use ticket_desk_domain::{
    ResponseSource, SubmissionMode, SubmissionState, TicketRequest, TicketResponse,
};

/// Shows a "Sending..." spinner on stderr while the agent is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: String) {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message("Sending...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn finish_spinner(&self, message: String) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_with_message(message);
        }
    }

    fn set_message(&self, message: &'static str) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgressNotifier for ProgressReporter {
    fn on_submission_start(&self, request: &TicketRequest, mode: SubmissionMode) {
        // Local answers are instant; nothing to animate
        if mode == SubmissionMode::Local {
            return;
        }
        self.start_spinner(request.category().label().to_string());
    }

    fn on_state_change(&self, state: SubmissionState) {
        if state == SubmissionState::AwaitingReply {
            self.set_message("Waiting for the agent...");
        }
    }

    fn on_submission_complete(&self, response: &TicketResponse) {
        let message = match response.source() {
            ResponseSource::Agent => format!("{}", "Reply received".green()),
            ResponseSource::Canned => format!("{}", "Answered locally".green()),
            ResponseSource::Fallback => format!("{}", "Agent unavailable".red()),
        };
        self.finish_spinner(message);
    }
}
