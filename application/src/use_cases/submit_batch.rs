//! Submit Batch use case.
//!
//! Sends a list of questions through [`SubmitTicketUseCase`] one after the
//! other and collects the answers. The input/output JSON layout matches the
//! agent evaluation format:
//!
//! ```json
//! { "Questions": [ { "id": "Q1", "query": "...", "category": "faq" } ] }
//! { "team": "...", "Answers": [ { "id": "Q1", "answer": "..." } ] }
//! ```

use crate::ports::progress::SubmissionProgressNotifier;
use crate::use_cases::submit_ticket::SubmitTicketUseCase;
use serde::{Deserialize, Serialize};
use ticket_desk_domain::{Category, TicketId, TicketRequest};
use tracing::{info, warn};

/// One question of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchQuestion {
    pub id: String,
    pub query: String,
    /// Optional category; unknown values are submitted without a category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input for the [`SubmitBatchUseCase`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitBatchInput {
    #[serde(rename = "Questions")]
    pub questions: Vec<BatchQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnswer {
    pub id: String,
    pub answer: String,
}

/// Output of the [`SubmitBatchUseCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBatchOutput {
    pub team: String,
    #[serde(rename = "Answers")]
    pub answers: Vec<BatchAnswer>,
    /// How many answers are the fallback message. Not part of the JSON layout.
    #[serde(skip)]
    pub failed: usize,
}

/// Use case for submitting a batch of tickets sequentially.
pub struct SubmitBatchUseCase {
    submit: SubmitTicketUseCase,
    team: String,
}

impl SubmitBatchUseCase {
    pub fn new(submit: SubmitTicketUseCase, team: impl Into<String>) -> Self {
        Self {
            submit,
            team: team.into(),
        }
    }

    /// Submit every question in order. A failed item never aborts the batch.
    pub async fn execute(
        &self,
        input: SubmitBatchInput,
        progress: &dyn SubmissionProgressNotifier,
    ) -> SubmitBatchOutput {
        info!("Starting batch of {} questions", input.questions.len());

        let mut answers = Vec::with_capacity(input.questions.len());
        let mut failed = 0;

        for question in input.questions {
            let category = match question.category.as_deref() {
                Some(raw) => {
                    let category = Category::parse_lossy(raw);
                    if !category.is_set() && !raw.trim().is_empty() {
                        warn!("Question {}: unknown category '{}'", question.id, raw);
                    }
                    category
                }
                None => Category::Unset,
            };

            let request = TicketRequest::new(category, question.query);
            let output = self
                .submit
                .execute_with_id(TicketId::new(question.id.clone()), &request, progress)
                .await;

            if output.response.is_fallback() {
                failed += 1;
            }
            answers.push(BatchAnswer {
                id: question.id,
                answer: output.response.into_text(),
            });
        }

        info!(
            "Batch complete: {} answered, {} failed",
            answers.len() - failed,
            failed
        );

        SubmitBatchOutput {
            team: self.team.clone(),
            answers,
            failed,
        }
    }
}
