//! Application layer for ticket-desk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SubmissionParams;
pub use ports::{
    agent_gateway::{AgentGateway, GatewayError},
    progress::{NoProgress, SubmissionProgressNotifier},
    submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
};
pub use use_cases::submit_batch::{
    BatchAnswer, BatchQuestion, SubmitBatchInput, SubmitBatchOutput, SubmitBatchUseCase,
};
pub use use_cases::submit_ticket::{SubmitTicketOutput, SubmitTicketUseCase};
