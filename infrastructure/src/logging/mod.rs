//! Logging infrastructure — structured submission logging.
//!
//! Provides [`JsonlSubmissionLogger`], a JSONL file writer that implements
//! the [`SubmissionLogger`](ticket_desk_application::SubmissionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlSubmissionLogger;
