//! Domain layer for ticket-desk
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ticket
//!
//! A support request made of a [`Category`] and a free-text description.
//! Each submission produces exactly one [`TicketResponse`], whose text is
//! never empty:
//!
//! - **Agent**: extracted from the remote agent's reply envelope
//! - **Canned**: fixed answer for the category (local mode)
//! - **Fallback**: fixed message when the remote call fails

pub mod config;
pub mod core;
pub mod ticket;
pub mod util;

// Re-export commonly used types
pub use config::{
    OutputFormat, SubmissionMode,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::error::DomainError;
pub use ticket::{
    canned::canned_answer,
    category::Category,
    id::TicketId,
    payload::AgentTicketPayload,
    reply::{REPLY_FIELDS, extract_reply},
    request::TicketRequest,
    response::{FALLBACK_MESSAGE, ResponseSource, TicketResponse},
    state::SubmissionState,
};
