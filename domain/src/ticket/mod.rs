//! Support tickets and their responses.
//!
//! - [`category::Category`]: type of request chosen on the form
//! - [`request::TicketRequest`]: category + description for one submission
//! - [`payload::AgentTicketPayload`]: JSON body sent to the agent
//! - [`reply::extract_reply`]: reply envelope normalization
//! - [`canned::canned_answer`]: offline answers
//! - [`state::SubmissionState`]: per-submission lifecycle

pub mod canned;
pub mod category;
pub mod id;
pub mod payload;
pub mod reply;
pub mod request;
pub mod response;
pub mod state;
