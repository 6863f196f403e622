//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod submit_batch;
pub mod submit_ticket;
