//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod agent_gateway;
pub mod progress;
pub mod submission_logger;
