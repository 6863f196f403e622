//! HTTP adapter for the support agent.
//!
//! - [`gateway::HttpAgentGateway`] — `AgentGateway` over `POST /ticket`
//! - [`error::AgentClientError`] — construction errors

pub mod error;
pub mod gateway;
