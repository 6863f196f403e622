//! Agent Gateway port
//!
//! Defines the interface for delivering a ticket to the remote support agent.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use ticket_desk_domain::AgentTicketPayload;

/// Errors that can occur while talking to the support agent
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Agent unreachable: {0}")]
    Unreachable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Submission cancelled")]
    Cancelled,

    #[error("Agent returned HTTP {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),
}

impl GatewayError {
    /// Short machine-readable kind, used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Unreachable(_) => "unreachable",
            GatewayError::Timeout => "timeout",
            GatewayError::Cancelled => "cancelled",
            GatewayError::NonSuccessStatus { .. } => "non_success_status",
            GatewayError::MalformedReply(_) => "malformed_reply",
        }
    }
}

/// Gateway to the support agent
///
/// One call is one outbound request; implementations must not retry.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Deliver a ticket and return the agent's parsed JSON reply envelope
    async fn send_ticket(&self, payload: &AgentTicketPayload) -> Result<Value, GatewayError>;

    /// Where tickets are delivered, for display and logs
    fn endpoint(&self) -> &str;
}
