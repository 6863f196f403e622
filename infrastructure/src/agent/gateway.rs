//! HTTP Agent Gateway implementation

use super::error::{AgentClientError, Result};
use crate::config::FileAgentConfig;
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use ticket_desk_application::ports::agent_gateway::{AgentGateway, GatewayError};
use ticket_desk_domain::AgentTicketPayload;
use ticket_desk_domain::util::clip;
use tracing::{debug, info};

/// Maximum reply body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Maximum length of an error body kept for diagnostics
const MAX_ERROR_BODY: usize = 2 * 1024;

/// Agent gateway that POSTs tickets as JSON
///
/// Exactly one request per ticket; no retries. Timeouts configured here bound
/// the transport only; the use case applies its own overall timeout.
pub struct HttpAgentGateway {
    client: reqwest::Client,
    endpoint: Url,
    endpoint_str: String,
}

impl HttpAgentGateway {
    /// Create a gateway for `endpoint` with optional transport timeouts
    pub fn new(
        endpoint: &str,
        request_timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| AgentClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AgentClientError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "ticket-desk/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        info!("HttpAgentGateway initialized for {}", url);

        Ok(Self {
            client,
            endpoint_str: url.to_string(),
            endpoint: url,
        })
    }

    /// Create a gateway from the `[agent]` config section
    pub fn from_config(config: &FileAgentConfig) -> Result<Self> {
        Self::new(
            &config.endpoint,
            config.request_timeout(),
            config.connect_timeout(),
        )
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Unreachable(e.to_string())
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn send_ticket(
        &self,
        payload: &AgentTicketPayload,
    ) -> std::result::Result<Value, GatewayError> {
        debug!("POST {} ticket_id={}", self.endpoint, payload.ticket_id);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if response.content_length().unwrap_or(0) > MAX_BODY_SIZE as u64 {
            return Err(GatewayError::MalformedReply(format!(
                "reply too large: {} bytes (max: {} bytes)",
                response.content_length().unwrap_or(0),
                MAX_BODY_SIZE
            )));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        if body.len() > MAX_BODY_SIZE {
            return Err(GatewayError::MalformedReply(format!(
                "reply too large: {} bytes",
                body.len()
            )));
        }

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(GatewayError::NonSuccessStatus {
                status: status.as_u16(),
                body: clip(&text, MAX_ERROR_BODY).into_owned(),
            });
        }

        debug!("Agent replied {} ({} bytes)", status.as_u16(), body.len());

        serde_json::from_slice(&body).map_err(|e| GatewayError::MalformedReply(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint_str
    }
}
