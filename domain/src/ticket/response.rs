//! Ticket response value object

use serde::{Deserialize, Serialize};

/// Message shown whenever a remote submission fails for any reason
pub const FALLBACK_MESSAGE: &str =
    "Backend error: the support agent could not be reached. Please try again later.";

/// Where the response text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    /// Extracted from the agent's reply
    Agent,
    /// Fixed local answer for the category
    Canned,
    /// The remote call failed
    Fallback,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseSource::Agent => "agent",
            ResponseSource::Canned => "canned",
            ResponseSource::Fallback => "fallback",
        }
    }
}

/// Display text produced by one submission (Value Object)
///
/// The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    text: String,
    source: ResponseSource,
}

impl TicketResponse {
    /// Response from the agent. Blank text degrades to the fallback message.
    pub fn from_agent(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            return Self::fallback();
        }
        Self {
            text,
            source: ResponseSource::Agent,
        }
    }

    pub fn canned(text: &'static str) -> Self {
        Self {
            text: text.to_string(),
            source: ResponseSource::Canned,
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_MESSAGE.to_string(),
            source: ResponseSource::Fallback,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> ResponseSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ResponseSource::Fallback
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for TicketResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
