//! Port for structured submission logging.
//!
//! Defines the [`SubmissionLogger`] trait for recording submission events
//! (ticket sent, agent reply, failure, canned answer) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable transcript (JSONL).

use serde_json::{Map, Value};
use ticket_desk_domain::TicketId;

/// A structured submission event for logging.
#[derive(Debug, Clone)]
pub struct SubmissionEvent {
    /// Event type identifier (e.g., "submission_started", "agent_reply").
    pub event_type: &'static str,
    /// Ticket the event belongs to; `None` for local answers, which never get an id.
    pub ticket_id: Option<TicketId>,
    /// Event-specific fields.
    pub fields: Map<String, Value>,
}

impl SubmissionEvent {
    /// Build an event from a JSON object literal. Non-object values carry no fields.
    pub fn new(event_type: &'static str, ticket_id: Option<&TicketId>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            event_type,
            ticket_id: ticket_id.cloned(),
            fields,
        }
    }
}

/// Port for logging submission events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait SubmissionLogger: Send + Sync {
    /// Record a submission event.
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_takes_object_fields() {
        let id = TicketId::new("t-1");
        let event = SubmissionEvent::new("agent_reply", Some(&id), json!({"text": "R"}));
        assert_eq!(event.ticket_id, Some(id));
        assert_eq!(event.fields["text"], "R");
    }

    #[test]
    fn test_event_ignores_non_object_fields() {
        let event = SubmissionEvent::new("canned_reply", None, json!("text"));
        assert!(event.fields.is_empty());
    }
}
