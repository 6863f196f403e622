//! Wire payload sent to the support agent

use super::id::TicketId;
use super::request::TicketRequest;
use serde::{Deserialize, Serialize};

/// JSON body of `POST /ticket`
///
/// ```json
/// { "ticket_id": "<uuid>", "content": "[FAQ] How do I ...?" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTicketPayload {
    pub ticket_id: TicketId,
    pub content: String,
}

impl AgentTicketPayload {
    pub fn new(ticket_id: TicketId, request: &TicketRequest) -> Self {
        Self {
            ticket_id,
            content: request.content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::category::Category;

    #[test]
    fn test_payload_json_shape() {
        let request = TicketRequest::new(Category::Faq, "Where are invoices?");
        let payload = AgentTicketPayload::new(TicketId::new("t-1"), &request);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ticket_id": "t-1",
                "content": "[FAQ] Where are invoices?"
            })
        );
    }
}
