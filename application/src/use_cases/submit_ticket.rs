//! Submit Ticket use case.
//!
//! Turns a [`TicketRequest`] into a [`TicketResponse`] using one of two modes:
//!
//! - **Remote**: one POST to the support agent via [`AgentGateway`], reply
//!   normalized with [`extract_reply`]
//! - **Local**: fixed answer per category via [`canned_answer`]
//!
//! Submission never fails from the caller's point of view. Every gateway error
//! (unreachable, timeout, cancellation, error status, unparseable body) is
//! logged and replaced by the fallback message. There are no retries.

use crate::config::SubmissionParams;
use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::progress::SubmissionProgressNotifier;
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use serde_json::Value;
use std::sync::Arc;
use ticket_desk_domain::util::clip;
use ticket_desk_domain::{
    AgentTicketPayload, DomainError, SubmissionMode, SubmissionState, TicketId, TicketRequest,
    TicketResponse, canned_answer, extract_reply,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of one submission.
#[derive(Debug, Clone)]
pub struct SubmitTicketOutput {
    /// Id sent to the agent (remote mode only).
    pub ticket_id: Option<TicketId>,
    /// Text to show the user. Never empty.
    pub response: TicketResponse,
    /// Terminal state of the submission (`Succeeded` in local mode).
    pub state: SubmissionState,
}

/// Use case for submitting a support ticket.
///
/// Holds only shared, immutable collaborators: concurrent `execute` calls
/// are independent of each other.
#[derive(Clone)]
pub struct SubmitTicketUseCase {
    gateway: Option<Arc<dyn AgentGateway>>,
    params: SubmissionParams,
    submission_logger: Arc<dyn SubmissionLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl SubmitTicketUseCase {
    /// Create a use case that talks to the agent through `gateway`.
    ///
    /// `params.mode` still decides the strategy, so a gateway can be wired
    /// while running in local mode.
    pub fn new(gateway: Arc<dyn AgentGateway>, params: SubmissionParams) -> Self {
        Self {
            gateway: Some(gateway),
            params,
            submission_logger: Arc::new(NoSubmissionLogger),
            cancellation_token: None,
        }
    }

    /// Create a use case that only answers from the canned table.
    pub fn local() -> Self {
        Self {
            gateway: None,
            params: SubmissionParams::local(),
            submission_logger: Arc::new(NoSubmissionLogger),
            cancellation_token: None,
        }
    }

    /// Create with a submission logger.
    pub fn with_submission_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.submission_logger = logger;
        self
    }

    /// Set a cancellation token for interrupting an in-flight submission
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn mode(&self) -> SubmissionMode {
        self.params.mode
    }

    /// Agent endpoint, if a gateway is wired.
    pub fn endpoint(&self) -> Option<&str> {
        self.gateway.as_deref().map(|g| g.endpoint())
    }

    /// Submit a ticket with a freshly generated id.
    pub async fn execute(
        &self,
        request: &TicketRequest,
        progress: &dyn SubmissionProgressNotifier,
    ) -> SubmitTicketOutput {
        self.execute_with_id(TicketId::generate(), request, progress)
            .await
    }

    /// Submit a ticket under a caller-chosen id (ignored in local mode).
    pub async fn execute_with_id(
        &self,
        ticket_id: TicketId,
        request: &TicketRequest,
        progress: &dyn SubmissionProgressNotifier,
    ) -> SubmitTicketOutput {
        progress.on_submission_start(request, self.params.mode);

        let output = match self.params.mode {
            SubmissionMode::Local => self.answer_locally(request, progress),
            SubmissionMode::Remote => match self.gateway.as_deref() {
                Some(gateway) => {
                    self.submit_remote(gateway, ticket_id, request, progress)
                        .await
                }
                None => {
                    warn!("Remote mode selected but no agent gateway is configured");
                    SubmitTicketOutput {
                        ticket_id: Some(ticket_id),
                        response: TicketResponse::fallback(),
                        state: SubmissionState::Failed,
                    }
                }
            },
        };

        debug_assert!(output.state.is_terminal(), "submission ended in {:?}", output.state);
        progress.on_submission_complete(&output.response);
        output
    }

    fn answer_locally(
        &self,
        request: &TicketRequest,
        progress: &dyn SubmissionProgressNotifier,
    ) -> SubmitTicketOutput {
        let answer = canned_answer(request.category());
        debug!("Local answer for category '{}'", request.category());

        self.submission_logger.log(SubmissionEvent::new(
            "canned_reply",
            None,
            serde_json::json!({
                "category": request.category(),
                "text": answer,
            }),
        ));

        progress.on_state_change(SubmissionState::Succeeded);
        SubmitTicketOutput {
            ticket_id: None,
            response: TicketResponse::canned(answer),
            state: SubmissionState::Succeeded,
        }
    }

    async fn submit_remote(
        &self,
        gateway: &dyn AgentGateway,
        ticket_id: TicketId,
        request: &TicketRequest,
        progress: &dyn SubmissionProgressNotifier,
    ) -> SubmitTicketOutput {
        let payload = AgentTicketPayload::new(ticket_id.clone(), request);

        info!(
            "Submitting ticket {} to {}: {}",
            ticket_id,
            gateway.endpoint(),
            clip(&payload.content, 100)
        );
        self.submission_logger.log(SubmissionEvent::new(
            "submission_started",
            Some(&ticket_id),
            serde_json::json!({
                "category": request.category(),
                "endpoint": gateway.endpoint(),
                "content": payload.content,
            }),
        ));

        let state = advance(SubmissionState::Idle, SubmissionState::Idle.begin(), progress);

        match self.deliver(gateway, &payload).await {
            Ok(envelope) => {
                let response = TicketResponse::from_agent(extract_reply(&envelope));
                let state = if response.is_fallback() {
                    warn!("Agent reply for ticket {} was blank", ticket_id);
                    advance(state, state.fail(), progress)
                } else {
                    advance(state, state.succeed(), progress)
                };

                self.submission_logger.log(SubmissionEvent::new(
                    "agent_reply",
                    Some(&ticket_id),
                    serde_json::json!({
                        "bytes": response.text().len(),
                        "text": response.text(),
                    }),
                ));

                SubmitTicketOutput {
                    ticket_id: Some(ticket_id),
                    response,
                    state,
                }
            }
            Err(e) => {
                warn!("Ticket {} failed: {}", ticket_id, e);
                self.submission_logger.log(SubmissionEvent::new(
                    "submission_failed",
                    Some(&ticket_id),
                    serde_json::json!({
                        "kind": e.kind(),
                        "error": e.to_string(),
                    }),
                ));

                SubmitTicketOutput {
                    ticket_id: Some(ticket_id),
                    response: TicketResponse::fallback(),
                    state: advance(state, state.fail(), progress),
                }
            }
        }
    }

    /// Single outbound request, bounded by the timeout and the cancellation token.
    async fn deliver(
        &self,
        gateway: &dyn AgentGateway,
        payload: &AgentTicketPayload,
    ) -> Result<Value, GatewayError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(GatewayError::Cancelled);
        }

        let send = gateway.send_ticket(payload);
        let bounded = async {
            match self.params.request_timeout {
                Some(timeout) => match tokio::time::timeout(timeout, send).await {
                    Ok(r) => r,
                    Err(_) => Err(GatewayError::Timeout),
                },
                None => send.await,
            }
        };

        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(GatewayError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}

/// Apply a state transition and report it; an invalid transition keeps `current`.
fn advance(
    current: SubmissionState,
    next: Result<SubmissionState, DomainError>,
    progress: &dyn SubmissionProgressNotifier,
) -> SubmissionState {
    match next {
        Ok(state) => {
            progress.on_state_change(state);
            state
        }
        Err(e) => {
            warn!("{}", e);
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use ticket_desk_domain::{
        Category, FALLBACK_MESSAGE, ResponseSource,
        ticket::canned::{FAQ_ANSWER, GENERIC_ACKNOWLEDGEMENT, GUIDE_ANSWER, POLICIES_ANSWER},
    };

    // ==================== Test Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<Value, GatewayError>>>,
        sent: Mutex<Vec<AgentTicketPayload>>,
        delay: Option<Duration>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<Value, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                sent: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        fn replying(value: Value) -> Self {
            Self::new(vec![Ok(value)])
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn sent(&self) -> Vec<AgentTicketPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AgentGateway for MockGateway {
        async fn send_ticket(&self, payload: &AgentTicketPayload) -> Result<Value, GatewayError> {
            self.sent.lock().unwrap().push(payload.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Unreachable("no more replies".to_string())))
        }

        fn endpoint(&self) -> &str {
            "http://mock/ticket"
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        states: Mutex<Vec<SubmissionState>>,
        completed: Mutex<Vec<String>>,
    }

    impl SubmissionProgressNotifier for RecordingProgress {
        fn on_submission_start(&self, _request: &TicketRequest, _mode: SubmissionMode) {}

        fn on_state_change(&self, state: SubmissionState) {
            self.states.lock().unwrap().push(state);
        }

        fn on_submission_complete(&self, response: &TicketResponse) {
            self.completed.lock().unwrap().push(response.text().to_string());
        }
    }

    fn remote(gateway: Arc<MockGateway>) -> SubmitTicketUseCase {
        SubmitTicketUseCase::new(gateway, SubmissionParams::default())
    }

    fn faq(description: &str) -> TicketRequest {
        TicketRequest::new(Category::Faq, description)
    }

    // ==================== Local mode ====================

    #[tokio::test]
    async fn test_local_answers_per_category() {
        let use_case = SubmitTicketUseCase::local();
        let cases = [
            (Category::Guide, GUIDE_ANSWER),
            (Category::Policies, POLICIES_ANSWER),
            (Category::Faq, FAQ_ANSWER),
            (Category::Unset, GENERIC_ACKNOWLEDGEMENT),
        ];

        for (category, expected) in cases {
            let output = use_case
                .execute(&TicketRequest::new(category, "x"), &NoProgress)
                .await;
            assert_eq!(output.response.text(), expected);
            assert_eq!(output.response.source(), ResponseSource::Canned);
            assert!(output.ticket_id.is_none());
        }
    }

    #[tokio::test]
    async fn test_local_unrecognized_category_gets_acknowledgement() {
        let use_case = SubmitTicketUseCase::local();
        let request = TicketRequest::new(Category::parse_lossy("billing"), "x");
        let output = use_case.execute(&request, &NoProgress).await;
        assert_eq!(output.response.text(), GENERIC_ACKNOWLEDGEMENT);
    }

    #[tokio::test]
    async fn test_local_is_idempotent() {
        let use_case = SubmitTicketUseCase::local();
        let request = TicketRequest::new(Category::Guide, "x");
        let first = use_case.execute(&request, &NoProgress).await;
        let second = use_case.execute(&request, &NoProgress).await;
        assert_eq!(first.response, second.response);
    }

    #[tokio::test]
    async fn test_local_mode_ignores_wired_gateway() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "R"})));
        let use_case = SubmitTicketUseCase::new(gateway.clone(), SubmissionParams::local());
        let output = use_case.execute(&faq("x"), &NoProgress).await;
        assert_eq!(output.response.text(), FAQ_ANSWER);
        assert!(gateway.sent().is_empty());
    }

    // ==================== Remote mode ====================

    #[tokio::test]
    async fn test_remote_reply_field() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "R"})));
        let output = remote(gateway).execute(&faq("x"), &NoProgress).await;
        assert_eq!(output.response.text(), "R");
        assert_eq!(output.response.source(), ResponseSource::Agent);
        assert_eq!(output.state, SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn test_remote_reply_precedes_response() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "R1", "response": "R2"})));
        let output = remote(gateway).execute(&faq("x"), &NoProgress).await;
        assert_eq!(output.response.text(), "R1");
    }

    #[tokio::test]
    async fn test_remote_without_recognized_fields_serializes_body() {
        let gateway = Arc::new(MockGateway::replying(json!({"foo": "bar"})));
        let output = remote(gateway).execute(&faq("x"), &NoProgress).await;
        assert_eq!(output.response.text(), r#"{"foo":"bar"}"#);
    }

    #[tokio::test]
    async fn test_remote_payload_shape() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "ok"})));
        let output = remote(gateway.clone())
            .execute(
                &TicketRequest::new(Category::Policies, "Where is the policy?"),
                &NoProgress,
            )
            .await;

        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].content, "[POLICIES] Where is the policy?");
        assert_eq!(Some(&sent[0].ticket_id), output.ticket_id.as_ref());
    }

    #[tokio::test]
    async fn test_remote_generates_fresh_ids() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(json!({"reply": "a"})),
            Ok(json!({"reply": "b"})),
        ]));
        let use_case = remote(gateway.clone());
        use_case.execute(&faq("x"), &NoProgress).await;
        use_case.execute(&faq("x"), &NoProgress).await;

        let sent = gateway.sent();
        assert_ne!(sent[0].ticket_id, sent[1].ticket_id);
    }

    #[tokio::test]
    async fn test_remote_failures_return_fallback() {
        let errors = vec![
            GatewayError::Unreachable("connection refused".to_string()),
            GatewayError::NonSuccessStatus {
                status: 500,
                body: "Internal Server Error".to_string(),
            },
            GatewayError::MalformedReply("expected value".to_string()),
            GatewayError::Timeout,
        ];

        for error in errors {
            let gateway = Arc::new(MockGateway::new(vec![Err(error)]));
            let output = remote(gateway).execute(&faq("x"), &NoProgress).await;
            assert_eq!(output.response.text(), FALLBACK_MESSAGE);
            assert_eq!(output.state, SubmissionState::Failed);
        }
    }

    #[tokio::test]
    async fn test_remote_does_not_retry() {
        let gateway = Arc::new(MockGateway::new(vec![
            Err(GatewayError::Unreachable("down".to_string())),
            Ok(json!({"reply": "late"})),
        ]));
        let output = remote(gateway.clone()).execute(&faq("x"), &NoProgress).await;
        assert!(output.response.is_fallback());
        assert_eq!(gateway.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_remote_state_transitions_reported() {
        let gateway = Arc::new(MockGateway::replying(json!({"response": "done"})));
        let progress = RecordingProgress::default();
        remote(gateway).execute(&faq("x"), &progress).await;

        assert_eq!(
            *progress.states.lock().unwrap(),
            vec![SubmissionState::AwaitingReply, SubmissionState::Succeeded]
        );
        assert_eq!(*progress.completed.lock().unwrap(), vec!["done".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_reply_is_failure() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "   "})));
        let output = remote(gateway).execute(&faq("x"), &NoProgress).await;
        assert!(output.response.is_fallback());
        assert_eq!(output.state, SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_execute_with_id_uses_given_id() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "ok"})));
        remote(gateway.clone())
            .execute_with_id(TicketId::new("Q7"), &faq("x"), &NoProgress)
            .await;
        assert_eq!(gateway.sent()[0].ticket_id, TicketId::new("Q7"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_fallback() {
        let gateway = Arc::new(
            MockGateway::replying(json!({"reply": "too late"}))
                .with_delay(Duration::from_secs(60)),
        );
        let params = SubmissionParams::default().with_timeout_seconds(Some(1));
        let use_case = SubmitTicketUseCase::new(gateway, params);

        let output = use_case.execute(&faq("x"), &NoProgress).await;
        assert!(output.response.is_fallback());
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "R"})));
        let token = CancellationToken::new();
        token.cancel();
        let use_case = remote(gateway.clone()).with_cancellation(token);

        let output = use_case.execute(&faq("x"), &NoProgress).await;
        assert!(output.response.is_fallback());
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_while_awaiting_reply() {
        let gateway = Arc::new(
            MockGateway::replying(json!({"reply": "R"})).with_delay(Duration::from_secs(10)),
        );
        let token = CancellationToken::new();
        let use_case = remote(gateway).with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            token.cancel();
        });

        let output = use_case.execute(&faq("x"), &NoProgress).await;
        canceller.await.unwrap();
        assert!(output.response.is_fallback());
        assert_eq!(output.state, SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_remote_mode_without_gateway_falls_back() {
        let mut use_case = SubmitTicketUseCase::local();
        use_case.params = SubmissionParams::default();
        let output = use_case.execute(&faq("x"), &NoProgress).await;
        assert_eq!(output.response.text(), FALLBACK_MESSAGE);
    }

    // ==================== Submission log ====================

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<SubmissionEvent>>,
    }

    impl RecordingLogger {
        fn kinds(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
        }

        fn last(&self) -> SubmissionEvent {
            self.events.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl SubmissionLogger for RecordingLogger {
        fn log(&self, event: SubmissionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[tokio::test]
    async fn test_logs_started_then_reply() {
        let logger = Arc::new(RecordingLogger::default());
        let gateway = Arc::new(MockGateway::replying(json!({"reply": "Hello"})));
        let use_case = remote(gateway).with_submission_logger(logger.clone());

        let output = use_case
            .execute_with_id(TicketId::new("t-7"), &faq("Invoices?"), &NoProgress)
            .await;

        assert_eq!(output.response.text(), "Hello");
        assert_eq!(logger.kinds(), vec!["submission_started", "agent_reply"]);

        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].ticket_id, Some(TicketId::new("t-7")));
        assert_eq!(events[0].fields["content"], "[FAQ] Invoices?");
        assert_eq!(events[0].fields["endpoint"], "http://mock/ticket");
        assert_eq!(events[1].fields["text"], "Hello");
    }

    #[tokio::test]
    async fn test_logs_failure_kind() {
        let logger = Arc::new(RecordingLogger::default());
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::NonSuccessStatus {
            status: 500,
            body: "boom".to_string(),
        })]));
        let use_case = remote(gateway).with_submission_logger(logger.clone());

        let output = use_case.execute(&faq("x"), &NoProgress).await;

        assert!(output.response.is_fallback());
        assert_eq!(logger.kinds(), vec!["submission_started", "submission_failed"]);
        let failed = logger.last();
        assert_eq!(failed.ticket_id, output.ticket_id);
        assert_eq!(failed.fields["kind"], "non_success_status");
    }

    #[tokio::test]
    async fn test_logs_canned_reply_without_ticket_id() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = SubmitTicketUseCase::local().with_submission_logger(logger.clone());

        use_case
            .execute(&TicketRequest::new(Category::Guide, "x"), &NoProgress)
            .await;

        assert_eq!(logger.kinds(), vec!["canned_reply"]);
        let event = logger.last();
        assert_eq!(event.ticket_id, None);
        assert_eq!(event.fields["category"], "guide");
        assert_eq!(event.fields["text"], GUIDE_ANSWER);
    }
}
