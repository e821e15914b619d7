use actix_web::{post, web, HttpResponse};
use chatdigest_llm::ConversationInput;
use chrono::Utc;
use tracing::{info, warn};

use crate::routes::error_response;
use crate::state::AppState;
use crate::types::{SummarizeRequest, SummarizeResponse};

/// Generate a decision digest for the pasted thread
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    let input = ConversationInput::from_form(req.conversation, req.participants.as_deref());

    match state.summarizer.summarize(&input).await {
        Ok(summary) => {
            info!("Digest generated with {}", summary.model);
            HttpResponse::Ok().json(SummarizeResponse {
                summary: summary.text,
                model: summary.model,
                generated_at: Utc::now(),
            })
        }
        Err(e) => {
            if !e.is_preflight() {
                warn!(kind = e.kind(), "Summarization failed: {}", e);
            }
            error_response(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::configure;
    use crate::state::AppState;
    use crate::types::{ErrorResponse, SummarizeResponse};
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use chatdigest_common::{AppConfig, ChatDigestError, Result};
    use chatdigest_llm::{PromptMessages, SummaryProvider};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubProvider {
        reply: fn() -> Result<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SummaryProvider for StubProvider {
        async fn complete(&self, _prompt: &PromptMessages) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.reply)()
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn test_config() -> AppConfig {
        AppConfig::from_lookup(|key| (key == "OPENAI_API_KEY").then(|| "sk-test".to_string()))
            .unwrap()
    }

    fn stub(reply: fn() -> Result<String>) -> Arc<StubProvider> {
        Arc::new(StubProvider {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    async fn post_summarize(
        provider: Arc<StubProvider>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = web::Data::new(AppState::new(test_config(), provider));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/summarize")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_summary_is_returned_verbatim() {
        let provider = stub(|| Ok("## Chat Summary:\nAll good.".to_string()));
        let (status, body) = post_summarize(
            provider.clone(),
            json!({ "conversation": "Alice: hi", "participants": "Alice, Bob" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let resp: SummarizeResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.summary, "## Chat Summary:\nAll good.");
        assert_eq!(resp.model, "stub-model");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_blank_conversation_is_rejected_locally() {
        let provider = stub(|| Ok("unused".to_string()));
        let (status, body) =
            post_summarize(provider.clone(), json!({ "conversation": "   \n" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(err.kind, "empty_input");
        assert_eq!(err.error, "Please paste some text to summarize.");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_each_failure_has_its_own_status_and_kind() {
        let cases: [(fn() -> Result<String>, StatusCode, &str); 4] = [
            (
                || Err(ChatDigestError::connectivity("connection refused")),
                StatusCode::SERVICE_UNAVAILABLE,
                "connectivity_failure",
            ),
            (
                || Err(ChatDigestError::quota_exceeded("quota")),
                StatusCode::TOO_MANY_REQUESTS,
                "quota_exceeded",
            ),
            (
                || Err(ChatDigestError::remote_service(500, "boom")),
                StatusCode::BAD_GATEWAY,
                "remote_service_error",
            ),
            (
                || Err(ChatDigestError::unknown("weird")),
                StatusCode::INTERNAL_SERVER_ERROR,
                "unknown_failure",
            ),
        ];

        for (reply, expected_status, expected_kind) in cases {
            let (status, body) =
                post_summarize(stub(reply), json!({ "conversation": "Alice: hi" })).await;
            assert_eq!(status, expected_status);
            let err: ErrorResponse = serde_json::from_value(body).unwrap();
            assert_eq!(err.kind, expected_kind);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_gets_json_error() {
        let provider = stub(|| Ok("unused".to_string()));
        let (status, body) = post_summarize(provider.clone(), json!({ "text": "wrong field" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "invalid_request");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_health_reports_model() {
        let state = web::Data::new(AppState::new(test_config(), stub(|| Ok(String::new()))));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "stub-model");
    }
}
