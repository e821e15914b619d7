use chatdigest_common::{ChatDigestError, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::llm_trait::SummaryProvider;
use crate::prompts::build_prompt;
use crate::types::{ConversationInput, Summary};

/// Turns a pasted thread into a decision digest
#[derive(Clone)]
pub struct Summarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self { provider }
    }

    /// Model the provider sends requests to
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Summarize one conversation
    ///
    /// Blank input is rejected before the provider is contacted.
    pub async fn summarize(&self, input: &ConversationInput) -> Result<Summary> {
        if input.is_blank() {
            return Err(ChatDigestError::EmptyInput);
        }

        info!(
            "Starting summarization - Text length: {} chars, Participants: {}",
            input.text.chars().count(),
            input.participants.len()
        );

        let prompt = build_prompt(input);
        let text = self.provider.complete(&prompt).await?;

        debug!("Digest received - Length: {} chars", text.chars().count());

        Ok(Summary::new(text, self.provider.model().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PromptMessages, Role};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records prompts and replays a fixed outcome
    struct StubProvider {
        reply: fn() -> Result<String>,
        seen: Mutex<Vec<PromptMessages>>,
    }

    impl StubProvider {
        fn new(reply: fn() -> Result<String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SummaryProvider for StubProvider {
        async fn complete(&self, prompt: &PromptMessages) -> Result<String> {
            self.seen.lock().unwrap().push(prompt.clone());
            (self.reply)()
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_provider() {
        let stub = StubProvider::new(|| Ok("unused".to_string()));
        let summarizer = Summarizer::new(stub.clone());

        for text in ["", "   ", "\n\t\n"] {
            let err = summarizer
                .summarize(&ConversationInput::new(text, vec![]))
                .await
                .unwrap_err();
            assert!(matches!(err, ChatDigestError::EmptyInput));
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_summary_passes_provider_text_through() {
        let stub = StubProvider::new(|| Ok("## Chat Summary:\n  spacing kept  \n".to_string()));
        let summarizer = Summarizer::new(stub.clone());

        let summary = summarizer
            .summarize(&ConversationInput::from_form("Alice: ship it", Some("Alice, Bob")))
            .await
            .unwrap();

        assert_eq!(summary.text, "## Chat Summary:\n  spacing kept  \n");
        assert_eq!(summary.model, "stub-model");
        assert_eq!(stub.calls(), 1);

        let seen = stub.seen.lock().unwrap();
        let roles: Vec<Role> = seen[0].as_slice().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User]);
        assert!(seen[0].instruction().content.contains("Alice, Bob"));
        assert!(seen[0].conversation().content.contains("Alice: ship it"));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate_unchanged() {
        let stub = StubProvider::new(|| Err(ChatDigestError::quota_exceeded("quota")));
        let summarizer = Summarizer::new(stub.clone());

        let err = summarizer
            .summarize(&ConversationInput::new("hello", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatDigestError::QuotaExceeded(_)));
        assert_eq!(stub.calls(), 1);
    }
}
