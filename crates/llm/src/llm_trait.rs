use async_trait::async_trait;
use chatdigest_common::Result;

use crate::types::PromptMessages;

/// Common trait for completion providers
///
/// Implementations map their transport failures onto the connectivity,
/// quota, remote-service and unknown variants of `ChatDigestError`.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Send the prompt and return the first completion's text unchanged
    async fn complete(&self, prompt: &PromptMessages) -> Result<String>;

    /// Model identifier used for requests
    fn model(&self) -> &str;
}
