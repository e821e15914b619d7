use chatdigest_common::AppConfig;
use chatdigest_llm::{Summarizer, SummaryProvider};
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup; nothing in here changes between requests.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Digest generator
    pub summarizer: Summarizer,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, provider: Arc<dyn SummaryProvider>) -> Self {
        Self {
            config,
            summarizer: Summarizer::new(provider),
        }
    }
}
