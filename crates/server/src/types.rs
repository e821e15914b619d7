use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summarize request sent by the page
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Pasted chat or email thread
    pub conversation: String,

    /// Comma-separated participant names
    #[serde(default)]
    pub participants: Option<String>,
}

/// Summarize response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Markdown digest
    pub summary: String,

    /// Model that produced it
    pub model: String,

    /// When the digest was produced
    pub generated_at: DateTime<Utc>,
}

/// Error body for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,

    /// Stable failure tag
    pub kind: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
