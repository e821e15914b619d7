use crate::error::ChatDigestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the completion API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default completion API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default summarization model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Maximum tokens the model may generate for one digest
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Low temperature keeps the digest focused
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Fixed decoding parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodingConfig {
    /// Model identifier
    pub model: String,

    /// Maximum output length in tokens
    pub max_tokens: u32,

    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// ChatDigest application configuration
///
/// Loaded once at startup and passed explicitly to the client and server.
#[derive(Clone)]
pub struct AppConfig {
    /// Completion API key
    pub openai_api_key: String,

    /// Optional OpenAI organization id
    pub openai_org_id: Option<String>,

    /// Completion API base URL
    pub openai_base_url: String,

    /// Summarization model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"<redacted>")
            .field("openai_org_id", &self.openai_org_id)
            .field("openai_base_url", &self.openai_base_url)
            .field("llm_model", &self.llm_model)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ChatDigestError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Fails with `MissingCredential` when the API key is absent or blank,
    /// before anything else is read. Call `validate` once any overrides
    /// have been applied.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatDigestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ChatDigestError::missing_credential(API_KEY_VAR))?;

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match non_empty("SERVER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ChatDigestError::config(format!("SERVER_PORT must be a port number, got '{}'", raw))
            })?,
            None => 8501,
        };

        Ok(Self {
            openai_api_key,
            openai_org_id: non_empty("OPENAI_ORG_ID"),
            openai_base_url: non_empty("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            log_dir: non_empty("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), ChatDigestError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                ChatDigestError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Decoding parameters for every summary request
    pub fn decoding(&self) -> DecodingConfig {
        DecodingConfig {
            model: self.llm_model.clone(),
            ..DecodingConfig::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ChatDigestError> {
        if self.llm_model.trim().is_empty() {
            return Err(ChatDigestError::config("Model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(ChatDigestError::config(
                "Completion API base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(ChatDigestError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

/// Operator instructions printed when the API key is missing
pub fn credential_instructions() -> String {
    format!(
        "Please set it before running the app. You can do this in your terminal:\n  \
         export {var}='your_api_key_here'  # macOS/Linux\n  \
         set {var}=your_api_key_here  # Windows\n\
         or add {var}=your_api_key_here to a .env file in the project root.",
        var = API_KEY_VAR
    )
}
