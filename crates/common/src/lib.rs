pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, DecodingConfig};
pub use error::ChatDigestError;
pub type Result<T> = std::result::Result<T, ChatDigestError>;
