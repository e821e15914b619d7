/// ChatDigest error types
#[derive(Debug, thiserror::Error)]
pub enum ChatDigestError {
    /// Completion API key is not configured
    #[error("Error: {var} environment variable not set.")]
    MissingCredential { var: String },

    /// Nothing to summarize
    #[error("Please paste some text to summarize.")]
    EmptyInput,

    /// Completion endpoint could not be reached
    #[error("Could not connect to the completion API: {0}. Please check your internet connection.")]
    Connectivity(String),

    /// Rate limit or quota exhausted (HTTP 429)
    #[error("Completion API rate limit exceeded: {0}. You might need to upgrade your plan or check your billing with the provider.")]
    QuotaExceeded(String),

    /// Non-2xx response from the completion endpoint
    #[error("Completion API returned an error: Status Code {status} - Response: {body}")]
    RemoteService { status: u16, body: String },

    /// Anything else that went wrong around the remote call
    #[error("An unexpected error occurred: {0}")]
    Unknown(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatDigestError {
    /// Create missing credential error
    pub fn missing_credential<S: Into<String>>(var: S) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    /// Create connectivity error
    pub fn connectivity<S: Into<String>>(msg: S) -> Self {
        Self::Connectivity(msg.into())
    }

    /// Create quota error
    pub fn quota_exceeded<S: Into<String>>(msg: S) -> Self {
        Self::QuotaExceeded(msg.into())
    }

    /// Create remote service error
    pub fn remote_service<S: Into<String>>(status: u16, body: S) -> Self {
        Self::RemoteService {
            status,
            body: body.into(),
        }
    }

    /// Create unknown error
    pub fn unknown<S: Into<String>>(msg: S) -> Self {
        Self::Unknown(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error was raised before any network attempt
    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::MissingCredential { .. } | Self::EmptyInput)
    }

    /// Stable tag for API consumers
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "missing_credential",
            Self::EmptyInput => "empty_input",
            Self::Connectivity(_) => "connectivity_failure",
            Self::QuotaExceeded(_) => "quota_exceeded",
            Self::RemoteService { .. } => "remote_service_error",
            Self::Unknown(_) => "unknown_failure",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

// HTTP response conversion
impl ChatDigestError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyInput => 400,
            Self::QuotaExceeded(_) => 429,
            Self::RemoteService { .. } => 502,
            Self::Connectivity(_) => 503,
            Self::MissingCredential { .. } => 500,
            Self::Unknown(_) => 500,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
        }
    }
}
