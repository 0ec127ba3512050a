use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("config error: {0}")]
    Invalid(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// What the transport observed when talking to the inference endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The endpoint answered 503: the model is still being loaded.
    #[error("model is loading (HTTP 503)")]
    ModelLoading,

    #[error("inference API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected response payload: {0}")]
    Malformed(String),
}

/// Why no SQL could be produced for a question.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("model still loading after {retries} retries")]
    RetriesExhausted { retries: u32 },

    #[error("request error: HTTP {status}: {body}")]
    Request { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Short machine-readable tag used in logs and JSON reports.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::RetriesExhausted { .. } => "retries_exhausted",
            GenerationError::Request { .. } => "request",
            GenerationError::Network(_) => "network",
            GenerationError::MalformedResponse(_) => "malformed_response",
        }
    }
}
