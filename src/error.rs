use reqwest::StatusCode;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `asca`.
///
/// Library callers match on these to decide what to show the student; the CLI
/// layer continues to use `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum AscaError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Backend gateway ─────────────────────────────────────────────────
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Gateway errors ──────────────────────────────────────────────────────────

/// Every way a backend exchange can fail.
///
/// None of these are recovered inside the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid backend base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid request for {endpoint}: {reason}")]
    InvalidRequest { endpoint: String, reason: String },

    /// No response was received (connection refused, DNS, timeout, ...).
    #[error("request to {url} failed before a response arrived: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API Error: {} {status_text}{}", .status.as_u16(), detail_suffix(.detail.as_deref()))]
    HttpStatus {
        status: StatusCode,
        status_text: String,
        detail: Option<String>,
    },

    #[error("response from {endpoint} is not valid JSON: {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {endpoint} does not match the expected schema: {source}")]
    Schema {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("backend rejected {endpoint}: {reason}")]
    Rejected { endpoint: String, reason: String },
}

fn detail_suffix(detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(" ({detail})"),
        _ => String::new(),
    }
}

/// Coarse classification used for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Invalid,
    Transport,
    HttpStatus,
    Malformed,
    Rejected,
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidBaseUrl { .. } | Self::InvalidRequest { .. } => FailureKind::Invalid,
            Self::Transport { .. } => FailureKind::Transport,
            Self::HttpStatus { .. } => FailureKind::HttpStatus,
            Self::MalformedResponse { .. } | Self::Schema { .. } => FailureKind::Malformed,
            Self::Rejected { .. } => FailureKind::Rejected,
        }
    }

    /// Status code of an `HttpStatus` failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_request(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, AscaError>;
