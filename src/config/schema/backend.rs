use crate::core::gateway::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend root URL (default: http://localhost:8080)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. Unset means calls wait on the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(self.base_url.trim()).map_err(|e| {
            ConfigError::Validation(format!("backend.base_url {:?}: {e}", self.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "backend.base_url must be http or https, got {:?}",
                parsed.scheme()
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "backend.request_timeout_secs must be positive when set".into(),
            ));
        }
        Ok(())
    }
}
