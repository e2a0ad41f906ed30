use super::super::{BackendConfig, ObservabilityConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()?;
        if self
            .observability
            .log_level
            .parse::<tracing::Level>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "observability.log_level {:?} is not a tracing level",
                self.observability.log_level
            )));
        }
        Ok(())
    }
}
