use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) =
            std::env::var("ASCA_BASE_URL").or_else(|_| std::env::var("ASCA_BACKEND_URL"))
            && !url.is_empty()
        {
            self.backend.base_url = url;
        }

        if let Ok(secs) = std::env::var("ASCA_TIMEOUT_SECS")
            && let Ok(secs) = secs.parse::<u64>()
            && secs > 0
        {
            self.backend.request_timeout_secs = Some(secs);
        }

        if let Ok(level) = std::env::var("ASCA_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level.to_lowercase();
        }
    }
}
