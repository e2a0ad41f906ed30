use crate::config::Config;
use crate::ui::style;

pub fn render_status(config: &Config, base_url: &str) -> String {
    let timeout = config
        .backend
        .request_timeout_secs
        .map_or_else(|| "none".to_string(), |secs| format!("{secs}s"));

    let lines = [
        format!("{} {}", style::accent("◆"), style::header("asca status")),
        String::new(),
        format!("  Version      {}", env!("CARGO_PKG_VERSION")),
        format!("  Config       {}", config.config_path.display()),
        String::new(),
        format!("  Backend      {}", style::url(base_url)),
        format!("  Timeout      {timeout}"),
        format!(
            "  Logging      {} ({})",
            config.observability.log_level, config.observability.log_format
        ),
    ];
    lines.join("\n")
}
