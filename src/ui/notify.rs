//! One-line status banners shown after every backend call.

use super::style;
use crate::core::models::{AnalysisSummary, HealthStatus, WorkloadSummary};
use crate::error::{FailureKind, GatewayError};
use std::fmt;

/// Hint printed when the backend cannot be reached.
pub const START_BACKEND_HINT: &str = "cd backend && python main.py";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self.level {
            NotificationLevel::Info => format!("{} {}", style::accent("●"), self.message),
            NotificationLevel::Success => {
                format!("{} {}", style::success("✓"), self.message)
            }
            NotificationLevel::Warning => format!("{} {}", style::yellow("!"), self.message),
            NotificationLevel::Error => format!("{} {}", style::failure("✗"), self.message),
        };
        f.write_str(&line)
    }
}

pub fn connected(health: &HealthStatus) -> Notification {
    if health.is_healthy() {
        Notification::success("Connected to ASCA backend")
    } else {
        Notification::warning(format!("ASCA backend reports status {:?}", health.status))
    }
}

pub fn workload_complete(summary: &WorkloadSummary) -> Notification {
    Notification::success(format!(
        "Analysis complete! {} assignments, {}h total. Stress: {}",
        summary.total_assignments, summary.total_estimated_hours, summary.stress_level
    ))
}

pub fn full_analysis_complete(summary: &AnalysisSummary) -> Notification {
    Notification::success(format!(
        "Complete! Wellness: {}/100, Risk: {}",
        summary.wellness_score, summary.risk_level
    ))
}

/// User-facing banner for a failed call; wording depends on the failure kind.
pub fn for_error(err: &GatewayError, base_url: &str) -> Notification {
    match err.kind() {
        FailureKind::Transport => Notification::error(format!(
            "Backend not reachable at {base_url}. Start it with: {START_BACKEND_HINT}"
        )),
        FailureKind::HttpStatus => Notification::error(format!("Backend failed the request: {err}")),
        FailureKind::Malformed => Notification::error(format!(
            "Backend sent a response this client could not read ({err})"
        )),
        FailureKind::Rejected => Notification::warning(format!("Agents declined the request: {err}")),
        FailureKind::Invalid => Notification::error(format!("Request not sent: {err}")),
    }
}
