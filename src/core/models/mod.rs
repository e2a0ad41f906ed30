//! Request and response payloads exchanged with the coaching backend.

pub mod agents;
pub mod assignment;
pub mod health;
pub mod samples;
pub mod schedule;
pub mod wellness;
pub mod workload;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use agents::{AgentComm, AnalysisSummary, FullAnalysis};
pub use assignment::{
    Assignment, BreakRequest, MultiAgentRequest, Preferences, ScheduleRequest, WellnessInput,
    load_assignments,
};
pub use health::HealthStatus;
pub use schedule::{DaySchedule, Schedule, SchedulePlan, StudySession};
pub use wellness::{BreakSuggestion, WellnessAssessment, WellnessReport, WellnessTip};
pub use workload::{AssignmentAnalysis, WorkloadSummary};

/// A decoded response body that can vouch for its own value ranges.
///
/// The gateway runs `check` right after decoding so out-of-range values never
/// reach rendering code.
pub trait Payload: DeserializeOwned {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Three-step scale the backend uses for priority, stress and risk.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Level {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Writes whole-number floats back as JSON integers so hours and scores
/// re-serialize the way the backend sent them (`12`, not `12.0`).
pub(crate) mod whole {
    use serde::Serializer;

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    #[allow(
        clippy::trivially_copy_pass_by_ref,
        clippy::cast_possible_truncation,
        clippy::float_cmp
    )]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() < MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}

pub type Priority = Level;
pub type StressLevel = Level;
pub type RiskLevel = Level;
