use super::{Payload, Priority, StressLevel};
use serde::{Deserialize, Serialize};

/// Per-assignment estimate produced by the assignment analyzer agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentAnalysis {
    #[serde(default)]
    pub assignment_id: String,
    #[serde(default, serialize_with = "super::whole::serialize")]
    pub complexity_score: f64,
    #[serde(default, serialize_with = "super::whole::serialize")]
    pub estimated_hours: f64,
    #[serde(default)]
    pub priority_level: Priority,
    #[serde(default)]
    pub key_tasks: Vec<String>,
    #[serde(default)]
    pub recommended_start_date: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
}

impl Payload for AssignmentAnalysis {
    fn check(&self) -> Result<(), String> {
        if !(0.0..=10.0).contains(&self.complexity_score) {
            return Err(format!(
                "complexity_score {} outside 0..=10",
                self.complexity_score
            ));
        }
        if self.estimated_hours < 0.0 {
            return Err(format!("negative estimated_hours {}", self.estimated_hours));
        }
        Ok(())
    }
}

/// Aggregate view over every submitted assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    pub total_assignments: u32,
    #[serde(serialize_with = "super::whole::serialize")]
    pub total_estimated_hours: f64,
    #[serde(default)]
    pub high_priority_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_complexity: Option<f64>,
    pub stress_level: StressLevel,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual_analyses: Vec<AssignmentAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
}

impl Payload for WorkloadSummary {
    fn check(&self) -> Result<(), String> {
        if self.total_estimated_hours < 0.0 {
            return Err(format!(
                "negative total_estimated_hours {}",
                self.total_estimated_hours
            ));
        }
        if self.high_priority_count > self.total_assignments {
            return Err(format!(
                "high_priority_count {} exceeds total_assignments {}",
                self.high_priority_count, self.total_assignments
            ));
        }
        self.individual_analyses
            .iter()
            .try_for_each(AssignmentAnalysis::check)
    }
}
