use super::{Payload, RiskLevel, Schedule, WorkloadSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessTip {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub frequency: String,
}

/// Verdict of the wellness monitor agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessAssessment {
    /// 0-100, higher is healthier.
    #[serde(serialize_with = "super::whole::serialize")]
    pub wellness_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<WellnessTip>,
    #[serde(default)]
    pub wellness_activities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<String>,
    #[serde(default)]
    pub positive_aspects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_by: Option<String>,
}

impl Payload for WellnessAssessment {
    fn check(&self) -> Result<(), String> {
        check_wellness_score(self.wellness_score)
    }
}

pub(crate) fn check_wellness_score(score: f64) -> Result<(), String> {
    if (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(format!("wellness_score {score} outside 0..=100"))
    }
}

/// Output of the three-agent chain: analyzer, optimizer, wellness monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessReport {
    pub workload_analysis: WorkloadSummary,
    pub schedule: Schedule,
    pub wellness_assessment: WellnessAssessment,
}

impl Payload for WellnessReport {
    fn check(&self) -> Result<(), String> {
        self.workload_analysis.check()?;
        self.schedule.check()?;
        self.wellness_assessment.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSuggestion {
    pub duration_minutes: u32,
    pub activity: String,
    #[serde(default)]
    pub benefits: String,
    #[serde(default)]
    pub return_signal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_at: Option<String>,
}

impl Payload for BreakSuggestion {
    fn check(&self) -> Result<(), String> {
        if self.duration_minutes == 0 {
            return Err("break duration_minutes must be positive".into());
        }
        Ok(())
    }
}
