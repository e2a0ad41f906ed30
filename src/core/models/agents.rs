use super::wellness::check_wellness_score;
use super::{Payload, RiskLevel, StressLevel, WellnessReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message one backend agent handed to the next.
///
/// Display order is the order the backend returned them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentComm {
    pub agent: String,
    pub message_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub action_required: bool,
    /// Opaque agent-to-agent payload.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_assignments: u32,
    #[serde(serialize_with = "super::whole::serialize")]
    pub total_hours: f64,
    pub stress_level: StressLevel,
    #[serde(serialize_with = "super::whole::serialize")]
    pub wellness_score: f64,
    pub risk_level: RiskLevel,
}

/// `/api/full-analysis` reply. Unlike the other endpoints the payload sits at
/// the top level of the body rather than under `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default)]
    pub agents_involved: Vec<String>,
    #[serde(default)]
    pub agent_communications: Vec<AgentComm>,
    pub results: WellnessReport,
    pub summary: AnalysisSummary,
}

impl FullAnalysis {
    /// Communications flagged by an agent as needing the student's attention.
    pub fn actions_required(&self) -> impl Iterator<Item = &AgentComm> {
        self.agent_communications
            .iter()
            .filter(|comm| comm.action_required)
    }
}

impl Payload for FullAnalysis {
    fn check(&self) -> Result<(), String> {
        check_wellness_score(self.summary.wellness_score)?;
        self.results.check()
    }
}
