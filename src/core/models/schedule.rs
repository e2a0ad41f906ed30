use super::{Payload, WorkloadSummary};
use serde::{Deserialize, Serialize};

/// One block on a study day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StudySession {
    Work {
        time: String,
        #[serde(default)]
        assignment: String,
        #[serde(default)]
        task: String,
    },
    Break {
        time: String,
        #[serde(default)]
        activity: String,
    },
    #[serde(other)]
    Other,
}

impl StudySession {
    pub fn is_work(&self) -> bool {
        matches!(self, Self::Work { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub date: String,
    #[serde(default)]
    pub sessions: Vec<StudySession>,
    #[serde(default, serialize_with = "super::whole::serialize")]
    pub total_hours: f64,
}

/// Week plan produced by the schedule optimizer agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub daily_schedules: Vec<DaySchedule>,
    #[serde(default)]
    pub optimization_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexibility_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Set instead of `daily_schedules` when nothing could be scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Schedule {
    pub fn total_hours(&self) -> f64 {
        self.daily_schedules.iter().map(|day| day.total_hours).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.daily_schedules.is_empty()
    }
}

impl Payload for Schedule {
    fn check(&self) -> Result<(), String> {
        if let Some(score) = self.flexibility_score
            && !(0.0..=10.0).contains(&score)
        {
            return Err(format!("flexibility_score {score} outside 0..=10"));
        }
        if let Some(day) = self.daily_schedules.iter().find(|d| d.total_hours < 0.0) {
            return Err(format!("negative total_hours on {}", day.date));
        }
        Ok(())
    }
}

/// `/api/create-schedule` payload: the analyzer's view plus the optimizer's plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub workload_analysis: WorkloadSummary,
    pub schedule: Schedule,
}

impl Payload for SchedulePlan {
    fn check(&self) -> Result<(), String> {
        self.workload_analysis.check()?;
        self.schedule.check()
    }
}
