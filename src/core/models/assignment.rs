use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A piece of coursework sent to the backend. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO calendar date, `YYYY-MM-DD` on the wire.
    pub due_date: NaiveDate,
    pub course: String,
}

impl Assignment {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        course: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            due_date,
            course: course.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("assignment id must not be empty".into());
        }
        Ok(())
    }
}

/// Study preferences. Absence on the wire means backend defaults apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub daily_study_hours: u32,
    #[serde(with = "hhmm")]
    pub preferred_start_time: NaiveTime,
    /// Minutes of work between breaks.
    pub break_frequency: u32,
    /// Minutes per break.
    pub break_duration: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            daily_study_hours: 6,
            preferred_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            break_frequency: 60,
            break_duration: 15,
        }
    }
}

impl Preferences {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=24).contains(&self.daily_study_hours) {
            return Err(format!(
                "daily_study_hours must be within 1..=24, got {}",
                self.daily_study_hours
            ));
        }
        if self.break_frequency == 0 {
            return Err("break_frequency must be positive".into());
        }
        if self.break_duration >= self.break_frequency {
            return Err(format!(
                "break_duration ({}m) must be shorter than break_frequency ({}m)",
                self.break_duration, self.break_frequency
            ));
        }
        Ok(())
    }
}

/// Self-reported wellness signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessInput {
    pub mood: String,
    /// 1 (calm) to 10 (overwhelmed).
    pub stress_level: u8,
    /// Sent as an integer when whole; the backend models this field as `int`.
    #[serde(serialize_with = "super::whole::serialize")]
    pub sleep_hours: f64,
    /// 1 (drained) to 10 (energetic).
    pub energy_level: u8,
}

impl Default for WellnessInput {
    fn default() -> Self {
        Self {
            mood: "neutral".into(),
            stress_level: 5,
            sleep_hours: 7.0,
            energy_level: 5,
        }
    }
}

impl WellnessInput {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=10).contains(&self.stress_level) {
            return Err(format!(
                "stress_level must be within 1..=10, got {}",
                self.stress_level
            ));
        }
        if !(1..=10).contains(&self.energy_level) {
            return Err(format!(
                "energy_level must be within 1..=10, got {}",
                self.energy_level
            ));
        }
        if !(0.0..=24.0).contains(&self.sleep_hours) {
            return Err(format!(
                "sleep_hours must be within 0..=24, got {}",
                self.sleep_hours
            ));
        }
        Ok(())
    }
}

/// Body of `/api/create-schedule`. `preferences` is always present, `null` when unset.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRequest<'a> {
    pub assignments: &'a [Assignment],
    pub preferences: Option<&'a Preferences>,
}

/// Body of `/api/wellness-check` and `/api/full-analysis`.
#[derive(Debug, Clone, Serialize)]
pub struct MultiAgentRequest<'a> {
    pub assignments: &'a [Assignment],
    pub preferences: Option<&'a Preferences>,
    pub wellness_input: Option<&'a WellnessInput>,
}

/// Body of `/api/suggest-break`.
#[derive(Debug, Clone, Serialize)]
pub struct BreakRequest<'a> {
    pub current_activity: &'a str,
    /// Minutes worked without a break.
    pub time_worked: u32,
}

#[derive(Debug, Deserialize)]
struct AssignmentFile {
    #[serde(default)]
    assignments: Vec<Assignment>,
}

/// Load assignments from a JSON array or a TOML file with `[[assignments]]` tables.
pub fn load_assignments(path: &Path) -> Result<Vec<Assignment>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read assignments from {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let file: AssignmentFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(file.assignments)
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// `HH:MM` wire format for times of day.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .map_err(|e| D::Error::custom(format!("expected HH:MM, got {raw:?}: {e}")))
    }
}
