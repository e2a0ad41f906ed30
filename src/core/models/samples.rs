//! Demo inputs used when the CLI is run without an assignments file.

use super::{Assignment, Preferences, WellnessInput};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_assignments() -> Vec<Assignment> {
    vec![
        Assignment::new(
            "hw1",
            "History Essay",
            "Write a 5-page essay analyzing the causes of World War II",
            date(2025, 11, 15),
            "History 101",
        ),
        Assignment::new(
            "hw2",
            "Math Problem Set",
            "Complete problems 1-20 from Chapter 5 on Calculus",
            date(2025, 11, 12),
            "Math 201",
        ),
        Assignment::new(
            "hw3",
            "Programming Project",
            "Build a web application using React and Node.js",
            date(2025, 11, 20),
            "CS 301",
        ),
    ]
}

pub fn sample_preferences() -> Preferences {
    Preferences::default()
}

pub fn sample_wellness_input() -> WellnessInput {
    WellnessInput {
        mood: "focused".into(),
        stress_level: 5,
        sleep_hours: 7.0,
        energy_level: 7,
    }
}
