//! Terminal views over gateway payloads.
//!
//! Each function returns the finished block so callers decide where it goes.

use super::style::{self, Tone};
use crate::core::gateway::AgentReply;
use crate::core::models::{
    AssignmentAnalysis, BreakSuggestion, FullAnalysis, HealthStatus, Level, SchedulePlan,
    StudySession, WellnessReport, WorkloadSummary,
};
use std::fmt::Write;

const MAX_RECOMMENDATIONS: usize = 5;
const PREVIEW_DAYS: usize = 3;

pub fn risk_tone(level: Level) -> Tone {
    match level {
        Level::High => Tone::Red,
        Level::Medium => Tone::Yellow,
        Level::Low | Level::Unknown => Tone::Green,
    }
}

fn title(out: &mut String, text: &str) {
    let _ = writeln!(out, "{} {}", style::accent("◆"), style::header(text));
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "  {:<20}{value}", style::cyan(label));
}

fn bullets<'a>(out: &mut String, items: impl IntoIterator<Item = &'a String>) {
    for item in items {
        let _ = writeln!(out, "    {} {item}", style::accent("•"));
    }
}

fn agents_line<T>(out: &mut String, reply: &AgentReply<T>) {
    if let Some(agent) = &reply.agent {
        let _ = writeln!(out, "  {}", style::dim(format!("by {agent}")));
    } else if !reply.agents_involved.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            style::dim(reply.agents_involved.join(" → "))
        );
    }
}

pub fn render_health(health: &HealthStatus, base_url: &str) -> String {
    let mut out = String::new();
    title(&mut out, "Backend");
    field(&mut out, "URL", style::url(base_url));
    field(&mut out, "Status", &health.status);
    if !health.service.is_empty() {
        field(&mut out, "Service", &health.service);
    }
    if !health.agents.is_empty() {
        field(&mut out, "Agents", health.agents.join(", "));
    }
    out
}

pub fn render_assignment_analysis(reply: &AgentReply<AssignmentAnalysis>) -> String {
    let analysis = &reply.data;
    let mut out = String::new();
    title(&mut out, &format!("Assignment {}", analysis.assignment_id));
    agents_line(&mut out, reply);
    field(&mut out, "Complexity", format!("{}/10", analysis.complexity_score));
    field(&mut out, "Estimated hours", format!("{}h", analysis.estimated_hours));
    field(
        &mut out,
        "Priority",
        style::toned(risk_tone(analysis.priority_level), analysis.priority_level),
    );
    if let Some(start) = &analysis.recommended_start_date {
        field(&mut out, "Start by", start);
    }
    if !analysis.key_tasks.is_empty() {
        let _ = writeln!(out, "  {}", style::cyan("Key tasks:"));
        bullets(&mut out, &analysis.key_tasks);
    }
    if let Some(reasoning) = &analysis.reasoning {
        let _ = writeln!(out, "  {}", style::dim(reasoning));
    }
    out
}

pub fn render_workload(summary: &WorkloadSummary) -> String {
    let mut out = String::new();
    title(&mut out, "Workload Analysis Results");
    field(&mut out, "Total assignments", summary.total_assignments);
    field(
        &mut out,
        "Estimated hours",
        format!("{}h", summary.total_estimated_hours),
    );
    field(&mut out, "High priority", summary.high_priority_count);
    field(
        &mut out,
        "Stress level",
        style::toned(risk_tone(summary.stress_level), summary.stress_level),
    );
    if !summary.recommendations.is_empty() {
        let _ = writeln!(out, "  {}", style::cyan("AI recommendations:"));
        bullets(
            &mut out,
            summary.recommendations.iter().take(MAX_RECOMMENDATIONS),
        );
    }
    out
}

pub fn render_schedule(plan: &SchedulePlan) -> String {
    let schedule = &plan.schedule;
    let mut out = String::new();
    title(&mut out, "Optimized Schedule");

    if schedule.is_empty() {
        let message = schedule
            .message
            .as_deref()
            .unwrap_or("No study sessions scheduled");
        let _ = writeln!(out, "  {}", style::dim(message));
        return out;
    }

    if let Some(score) = schedule.flexibility_score {
        field(&mut out, "Flexibility score", format!("{score}/10"));
    }
    field(&mut out, "Scheduled hours", format!("{}h", schedule.total_hours()));

    let _ = writeln!(
        out,
        "  {}",
        style::cyan(format!("First {PREVIEW_DAYS} days:"))
    );
    for day in schedule.daily_schedules.iter().take(PREVIEW_DAYS) {
        let _ = writeln!(
            out,
            "    {} {} - {}  {}",
            style::accent("│"),
            day.day,
            day.date,
            style::dim(format!("{} hours scheduled", day.total_hours))
        );
        for session in &day.sessions {
            match session {
                StudySession::Work {
                    time,
                    assignment,
                    task,
                } => {
                    let _ = writeln!(out, "        {time}  {assignment}: {task}");
                }
                StudySession::Break { time, activity } => {
                    let _ = writeln!(out, "        {}", style::dim(format!("{time}  break: {activity}")));
                }
                StudySession::Other => {}
            }
        }
    }
    bullets(&mut out, &schedule.optimization_notes);
    out
}

pub fn render_wellness(report: &WellnessReport) -> String {
    let assessment = &report.wellness_assessment;
    let mut out = String::new();
    title(&mut out, "Wellness Check");
    field(
        &mut out,
        "Wellness score",
        format!("{}/100", assessment.wellness_score),
    );
    field(
        &mut out,
        "Risk level",
        style::toned(risk_tone(assessment.risk_level), assessment.risk_level),
    );
    if !assessment.risk_factors.is_empty() {
        let _ = writeln!(out, "  {}", style::cyan("Risk factors:"));
        bullets(&mut out, &assessment.risk_factors);
    }
    for tip in &assessment.recommendations {
        let _ = writeln!(
            out,
            "    {} [{}] {} {}",
            style::accent("•"),
            tip.category,
            tip.suggestion,
            style::dim(format!("({})", tip.frequency))
        );
    }
    if let Some(threshold) = &assessment.alert_threshold {
        let _ = writeln!(out, "  {}", style::yellow(threshold));
    }
    out
}

pub fn render_full_analysis(analysis: &FullAnalysis) -> String {
    let summary = &analysis.summary;
    let mut out = String::new();
    title(&mut out, "Complete Multi-Agent Analysis");

    if !analysis.agents_involved.is_empty() {
        let _ = writeln!(
            out,
            "  {} {}",
            style::success(format!(
                "All {} agents completed:",
                analysis.agents_involved.len()
            )),
            analysis.agents_involved.join(" → ")
        );
    }

    field(&mut out, "Assignments", summary.total_assignments);
    field(&mut out, "Total hours", format!("{}h", summary.total_hours));
    field(&mut out, "Wellness score", summary.wellness_score);

    if !analysis.agent_communications.is_empty() {
        let _ = writeln!(out, "  {}", style::cyan("Agent communications:"));
        for comm in &analysis.agent_communications {
            let _ = writeln!(
                out,
                "    {} {}  {}",
                style::accent("→"),
                comm.agent,
                style::dim(&comm.message_type)
            );
        }
    }

    let tone = risk_tone(summary.risk_level);
    let _ = writeln!(
        out,
        "  {}  {}",
        style::toned(tone, format!("Risk Level: {}", summary.risk_level)),
        style::dim(format!("Stress: {}", summary.stress_level))
    );
    out
}

pub fn render_break(reply: &AgentReply<BreakSuggestion>) -> String {
    let suggestion = &reply.data;
    let mut out = String::new();
    title(
        &mut out,
        &format!("Take a {}-minute break", suggestion.duration_minutes),
    );
    agents_line(&mut out, reply);
    field(&mut out, "Activity", &suggestion.activity);
    if !suggestion.benefits.is_empty() {
        field(&mut out, "Why", &suggestion.benefits);
    }
    if !suggestion.return_signal.is_empty() {
        field(&mut out, "Come back when", &suggestion.return_signal);
    }
    out
}
