#![allow(dead_code)]

use asca::BackendGateway;
use asca::core::models::Assignment;
use asca::core::models::samples::sample_assignments;
use serde_json::{Value, json};
use wiremock::MockServer;

pub async fn gateway_for(server: &MockServer) -> BackendGateway {
    BackendGateway::new(&server.uri()).expect("mock server URI should be a valid base URL")
}

/// Base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn assignments() -> Vec<Assignment> {
    sample_assignments()
}

/// Wire form of [`assignments`], written out by hand.
pub fn assignments_json() -> Value {
    json!([
        {
            "id": "hw1",
            "title": "History Essay",
            "description": "Write a 5-page essay analyzing the causes of World War II",
            "due_date": "2025-11-15",
            "course": "History 101"
        },
        {
            "id": "hw2",
            "title": "Math Problem Set",
            "description": "Complete problems 1-20 from Chapter 5 on Calculus",
            "due_date": "2025-11-12",
            "course": "Math 201"
        },
        {
            "id": "hw3",
            "title": "Programming Project",
            "description": "Build a web application using React and Node.js",
            "due_date": "2025-11-20",
            "course": "CS 301"
        }
    ])
}

pub fn workload_data() -> Value {
    json!({
        "total_assignments": 3,
        "total_estimated_hours": 12,
        "high_priority_count": 1,
        "stress_level": "Medium",
        "recommendations": ["Start early"]
    })
}

pub fn schedule_data() -> Value {
    json!({
        "daily_schedules": [
            {
                "day": "Monday",
                "date": "2025-11-10",
                "sessions": [
                    {"time": "09:00-10:00", "assignment": "hw2", "task": "Problems 1-10", "type": "work"},
                    {"time": "10:00-10:15", "type": "break", "activity": "rest"}
                ],
                "total_hours": 1
            }
        ],
        "optimization_notes": ["Basic schedule created", "Adjust as needed"],
        "flexibility_score": 7,
        "created_by": "Schedule Optimizer"
    })
}

pub fn assessment_data() -> Value {
    json!({
        "wellness_score": 80,
        "risk_level": "Low",
        "risk_factors": ["Stress level: Medium"],
        "recommendations": [
            {"category": "breaks", "suggestion": "Take a 10-minute break every hour", "frequency": "hourly"}
        ],
        "wellness_activities": ["Deep breathing exercises"],
        "positive_aspects": ["You're tracking your wellness"],
        "assessed_by": "Wellness Monitor"
    })
}

pub fn full_analysis_body() -> Value {
    json!({
        "success": true,
        "workflow": "Complete Multi-Agent Analysis",
        "agents_involved": ["Assignment Analyzer", "Schedule Optimizer", "Wellness Monitor"],
        "agent_communications": [
            {"agent": "Assignment Analyzer", "message_type": "workload_analysis", "data": {}},
            {"agent": "Schedule Optimizer", "message_type": "schedule_created", "data": {}},
            {"agent": "Wellness Monitor", "message_type": "wellness_assessment", "data": {}, "action_required": false}
        ],
        "results": {
            "workload_analysis": workload_data(),
            "schedule": schedule_data(),
            "wellness_assessment": assessment_data()
        },
        "summary": {
            "total_assignments": 3,
            "total_hours": 12,
            "stress_level": "Medium",
            "wellness_score": 80,
            "risk_level": "Low"
        }
    })
}
