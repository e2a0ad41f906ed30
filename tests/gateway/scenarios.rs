use crate::backend::{
    assessment_data, assignments, assignments_json, full_analysis_body, gateway_for,
    schedule_data, workload_data,
};
use asca::RequestOptions;
use asca::core::models::samples::{sample_preferences, sample_wellness_input};
use asca::core::models::{Level, StudySession};
use asca::ui::{notify, render};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn workload_round_trip_preserves_backend_body() {
    let server = MockServer::start().await;
    let body = json!({"success": true, "data": workload_data()});
    Mock::given(method("POST"))
        .and(path("/api/analyze-workload"))
        .and(body_json(assignments_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;

    let raw = gateway
        .request(
            "/api/analyze-workload",
            RequestOptions::post(assignments_json()),
        )
        .await
        .unwrap();
    assert_eq!(raw, body);

    let reply = gateway.analyze_workload(&assignments()).await.unwrap();
    let summary = reply.into_data();
    assert_eq!(serde_json::to_value(&summary).unwrap(), workload_data());
    assert_eq!(summary.total_assignments, 3);
    assert!((summary.total_estimated_hours - 12.0).abs() < f64::EPSILON);
    assert_eq!(summary.high_priority_count, 1);
    assert_eq!(summary.stress_level, Level::Medium);
    assert_eq!(summary.recommendations, vec!["Start early".to_string()]);

    let note = notify::workload_complete(&summary);
    assert_eq!(
        note.message,
        "Analysis complete! 3 assignments, 12h total. Stress: Medium"
    );
}

#[tokio::test]
async fn schedule_scenario_decodes_sessions_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/create-schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "agents_involved": ["Assignment Analyzer", "Schedule Optimizer"],
            "data": {
                "workload_analysis": workload_data(),
                "schedule": schedule_data()
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let prefs = sample_preferences();
    let reply = gateway
        .create_schedule(&assignments(), Some(&prefs))
        .await
        .unwrap();

    assert_eq!(
        reply.agents_involved,
        vec!["Assignment Analyzer", "Schedule Optimizer"]
    );
    let schedule = &reply.data.schedule;
    assert_eq!(schedule.daily_schedules.len(), 1);
    let monday = &schedule.daily_schedules[0];
    assert_eq!(monday.day, "Monday");
    assert!(monday.sessions[0].is_work());
    assert!(matches!(monday.sessions[1], StudySession::Break { .. }));
    assert_eq!(schedule.created_by.as_deref(), Some("Schedule Optimizer"));

    let view = render::render_schedule(&reply.data);
    assert!(view.contains("Monday"));
}

#[tokio::test]
async fn wellness_check_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wellness-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "agents_involved": ["Assignment Analyzer", "Schedule Optimizer", "Wellness Monitor"],
            "data": {
                "workload_analysis": workload_data(),
                "schedule": schedule_data(),
                "wellness_assessment": assessment_data()
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let wellness = sample_wellness_input();
    let reply = gateway
        .wellness_check(&assignments(), None, Some(&wellness))
        .await
        .unwrap();

    let assessment = &reply.data.wellness_assessment;
    assert!((assessment.wellness_score - 80.0).abs() < f64::EPSILON);
    assert_eq!(assessment.risk_level, Level::Low);
    assert_eq!(assessment.recommendations[0].category, "breaks");
    assert_eq!(reply.agents_involved.len(), 3);
}

#[tokio::test]
async fn full_analysis_scenario_keeps_agent_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/full-analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_analysis_body()))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server).await;
    let wellness = sample_wellness_input();
    let analysis = gateway
        .full_analysis(&assignments(), None, Some(&wellness))
        .await
        .unwrap();

    let agents: Vec<&str> = analysis
        .agent_communications
        .iter()
        .map(|comm| comm.agent.as_str())
        .collect();
    assert_eq!(
        agents,
        ["Assignment Analyzer", "Schedule Optimizer", "Wellness Monitor"]
    );
    assert_eq!(analysis.actions_required().count(), 0);

    assert_eq!(analysis.summary.total_assignments, 3);
    assert_eq!(analysis.summary.risk_level, Level::Low);
    assert_eq!(
        notify::full_analysis_complete(&analysis.summary).message,
        "Complete! Wellness: 80/100, Risk: Low"
    );

    let view = render::render_full_analysis(&analysis);
    let analyzer = view.find("Assignment Analyzer").unwrap();
    let monitor = view.find("Wellness Monitor").unwrap();
    assert!(analyzer < monitor);
    assert!(view.contains("Risk Level: Low"));
}
