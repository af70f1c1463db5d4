use serde_json::json;

use super::*;

fn suggestion(area: &str, current: Value, target: Value) -> Suggestion {
    Suggestion {
        area: area.to_owned(),
        current,
        target,
        recommendation: "Do better".to_owned(),
        priority: "high".to_owned(),
    }
}

// =============================================================
// Display formatting
// =============================================================

#[test]
fn unit_follows_area_name() {
    assert_eq!(MetricUnit::for_area("First Response Time"), MetricUnit::Minutes);
    assert_eq!(MetricUnit::for_area("Resolution Rate"), MetricUnit::Percent);
    assert_eq!(MetricUnit::for_area("Customer Satisfaction"), MetricUnit::Percent);
    assert_eq!(MetricUnit::for_area("Tone"), MetricUnit::Raw);
}

#[test]
fn response_time_values_show_minutes() {
    let improvement = Improvement::from(&suggestion("Response Time", json!("4.5 minutes"), json!(3)));
    assert_eq!(improvement.current, "4.5 min");
    assert_eq!(improvement.target, "3 min");
}

#[test]
fn rate_values_show_percent() {
    let improvement = Improvement::from(&suggestion("Resolution Rate", json!("45%"), json!(90.0)));
    assert_eq!(improvement.current, "45%");
    assert_eq!(improvement.target, "90%");
    assert_eq!(improvement.progress, Some(50.0));
}

#[test]
fn other_areas_show_raw_values() {
    let improvement = Improvement::from(&suggestion("Empathy", json!("medium"), json!(8)));
    assert_eq!(improvement.current, "medium");
    assert_eq!(improvement.target, "8");
    assert_eq!(improvement.progress, None);
}

#[test]
fn unparseable_metric_falls_back_to_raw_text() {
    assert_eq!(format_metric(MetricUnit::Minutes, &json!("n/a")), "n/a");
    assert_eq!(format_metric(MetricUnit::Percent, &Value::Null), "");
}

#[test]
fn progress_is_clamped_and_skips_zero_target() {
    let over = Improvement::from(&suggestion("Satisfaction", json!(120), json!(100)));
    assert_eq!(over.progress, Some(100.0));
    let zero = Improvement::from(&suggestion("Satisfaction", json!(5), json!(0)));
    assert_eq!(zero.progress, None);
    assert!(over.is_high_priority());
}

#[test]
fn kpi_cards_format_values() {
    let kpis = GlobalKpis {
        avg_response_time: 3.456,
        satisfaction_rate: 87.24,
        tickets_resolved: 42.0,
        resolution_rate: 91.0,
    };
    let values: Vec<String> = kpi_cards(&kpis).into_iter().map(|card| card.value).collect();
    assert_eq!(values, vec!["3.46 min", "87.2%", "42", "91.0%"]);
}

// =============================================================
// DashboardView
// =============================================================

#[test]
fn dashboard_view_flattens_payload() {
    let data: DashboardData = serde_json::from_value(json!({
        "global_kpis": { "avg_response_time": "2.5 minutes", "satisfaction_rate": "80%",
                         "tickets_resolved": 10, "resolution_rate": 75 },
        "overall_performance": { "Empathy": 8.5, "Clarity": "7" },
        "monthly_trends": { "2024-01": { "satisfaction": 80, "resolution": "70%" } },
        "agent_scores": { "alice": 92, "bob": "bad" },
        "ai_suggestions": [ { "area": "Response Time", "current": 5, "target": 3,
                              "recommendation": "Triage faster", "priority": "medium" } ]
    }))
    .unwrap();

    let view = DashboardView::from(&data);

    assert_eq!(view.kpis[0].value, "2.50 min");
    assert_eq!(view.performance, vec![
        Score { label: "Clarity".to_owned(), value: Some(7.0) },
        Score { label: "Empathy".to_owned(), value: Some(8.5) },
    ]);
    assert_eq!(view.trends[0].month, "2024-01");
    assert_eq!(view.trends[0].values.len(), 2);
    assert_eq!(view.agents[1], Score { label: "bob".to_owned(), value: None });
    assert_eq!(view.improvements[0].current, "5 min");
    assert!(!view.improvements[0].is_high_priority());
}

// =============================================================
// AnalyticsState
// =============================================================

#[test]
fn select_keeps_only_log_files() {
    let mut state = AnalyticsState::default();
    assert_eq!(state.select(["chat.txt", "export.csv", "calls.PDF"]), 2);
    assert_eq!(state.selected, vec!["chat.txt".to_owned(), "calls.PDF".to_owned()]);
    state.deselect(0);
    state.deselect(9);
    assert_eq!(state.selected, vec!["calls.PDF".to_owned()]);
}

#[test]
fn start_requires_files_and_no_run_in_progress() {
    let mut state = AnalyticsState::default();
    assert!(!state.start());
    state.select(["a.txt"]);
    assert!(state.start());
    assert!(!state.start());

    state.failed("Batch analysis failed".to_owned());
    assert!(!state.processing);
    assert_eq!(state.error.as_deref(), Some("Batch analysis failed"));

    assert!(state.start());
    assert_eq!(state.error, None);
    state.loaded(&DashboardData::default());
    assert!(state.dashboard.is_some());
    assert!(!state.processing);
}
