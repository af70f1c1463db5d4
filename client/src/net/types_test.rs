use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_accepts_wire_forms() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" client "), Some(Role::Client));
}

#[test]
fn role_parse_rejects_other_values() {
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_landing_paths() {
    assert_eq!(Role::Admin.landing_path(), "/upload");
    assert_eq!(Role::Client.landing_path(), "/chat");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

// =============================================================
// IdentityClaim
// =============================================================

#[test]
fn identity_claim_reads_jwt_field_names() {
    let claim: IdentityClaim = serde_json::from_str(r#"{"sub":"u1","role":"client","exp":1700000000,"iat":1}"#).unwrap();
    assert_eq!(
        claim,
        IdentityClaim { subject: "u1".to_owned(), role: Role::Client, expires_at: 1_700_000_000 }
    );
}

// =============================================================
// Lenient response shapes
// =============================================================

#[test]
fn register_response_accepts_access_token_alias() {
    let body: RegisterResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(body.token(), Some("abc"));
}

#[test]
fn register_response_accepts_both_token_fields() {
    let body: RegisterResponse = serde_json::from_str(r#"{"token":"a.b.c","access_token":"x.y.z"}"#).unwrap();
    assert_eq!(body.token(), Some("a.b.c"));
}

#[test]
fn register_response_without_token() {
    let body: RegisterResponse = serde_json::from_str(r#"{"message":"created"}"#).unwrap();
    assert!(body.token().is_none());
    assert_eq!(body.message.as_deref(), Some("created"));
}

#[test]
fn chat_reply_defaults_optional_fields() {
    let reply: ChatReply = serde_json::from_str(r#"{"answer":"hi"}"#).unwrap();
    assert_eq!(reply.answer, "hi");
    assert!(reply.conversation_id.is_none());
    assert!(reply.sources.is_empty());
}

#[test]
fn conversation_summary_label_prefers_title() {
    let entry: ConversationSummary =
        serde_json::from_str(r#"{"conversation_id":"c1","name":"Billing","question":"How?"}"#).unwrap();
    assert_eq!(entry.id.as_deref(), Some("c1"));
    assert_eq!(entry.label(), "Billing");
}

#[test]
fn conversation_summary_label_falls_back_to_question_then_placeholder() {
    let entry = ConversationSummary { question: Some("Where is my order?".to_owned()), ..Default::default() };
    assert_eq!(entry.label(), "Where is my order?");
    assert_eq!(ConversationSummary::default().label(), "Untitled conversation");
}

// =============================================================
// Metrics
// =============================================================

#[test]
fn parse_metric_handles_numbers_and_decorated_strings() {
    assert_eq!(parse_metric(&serde_json::json!(4.5)), Some(4.5));
    assert_eq!(parse_metric(&serde_json::json!("85%")), Some(85.0));
    assert_eq!(parse_metric(&serde_json::json!("3.2 minutes")), Some(3.2));
    assert_eq!(parse_metric(&serde_json::json!("n/a")), None);
    assert_eq!(parse_metric(&serde_json::Value::Null), None);
}

#[test]
fn global_kpis_accept_mixed_metric_encodings() {
    let kpis: GlobalKpis = serde_json::from_str(
        r#"{"avg_response_time":"2.5 minutes","satisfaction_rate":"91%","tickets_resolved":120,"resolution_rate":null}"#,
    )
    .unwrap();
    assert_eq!(kpis.avg_response_time, 2.5);
    assert_eq!(kpis.satisfaction_rate, 91.0);
    assert_eq!(kpis.tickets_resolved, 120.0);
    assert_eq!(kpis.resolution_rate, 0.0);
}

#[test]
fn dashboard_defaults_missing_sections() {
    let data: DashboardData = serde_json::from_str("{}").unwrap();
    assert_eq!(data, DashboardData::default());
}
