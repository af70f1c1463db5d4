//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend is an external service, so response types are lenient: optional
//! fields default, and numeric dashboard metrics accept either JSON numbers or
//! decorated strings such as `"85%"` or `"3.2 minutes"`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role carried in the credential payload and chosen at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    /// Lowercase wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }

    /// Parse the wire form. Anything other than `admin` or `client` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    /// Route a freshly signed-in identity lands on.
    #[must_use]
    pub const fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => "/upload",
            Self::Client => "/chat",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity decoded from a credential payload.
///
/// Derived on demand from the stored credential and never persisted on its
/// own. The signature is not checked client-side, so this claim is only good
/// for deciding what to render; the backend enforces access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Subject identifier (`sub`).
    #[serde(rename = "sub")]
    pub subject: String,
    /// Account role (`role`).
    pub role: Role,
    /// Expiry in seconds since the Unix epoch (`exp`).
    #[serde(rename = "exp", deserialize_with = "deserialize_numeric_date")]
    pub expires_at: i64,
}

/// Body returned by the login and federated-login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Registration payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Registration response. Some deployments sign the new account in directly,
/// under either `token` or `access_token`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// Issued credential, preferring `token` over `access_token`.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().or(self.access_token.as_deref())
    }
}

/// Answer from either chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Body of `GET /chatbot/conversation`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConversationList {
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

/// One entry of the conversation history drawer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConversationSummary {
    #[serde(default, alias = "conversation_id")]
    pub id: Option<String>,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ConversationSummary {
    /// Text shown for this entry: its title, else its first question.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.question.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Untitled conversation")
    }
}

/// Body of `GET /chatbot/conversation/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConversationDetail {
    #[serde(default, alias = "conversation_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub messages: Vec<ConversationTurn>,
}

/// A stored question/answer pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConversationTurn {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of `GET /auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Aggregated analytics returned by `GET /analyze/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub global_kpis: GlobalKpis,
    #[serde(default)]
    pub overall_performance: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub monthly_trends: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub agent_scores: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub ai_suggestions: Vec<Suggestion>,
}

/// Headline support KPIs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GlobalKpis {
    /// Average first-response time in minutes.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub avg_response_time: f64,
    /// Customer satisfaction in percent.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub satisfaction_rate: f64,
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub tickets_resolved: f64,
    /// Resolution rate in percent.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub resolution_rate: f64,
}

/// Improvement suggestion produced by the batch analysis.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub current: serde_json::Value,
    #[serde(default)]
    pub target: serde_json::Value,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub priority: String,
}

/// Read a metric that may be a JSON number or a string decorated with `%` or
/// `minutes`.
#[must_use]
pub fn parse_metric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.replace('%', "").replace("minutes", "").trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_metric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    parse_metric(&value).ok_or_else(|| serde::de::Error::custom(format!("expected numeric metric, got {value}")))
}

/// `NumericDate` may carry fractional seconds; floor to whole seconds.
fn deserialize_numeric_date<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    // Largest f64 below 2^63; anything at or past it does not fit an i64.
    const LIMIT: f64 = 9_223_372_036_854_774_784.0;
    let secs = f64::deserialize(deserializer)?.floor();
    if !(-LIMIT..=LIMIT).contains(&secs) {
        return Err(serde::de::Error::custom(format!("exp out of range: {secs}")));
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = secs as i64;
    Ok(whole)
}
