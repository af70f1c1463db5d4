//! Analytics dashboard view models.
//!
//! DESIGN
//! ======
//! `DashboardData` mirrors the backend payload, where metrics may be numbers
//! or decorated strings. Everything the page renders is derived here so the
//! display rules (minutes for response times, percent for resolution and
//! satisfaction) are testable without a browser.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde_json::Value;

use crate::net::types::{DashboardData, GlobalKpis, Suggestion, parse_metric};
use crate::util::files;

/// Extensions accepted as conversation logs for analysis.
pub const ACCEPTED_LOGS: [&str; 3] = ["pdf", "txt", "docx"];

/// `accept` attribute for the log picker.
pub const LOG_ACCEPT_ATTR: &str = ".pdf,.txt,.docx";

#[must_use]
pub fn is_log_file(name: &str) -> bool {
    files::has_extension(name, &ACCEPTED_LOGS)
}

/// Unit a suggestion's values are shown in, chosen from its area name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricUnit {
    Minutes,
    Percent,
    Raw,
}

impl MetricUnit {
    #[must_use]
    pub fn for_area(area: &str) -> Self {
        if area.contains("Response Time") {
            Self::Minutes
        } else if area.contains("Resolution") || area.contains("Satisfaction") {
            Self::Percent
        } else {
            Self::Raw
        }
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Display text for a suggestion value. Values that do not parse as a
/// number are shown as sent.
#[must_use]
pub fn format_metric(unit: MetricUnit, value: &Value) -> String {
    match (unit, parse_metric(value)) {
        (MetricUnit::Minutes, Some(n)) => format!("{n} min"),
        (MetricUnit::Percent, Some(n)) => format!("{n}%"),
        _ => raw_text(value),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

#[must_use]
pub fn kpi_cards(kpis: &GlobalKpis) -> Vec<KpiCard> {
    vec![
        KpiCard { title: "Avg Response Time", value: format!("{:.2} min", kpis.avg_response_time) },
        KpiCard { title: "Satisfaction Rate", value: format!("{:.1}%", kpis.satisfaction_rate) },
        KpiCard { title: "Tickets Resolved", value: format!("{}", kpis.tickets_resolved) },
        KpiCard { title: "Resolution Rate", value: format!("{:.1}%", kpis.resolution_rate) },
    ]
}

/// Named score, e.g. one performance metric or one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub values: Vec<Score>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Improvement {
    pub area: String,
    pub current: String,
    pub target: String,
    pub recommendation: String,
    pub priority: String,
    /// Current as a share of target, clamped to 0..=100.
    pub progress: Option<f64>,
}

impl Improvement {
    #[must_use]
    pub fn is_high_priority(&self) -> bool {
        self.priority.eq_ignore_ascii_case("high")
    }
}

impl From<&Suggestion> for Improvement {
    fn from(s: &Suggestion) -> Self {
        let unit = MetricUnit::for_area(&s.area);
        let progress = match (parse_metric(&s.current), parse_metric(&s.target)) {
            (Some(current), Some(target)) if target != 0.0 => Some((current / target * 100.0).clamp(0.0, 100.0)),
            _ => None,
        };
        Self {
            area: s.area.clone(),
            current: format_metric(unit, &s.current),
            target: format_metric(unit, &s.target),
            recommendation: s.recommendation.clone(),
            priority: s.priority.clone(),
            progress,
        }
    }
}

/// Everything the dashboard renders.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub kpis: Vec<KpiCard>,
    pub performance: Vec<Score>,
    pub trends: Vec<MonthlyTrend>,
    pub agents: Vec<Score>,
    pub improvements: Vec<Improvement>,
}

fn scores<'a>(entries: impl IntoIterator<Item = (&'a String, &'a Value)>) -> Vec<Score> {
    entries.into_iter().map(|(label, value)| Score { label: label.clone(), value: parse_metric(value) }).collect()
}

impl From<&DashboardData> for DashboardView {
    fn from(data: &DashboardData) -> Self {
        Self {
            kpis: kpi_cards(&data.global_kpis),
            performance: scores(&data.overall_performance),
            trends: data
                .monthly_trends
                .iter()
                .map(|(month, values)| MonthlyTrend { month: month.clone(), values: scores(values) })
                .collect(),
            agents: scores(&data.agent_scores),
            improvements: data.ai_suggestions.iter().map(Improvement::from).collect(),
        }
    }
}

/// Page state: picked log names plus the last loaded dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsState {
    pub selected: Vec<String>,
    pub processing: bool,
    pub error: Option<String>,
    pub dashboard: Option<DashboardView>,
}

impl AnalyticsState {
    /// Add picked log files, skipping unsupported ones. Returns how many were added.
    pub fn select<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> usize {
        let before = self.selected.len();
        self.selected.extend(names.into_iter().filter(|name| is_log_file(name)).map(str::to_owned));
        self.selected.len() - before
    }

    pub fn deselect(&mut self, index: usize) {
        if index < self.selected.len() {
            self.selected.remove(index);
        }
    }

    /// Mark an analysis as started. Returns `false` if there is nothing to
    /// analyze or one is already running.
    pub fn start(&mut self) -> bool {
        if self.selected.is_empty() || self.processing {
            return false;
        }
        self.processing = true;
        self.error = None;
        true
    }

    pub fn loaded(&mut self, data: &DashboardData) {
        self.dashboard = Some(DashboardView::from(data));
        self.processing = false;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.processing = false;
    }
}
