//! Reporting and analytics payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range a report covers. Rendered as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRange {
    /// First day covered.
    pub from: NaiveDate,
    /// Last day covered.
    pub to: NaiveDate,
}

impl ReportRange {
    /// Render the range as query-string pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from.to_string()),
            ("to", self.to.to_string()),
        ]
    }
}

/// One row of the sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportRow {
    /// Day the row covers.
    pub date: NaiveDate,
    /// Stamps or points issued that day.
    pub earn_events: u64,
    /// Rewards redeemed that day.
    pub redemptions: u64,
    /// Revenue attributed to card holders, as a decimal string.
    pub attributed_revenue: String,
}

/// Sales report payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Range the report covers.
    pub range: ReportRange,
    /// Daily rows, oldest first.
    pub rows: Vec<SalesReportRow>,
}

/// Subscriptions report payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsReport {
    /// Range the report covers.
    pub range: ReportRange,
    /// Subscriptions started within the range.
    pub started: u64,
    /// Subscriptions cancelled within the range.
    pub cancelled: u64,
    /// Active subscriptions at the end of the range.
    pub active_at_end: u64,
}

/// Dashboard overview numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    /// Total registered businesses.
    pub businesses: u64,
    /// Total registered customers.
    pub customers: u64,
    /// Card instances currently active.
    pub active_cards: u64,
    /// Redemptions in the last thirty days.
    pub recent_redemptions: u64,
}
