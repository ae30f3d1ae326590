//! Typed operations for reports and the analytics overview.

use envelope::Envelope;

use super::ApiClient;
use crate::domain::ApiResult;
use crate::domain::resources::{AnalyticsOverview, ReportRange, SalesReport, SubscriptionsReport};

impl ApiClient {
    /// Fetch the sales report for a date range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn sales_report(&self, range: &ReportRange) -> ApiResult<Envelope<SalesReport>> {
        self.get_json("reports/sales", range.query_pairs()).await
    }

    /// Fetch the subscriptions report for a date range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn subscriptions_report(
        &self,
        range: &ReportRange,
    ) -> ApiResult<Envelope<SubscriptionsReport>> {
        self.get_json("reports/subscriptions", range.query_pairs())
            .await
    }

    /// Fetch the dashboard overview numbers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn analytics_overview(&self) -> ApiResult<Envelope<AnalyticsOverview>> {
        self.get_json("reports/overview", Vec::new()).await
    }
}
