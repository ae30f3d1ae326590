//! Subscription plans and the subscriptions businesses hold on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable plan. Prices travel as decimal strings; the client never
/// does arithmetic on money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    /// Stable plan identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Monthly price as a decimal string, e.g. `"49.00"`.
    pub monthly_price: String,
    /// Currency code, e.g. `"USD"`.
    pub currency: String,
    /// Maximum number of stores the plan covers.
    pub store_limit: u32,
    /// Maximum number of active card templates.
    pub card_template_limit: u32,
    /// Whether new businesses may subscribe to this plan.
    pub available: bool,
}

/// Payload for creating a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriptionPlan {
    /// Display name.
    pub name: String,
    /// Monthly price as a decimal string.
    pub monthly_price: String,
    /// Currency code.
    pub currency: String,
    /// Maximum number of stores the plan covers.
    pub store_limit: u32,
    /// Maximum number of active card templates.
    pub card_template_limit: u32,
}

/// Sparse update payload for a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New monthly price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<String>,
    /// New store limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_limit: Option<u32>,
    /// New card template limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_template_limit: Option<u32>,
    /// Open or close the plan to new subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Paid and current.
    Active,
    /// Payment overdue; grace period running.
    PastDue,
    /// Ended by the business or by the console.
    Cancelled,
}

/// A business's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Stable subscription identifier.
    pub id: Uuid,
    /// Subscribing business.
    pub business_id: Uuid,
    /// Plan subscribed to.
    pub plan_id: Uuid,
    /// Current lifecycle status.
    pub status: SubscriptionStatus,
    /// Start of the current billing period.
    pub current_period_start: DateTime<Utc>,
    /// End of the current billing period.
    pub current_period_end: DateTime<Utc>,
}
