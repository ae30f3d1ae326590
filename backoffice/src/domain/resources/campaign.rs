//! Marketing campaigns (announcement pushes to card holders).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Being edited; not visible to customers.
    Draft,
    /// Queued for delivery.
    Scheduled,
    /// Delivery completed.
    Sent,
}

/// A campaign as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Stable campaign identifier.
    pub id: Uuid,
    /// Internal title shown in the console.
    pub title: String,
    /// Message body delivered to customers.
    pub body: String,
    /// Current lifecycle status.
    pub status: CampaignStatus,
    /// Optional coupon attached to the campaign.
    pub coupon_id: Option<Uuid>,
    /// Scheduled delivery time, when status is scheduled.
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Actual delivery time, when status is sent.
    pub sent_at: Option<DateTime<Utc>>,
}

/// Payload for creating a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    /// Internal title shown in the console.
    pub title: String,
    /// Message body delivered to customers.
    pub body: String,
    /// Optional coupon to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<Uuid>,
    /// Optional delivery time; omitted means "send when triggered".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// Sparse update payload for a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    /// New internal title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New message body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Attach or replace the coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<Uuid>,
    /// New scheduled delivery time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}
