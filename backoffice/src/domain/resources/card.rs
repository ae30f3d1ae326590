//! Card templates and the card instances issued from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of loyalty mechanic a template implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Collect N stamps, earn a reward.
    Stamp,
    /// Accumulate points against purchases.
    Points,
    /// Flat membership entitlement.
    Membership,
}

/// A card template (the design customers receive instances of).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplate {
    /// Stable template identifier.
    pub id: Uuid,
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Loyalty mechanic.
    pub variant: CardVariant,
    /// Stamps or points required for a reward, where applicable.
    pub reward_threshold: Option<u32>,
    /// Reward description shown on the card.
    pub reward_description: String,
    /// Whether new instances may be issued.
    pub active: bool,
}

/// Payload for creating a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardTemplate {
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Loyalty mechanic.
    pub variant: CardVariant,
    /// Stamps or points required for a reward, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_threshold: Option<u32>,
    /// Reward description shown on the card.
    pub reward_description: String,
}

/// Sparse update payload for a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplateUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New reward threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_threshold: Option<u32>,
    /// New reward description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_description: Option<String>,
    /// Open or close the template for new issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Lifecycle status of an issued card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardInstanceStatus {
    /// Held by a customer and earning.
    Active,
    /// Reward claimed and card completed.
    Redeemed,
    /// Withdrawn by an administrator.
    Revoked,
}

/// A card instance held by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstance {
    /// Stable instance identifier.
    pub id: Uuid,
    /// Template the instance was issued from.
    pub template_id: Uuid,
    /// Holding customer.
    pub customer_id: Uuid,
    /// Current lifecycle status.
    pub status: CardInstanceStatus,
    /// Stamps or points accumulated so far.
    pub progress: u32,
    /// Issue timestamp.
    pub issued_at: DateTime<Utc>,
}

/// Payload for issuing a card to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCard {
    /// Template to issue from.
    pub template_id: Uuid,
    /// Receiving customer.
    pub customer_id: Uuid,
}
