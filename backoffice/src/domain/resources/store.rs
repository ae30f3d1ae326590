//! Physical store locations managed from the console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// Visible and issuing cards.
    Active,
    /// Temporarily hidden from customers.
    Inactive,
    /// Awaiting review before first activation.
    Pending,
}

/// A store location as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Stable store identifier.
    pub id: Uuid,
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address shown to customers.
    pub address: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Current lifecycle status.
    pub status: StoreStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address shown to customers.
    pub address: String,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Sparse update payload for a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// New contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoreStatus>,
}
