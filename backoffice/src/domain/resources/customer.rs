//! End customers holding loyalty cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable customer identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email, when the customer shared one.
    pub email: Option<String>,
    /// Contact phone, when the customer shared one.
    pub phone: Option<String>,
    /// Number of card instances held.
    pub card_count: u32,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Sparse update payload for a customer (console-side corrections only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    /// Corrected display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Corrected contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Corrected contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
