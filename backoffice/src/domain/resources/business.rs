//! Businesses (merchant accounts owning stores and card templates).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A merchant business as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Stable business identifier.
    pub id: Uuid,
    /// Trading name.
    pub name: String,
    /// Primary contact email.
    pub contact_email: String,
    /// Industry label, e.g. `"cafes"`.
    pub industry: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    /// Trading name.
    pub name: String,
    /// Primary contact email.
    pub contact_email: String,
    /// Industry label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// Sparse update payload for a business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUpdate {
    /// New trading name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New primary contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// New industry label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}
