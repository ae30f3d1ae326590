//! Products stamped or redeemed against loyalty cards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product identifier.
    pub id: Uuid,
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Price as a decimal string.
    pub price: String,
    /// Currency code.
    pub currency: String,
    /// Whether the product currently earns stamps or points.
    pub active: bool,
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Owning business.
    pub business_id: Uuid,
    /// Display name.
    pub name: String,
    /// Price as a decimal string.
    pub price: String,
    /// Currency code.
    pub currency: String,
}

/// Sparse update payload for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Enable or disable earning on the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
