//! Marketing coupons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a coupon's discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage off the basket total.
    Percentage,
    /// Fixed amount off the basket total.
    Fixed,
}

/// Lifecycle status of a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    /// Redeemable.
    Active,
    /// Suspended by an administrator.
    Inactive,
    /// Past its expiry date.
    Expired,
}

/// A coupon as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Stable coupon identifier.
    pub id: Uuid,
    /// Redemption code customers enter.
    pub code: String,
    /// How the discount is computed.
    pub discount_kind: DiscountKind,
    /// Discount value as a decimal string (`"10"` percent or `"5.00"` fixed).
    pub discount_value: String,
    /// Current lifecycle status.
    pub status: CouponStatus,
    /// Maximum total redemptions, if bounded.
    pub max_redemptions: Option<u32>,
    /// Redemptions so far.
    pub redemption_count: u32,
    /// Expiry timestamp, if any.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Payload for creating a coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoupon {
    /// Redemption code customers enter.
    pub code: String,
    /// How the discount is computed.
    pub discount_kind: DiscountKind,
    /// Discount value as a decimal string.
    pub discount_value: String,
    /// Maximum total redemptions, if bounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    /// Expiry timestamp, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Sparse update payload for a coupon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponUpdate {
    /// New discount value as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<String>,
    /// New lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CouponStatus>,
    /// New redemption ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_redemptions: Option<u32>,
    /// New expiry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
