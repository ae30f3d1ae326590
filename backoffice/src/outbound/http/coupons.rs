//! Typed operations on marketing coupons.

use envelope::{Envelope, ListQuery};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::{AckEnvelope, ApiClient, BulkOutcome};
use crate::domain::ApiResult;
use crate::domain::resources::{Coupon, CouponStatus, CouponUpdate, NewCoupon};

#[derive(Debug, Serialize)]
struct StatusBody {
    status: CouponStatus,
}

impl ApiClient {
    /// List coupons.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_coupons(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Coupon>>> {
        self.get_json("coupons", query.query_pairs()).await
    }

    /// Fetch one coupon.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_coupon(&self, id: Uuid) -> ApiResult<Envelope<Coupon>> {
        self.get_json(&format!("coupons/{id}"), Vec::new()).await
    }

    /// Create a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_coupon(&self, coupon: &NewCoupon) -> ApiResult<Envelope<Coupon>> {
        self.post_json("coupons", coupon).await
    }

    /// Update a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_coupon(
        &self,
        id: Uuid,
        update: &CouponUpdate,
    ) -> ApiResult<Envelope<Coupon>> {
        self.put_json(&format!("coupons/{id}"), update).await
    }

    /// Delete a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_coupon(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("coupons/{id}")).await
    }

    /// Apply a status to several coupons, one request per coupon.
    ///
    /// Requests run sequentially; a failure does not stop the loop and
    /// nothing is rolled back.
    pub async fn set_coupon_status_bulk(&self, ids: &[Uuid], status: CouponStatus) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for &id in ids {
            let result = self
                .patch_json::<Envelope<Coupon>, _>(
                    &format!("coupons/{id}/status"),
                    &StatusBody { status },
                )
                .await
                .map(|_| ());
            if let Err(error) = &result {
                warn!(coupon = %id, error = %error, "bulk coupon status update item failed");
            }
            outcome.record(id, result);
        }
        outcome
    }
}
