//! Typed operations on subscription plans and subscriptions.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{
    NewSubscriptionPlan, Subscription, SubscriptionPlan, SubscriptionPlanUpdate,
};

impl ApiClient {
    /// List subscription plans.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_subscription_plans(&self) -> ApiResult<Envelope<Vec<SubscriptionPlan>>> {
        self.get_json("subscription-plans", Vec::new()).await
    }

    /// Create a subscription plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_subscription_plan(
        &self,
        plan: &NewSubscriptionPlan,
    ) -> ApiResult<Envelope<SubscriptionPlan>> {
        self.post_json("subscription-plans", plan).await
    }

    /// Update a subscription plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_subscription_plan(
        &self,
        id: Uuid,
        update: &SubscriptionPlanUpdate,
    ) -> ApiResult<Envelope<SubscriptionPlan>> {
        self.put_json(&format!("subscription-plans/{id}"), update)
            .await
    }

    /// Delete a subscription plan.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_subscription_plan(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("subscription-plans/{id}")).await
    }

    /// List subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_subscriptions(
        &self,
        query: &ListQuery,
    ) -> ApiResult<Envelope<Vec<Subscription>>> {
        self.get_json("subscriptions", query.query_pairs()).await
    }

    /// Fetch one subscription.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_subscription(&self, id: Uuid) -> ApiResult<Envelope<Subscription>> {
        self.get_json(&format!("subscriptions/{id}"), Vec::new())
            .await
    }

    /// Cancel a subscription at the end of its current period.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn cancel_subscription(&self, id: Uuid) -> ApiResult<Envelope<Subscription>> {
        self.post_empty(&format!("subscriptions/{id}/cancel")).await
    }
}
