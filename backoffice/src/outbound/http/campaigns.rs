//! Typed operations on marketing campaigns.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{Campaign, CampaignUpdate, NewCampaign};

impl ApiClient {
    /// List campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_campaigns(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Campaign>>> {
        self.get_json("campaigns", query.query_pairs()).await
    }

    /// Fetch one campaign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_campaign(&self, id: Uuid) -> ApiResult<Envelope<Campaign>> {
        self.get_json(&format!("campaigns/{id}"), Vec::new()).await
    }

    /// Create a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> ApiResult<Envelope<Campaign>> {
        self.post_json("campaigns", campaign).await
    }

    /// Update a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_campaign(
        &self,
        id: Uuid,
        update: &CampaignUpdate,
    ) -> ApiResult<Envelope<Campaign>> {
        self.put_json(&format!("campaigns/{id}"), update).await
    }

    /// Delete a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_campaign(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("campaigns/{id}")).await
    }

    /// Trigger delivery of a draft or scheduled campaign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn send_campaign(&self, id: Uuid) -> ApiResult<Envelope<Campaign>> {
        self.post_empty(&format!("campaigns/{id}/send")).await
    }
}
