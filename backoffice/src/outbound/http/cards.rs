//! Typed operations on card templates and issued card instances.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{
    CardInstance, CardTemplate, CardTemplateUpdate, IssueCard, NewCardTemplate,
};

impl ApiClient {
    /// List card templates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_card_templates(
        &self,
        query: &ListQuery,
    ) -> ApiResult<Envelope<Vec<CardTemplate>>> {
        self.get_json("card-templates", query.query_pairs()).await
    }

    /// Fetch one card template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_card_template(&self, id: Uuid) -> ApiResult<Envelope<CardTemplate>> {
        self.get_json(&format!("card-templates/{id}"), Vec::new())
            .await
    }

    /// Create a card template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_card_template(
        &self,
        template: &NewCardTemplate,
    ) -> ApiResult<Envelope<CardTemplate>> {
        self.post_json("card-templates", template).await
    }

    /// Update a card template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_card_template(
        &self,
        id: Uuid,
        update: &CardTemplateUpdate,
    ) -> ApiResult<Envelope<CardTemplate>> {
        self.put_json(&format!("card-templates/{id}"), update).await
    }

    /// Delete a card template.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_card_template(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("card-templates/{id}")).await
    }

    /// List issued card instances.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_card_instances(
        &self,
        query: &ListQuery,
    ) -> ApiResult<Envelope<Vec<CardInstance>>> {
        self.get_json("cards", query.query_pairs()).await
    }

    /// Fetch one card instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_card_instance(&self, id: Uuid) -> ApiResult<Envelope<CardInstance>> {
        self.get_json(&format!("cards/{id}"), Vec::new()).await
    }

    /// Issue a card from a template to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn issue_card(&self, issue: &IssueCard) -> ApiResult<Envelope<CardInstance>> {
        self.post_json("cards", issue).await
    }

    /// Revoke an issued card.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn revoke_card(&self, id: Uuid) -> ApiResult<Envelope<CardInstance>> {
        self.post_empty(&format!("cards/{id}/revoke")).await
    }
}
