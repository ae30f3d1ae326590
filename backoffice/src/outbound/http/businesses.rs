//! Typed operations on merchant businesses.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{Business, BusinessUpdate, NewBusiness};

impl ApiClient {
    /// List businesses.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_businesses(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Business>>> {
        self.get_json("businesses", query.query_pairs()).await
    }

    /// Fetch one business.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_business(&self, id: Uuid) -> ApiResult<Envelope<Business>> {
        self.get_json(&format!("businesses/{id}"), Vec::new()).await
    }

    /// Create a business.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_business(&self, business: &NewBusiness) -> ApiResult<Envelope<Business>> {
        self.post_json("businesses", business).await
    }

    /// Update a business.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_business(
        &self,
        id: Uuid,
        update: &BusinessUpdate,
    ) -> ApiResult<Envelope<Business>> {
        self.put_json(&format!("businesses/{id}"), update).await
    }

    /// Delete a business.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_business(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("businesses/{id}")).await
    }
}
