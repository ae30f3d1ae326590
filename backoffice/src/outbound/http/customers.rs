//! Typed operations on end customers.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{Customer, CustomerUpdate};

impl ApiClient {
    /// List customers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_customers(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Customer>>> {
        self.get_json("customers", query.query_pairs()).await
    }

    /// Fetch one customer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_customer(&self, id: Uuid) -> ApiResult<Envelope<Customer>> {
        self.get_json(&format!("customers/{id}"), Vec::new()).await
    }

    /// Apply console-side corrections to a customer record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_customer(
        &self,
        id: Uuid,
        update: &CustomerUpdate,
    ) -> ApiResult<Envelope<Customer>> {
        self.put_json(&format!("customers/{id}"), update).await
    }

    /// Delete a customer and their card instances.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_customer(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("customers/{id}")).await
    }
}
