//! Typed operations on store locations.

use envelope::{Envelope, ListQuery};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::{AckEnvelope, ApiClient, BulkOutcome};
use crate::domain::ApiResult;
use crate::domain::resources::{NewStore, Store, StoreStatus, StoreUpdate};

#[derive(Debug, Serialize)]
struct StatusBody {
    status: StoreStatus,
}

impl ApiClient {
    /// List stores.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_stores(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Store>>> {
        self.get_json("stores", query.query_pairs()).await
    }

    /// Fetch one store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_store(&self, id: Uuid) -> ApiResult<Envelope<Store>> {
        self.get_json(&format!("stores/{id}"), Vec::new()).await
    }

    /// Create a store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_store(&self, store: &NewStore) -> ApiResult<Envelope<Store>> {
        self.post_json("stores", store).await
    }

    /// Update a store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_store(&self, id: Uuid, update: &StoreUpdate) -> ApiResult<Envelope<Store>> {
        self.put_json(&format!("stores/{id}"), update).await
    }

    /// Delete a store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_store(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("stores/{id}")).await
    }

    /// Set one store's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn set_store_status(
        &self,
        id: Uuid,
        status: StoreStatus,
    ) -> ApiResult<Envelope<Store>> {
        self.patch_json(&format!("stores/{id}/status"), &StatusBody { status })
            .await
    }

    /// Apply a status to several stores, one request per store.
    ///
    /// Requests run sequentially; a failure does not stop the loop and
    /// nothing is rolled back. The outcome records both sides.
    pub async fn set_store_status_bulk(&self, ids: &[Uuid], status: StoreStatus) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        for &id in ids {
            let result = self.set_store_status(id, status).await.map(|_| ());
            if let Err(error) = &result {
                warn!(store = %id, error = %error, "bulk store status update item failed");
            }
            outcome.record(id, result);
        }
        outcome
    }
}
