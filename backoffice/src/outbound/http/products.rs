//! Typed operations on products.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{NewProduct, Product, ProductUpdate};

impl ApiClient {
    /// List products.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_products(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<Product>>> {
        self.get_json("products", query.query_pairs()).await
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_product(&self, id: Uuid) -> ApiResult<Envelope<Product>> {
        self.get_json(&format!("products/{id}"), Vec::new()).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_product(&self, product: &NewProduct) -> ApiResult<Envelope<Product>> {
        self.post_json("products", product).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_product(
        &self,
        id: Uuid,
        update: &ProductUpdate,
    ) -> ApiResult<Envelope<Product>> {
        self.put_json(&format!("products/{id}"), update).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_product(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("products/{id}")).await
    }
}
