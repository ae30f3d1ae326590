//! Typed operations on console administrator accounts.

use envelope::{Envelope, ListQuery};
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{AdminUser, AdminUserUpdate, NewAdminUser};

impl ApiClient {
    /// List administrators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_admin_users(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<AdminUser>>> {
        self.get_json("admin-users", query.query_pairs()).await
    }

    /// Fetch one administrator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_admin_user(&self, id: Uuid) -> ApiResult<Envelope<AdminUser>> {
        self.get_json(&format!("admin-users/{id}"), Vec::new())
            .await
    }

    /// Create an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_admin_user(&self, user: &NewAdminUser) -> ApiResult<Envelope<AdminUser>> {
        self.post_json("admin-users", user).await
    }

    /// Update an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_admin_user(
        &self,
        id: Uuid,
        update: &AdminUserUpdate,
    ) -> ApiResult<Envelope<AdminUser>> {
        self.put_json(&format!("admin-users/{id}"), update).await
    }

    /// Delete an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_admin_user(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("admin-users/{id}")).await
    }
}
