//! Console administrator accounts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a console account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Full access, including user management.
    Owner,
    /// Day-to-day management access.
    Manager,
    /// Read-mostly access for support staff.
    Support,
}

/// A console administrator as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    /// Stable account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Assigned role.
    pub role: AdminRole,
    /// Whether the account may log in.
    pub active: bool,
}

/// Payload for creating an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminUser {
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Initial password; the backend hashes it.
    pub password: String,
    /// Assigned role.
    pub role: AdminRole,
}

/// Sparse update payload for an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New login email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    /// Enable or disable the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
