//! Blog posts, categories, and comment moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    /// Being edited; not publicly visible.
    Draft,
    /// Publicly visible.
    Published,
    /// Removed from public view but retained.
    Archived,
}

/// A blog post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Markdown body.
    pub body: String,
    /// Category the post files under, if any.
    pub category_id: Option<Uuid>,
    /// Publication status.
    pub status: BlogPostStatus,
    /// Publication timestamp, when published.
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Markdown body.
    pub body: String,
    /// Category to file the post under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

/// Sparse update payload for a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New Markdown body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    /// New publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BlogPostStatus>,
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    /// Stable category identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogCategory {
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Sparse update payload for a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategoryUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCommentStatus {
    /// Awaiting moderation.
    Pending,
    /// Approved and visible.
    Approved,
    /// Rejected and hidden.
    Rejected,
}

/// A reader comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogComment {
    /// Stable comment identifier.
    pub id: Uuid,
    /// Post the comment belongs to.
    pub post_id: Uuid,
    /// Commenter display name.
    pub author_name: String,
    /// Comment text.
    pub body: String,
    /// Moderation status.
    pub status: BlogCommentStatus,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
