//! Typed operations on blog posts, categories, and comments.

use envelope::{Envelope, ListQuery};
use serde::Serialize;
use uuid::Uuid;

use super::{AckEnvelope, ApiClient};
use crate::domain::ApiResult;
use crate::domain::resources::{
    BlogCategory, BlogCategoryUpdate, BlogComment, BlogCommentStatus, BlogPost, BlogPostUpdate,
    NewBlogCategory, NewBlogPost,
};

#[derive(Debug, Serialize)]
struct CommentStatusBody {
    status: BlogCommentStatus,
}

impl ApiClient {
    /// List blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_blog_posts(&self, query: &ListQuery) -> ApiResult<Envelope<Vec<BlogPost>>> {
        self.get_json("blog/posts", query.query_pairs()).await
    }

    /// Fetch one blog post.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_blog_post(&self, id: Uuid) -> ApiResult<Envelope<BlogPost>> {
        self.get_json(&format!("blog/posts/{id}"), Vec::new()).await
    }

    /// Create a blog post.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_blog_post(&self, post: &NewBlogPost) -> ApiResult<Envelope<BlogPost>> {
        self.post_json("blog/posts", post).await
    }

    /// Update a blog post.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_blog_post(
        &self,
        id: Uuid,
        update: &BlogPostUpdate,
    ) -> ApiResult<Envelope<BlogPost>> {
        self.put_json(&format!("blog/posts/{id}"), update).await
    }

    /// Delete a blog post.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_blog_post(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("blog/posts/{id}")).await
    }

    /// List blog categories.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_blog_categories(&self) -> ApiResult<Envelope<Vec<BlogCategory>>> {
        self.get_json("blog/categories", Vec::new()).await
    }

    /// Create a blog category.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn create_blog_category(
        &self,
        category: &NewBlogCategory,
    ) -> ApiResult<Envelope<BlogCategory>> {
        self.post_json("blog/categories", category).await
    }

    /// Update a blog category.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_blog_category(
        &self,
        id: Uuid,
        update: &BlogCategoryUpdate,
    ) -> ApiResult<Envelope<BlogCategory>> {
        self.put_json(&format!("blog/categories/{id}"), update)
            .await
    }

    /// Delete a blog category.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_blog_category(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("blog/categories/{id}")).await
    }

    /// List comments on one post.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_blog_comments(
        &self,
        post_id: Uuid,
    ) -> ApiResult<Envelope<Vec<BlogComment>>> {
        self.get_json(&format!("blog/posts/{post_id}/comments"), Vec::new())
            .await
    }

    /// Set a comment's moderation status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn set_blog_comment_status(
        &self,
        id: Uuid,
        status: BlogCommentStatus,
    ) -> ApiResult<Envelope<BlogComment>> {
        self.patch_json(
            &format!("blog/comments/{id}/status"),
            &CommentStatusBody { status },
        )
        .await
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn delete_blog_comment(&self, id: Uuid) -> ApiResult<AckEnvelope> {
        self.delete_json(&format!("blog/comments/{id}")).await
    }
}
