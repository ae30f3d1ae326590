//! Typed operations for the published site content on the backend.
//!
//! These mirror the local [`crate::sitecontent::SiteContentStore`]: the
//! admin edits locally, then publishes a document or a single section to
//! the backend for the public site to serve.

use envelope::Envelope;

use super::ApiClient;
use crate::domain::ApiResult;
use crate::sitecontent::{Language, SectionContent, SiteContentDocument};

impl ApiClient {
    /// Fetch the published site content for one language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn published_site_content(
        &self,
        language: Language,
    ) -> ApiResult<Envelope<SiteContentDocument>> {
        self.get_json(&format!("site-content/{language}"), Vec::new())
            .await
    }

    /// Publish one section of a language's site content.
    ///
    /// The section name travels in the path; the body is the bare
    /// section payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn publish_site_content_section(
        &self,
        language: Language,
        section: &SectionContent,
    ) -> ApiResult<Envelope<SiteContentDocument>> {
        let path = format!("site-content/{language}/sections/{}", section.name());
        self.put_json(&path, section).await
    }
}
