//! Typed operations for general, SEO, and theme settings.

use envelope::Envelope;

use super::ApiClient;
use crate::domain::ApiResult;
use crate::domain::resources::{
    GeneralSettings, GeneralSettingsUpdate, SeoProfile, SeoProfileUpdate, ThemeSettings,
    ThemeSettingsUpdate,
};

impl ApiClient {
    /// Fetch the general platform settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_settings(&self) -> ApiResult<Envelope<GeneralSettings>> {
        self.get_json("settings", Vec::new()).await
    }

    /// Update the general platform settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_settings(
        &self,
        update: &GeneralSettingsUpdate,
    ) -> ApiResult<Envelope<GeneralSettings>> {
        self.put_json("settings", update).await
    }

    /// List SEO profiles for every marketing page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn list_seo_profiles(&self) -> ApiResult<Envelope<Vec<SeoProfile>>> {
        self.get_json("settings/seo", Vec::new()).await
    }

    /// Update the SEO profile of one marketing page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_seo_profile(
        &self,
        page: &str,
        update: &SeoProfileUpdate,
    ) -> ApiResult<Envelope<SeoProfile>> {
        self.put_json(&format!("settings/seo/{page}"), update).await
    }

    /// Fetch the marketing site theme values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn get_theme(&self) -> ApiResult<Envelope<ThemeSettings>> {
        self.get_json("settings/theme", Vec::new()).await
    }

    /// Update the marketing site theme values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ApiError`] when the request fails.
    pub async fn update_theme(
        &self,
        update: &ThemeSettingsUpdate,
    ) -> ApiResult<Envelope<ThemeSettings>> {
        self.put_json("settings/theme", update).await
    }
}
