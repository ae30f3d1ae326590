//! Site-wide settings: general, SEO, and theme.

use serde::{Deserialize, Serialize};

/// General platform settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    /// Platform display name.
    pub site_name: String,
    /// Support contact email.
    pub support_email: String,
    /// Default language code (`"ar"` or `"en"`).
    pub default_language: String,
    /// Whether new business registration is open.
    pub registration_open: bool,
}

/// Sparse update payload for general settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettingsUpdate {
    /// New platform display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// New support contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// New default language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Open or close business registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_open: Option<bool>,
}

/// SEO metadata for one marketing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoProfile {
    /// Page identifier, e.g. `"home"` or `"pricing"`.
    pub page: String,
    /// `<title>` content.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Meta keywords, comma separated.
    pub keywords: String,
}

/// Sparse update payload for a page's SEO metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoProfileUpdate {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

/// Marketing site theme values (CSS custom property inputs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Primary brand colour as a hex string.
    pub primary_color: String,
    /// Secondary brand colour as a hex string.
    pub secondary_color: String,
    /// Body font family name.
    pub font_family: String,
    /// Logo image URL.
    pub logo_url: String,
}

/// Sparse update payload for theme values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettingsUpdate {
    /// New primary colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// New secondary colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// New body font family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// New logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}
