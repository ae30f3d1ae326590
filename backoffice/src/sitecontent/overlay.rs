//! Sparse overlay shapes for persisted site content.
//!
//! Persisted documents are read back through these all-optional mirrors so
//! that partial or stale overrides still merge cleanly over fresh defaults
//! instead of failing to deserialize.

use serde::Deserialize;

/// All-optional mirror of [`super::SiteContentDocument`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DocumentOverlay {
    pub header: Option<HeaderOverlay>,
    pub hero: Option<HeroOverlay>,
    pub features: Option<FeaturesOverlay>,
    pub how_it_works: Option<HowItWorksOverlay>,
    pub card_types: Option<CopyListOverlay>,
    pub benefits: Option<CopyListOverlay>,
    pub pricing: Option<PricingOverlay>,
    pub industries: Option<CopyListOverlay>,
    pub footer: Option<FooterOverlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HeaderOverlay {
    pub logo_text: Option<String>,
    pub nav_features: Option<String>,
    pub nav_pricing: Option<String>,
    pub nav_contact: Option<String>,
    pub login_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HeroOverlay {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_label: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FeaturesOverlay {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Option<Vec<FeatureItemOverlay>>,
}

/// A feature card override. The `key` is mandatory; an item without one
/// cannot be matched and is ignored by the merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FeatureItemOverlay {
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HowItWorksOverlay {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Option<Vec<HowItWorksStepOverlay>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct HowItWorksStepOverlay {
    pub number: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CopyListOverlay {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Option<Vec<CopyItemOverlay>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CopyItemOverlay {
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PricingOverlay {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub plans: Option<Vec<PricingPlanOverlay>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PricingPlanOverlay {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub period: Option<String>,
    pub features: Option<Vec<String>>,
    pub highlighted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FooterOverlay {
    pub about_text: Option<String>,
    pub copyright_text: Option<String>,
    pub social_links: Option<Vec<SocialLinkOverlay>>,
}

/// A social link override. Unlike the other keyed lists, an item without
/// a `key` still participates via positional matching.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SocialLinkOverlay {
    pub key: Option<String>,
    pub label: Option<String>,
    pub url: Option<String>,
}
