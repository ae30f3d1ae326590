//! The marketing site content document and its section payloads.
//!
//! The document has a fixed set of named sections, one per page region.
//! Repeatable sub-items carry a stable identity key (`key`, `number`, or
//! `id` depending on the section) that override merging aligns on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The full per-language marketing content document.
///
/// Two independent documents exist, one per [`super::Language`]; they are
/// never merged with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContentDocument {
    /// Top navigation bar copy.
    pub header: HeaderSection,
    /// Landing hero block.
    pub hero: HeroSection,
    /// Product feature grid.
    pub features: FeaturesSection,
    /// Numbered onboarding steps.
    pub how_it_works: HowItWorksSection,
    /// Supported loyalty card kinds.
    pub card_types: CopyListSection,
    /// Merchant benefit highlights.
    pub benefits: CopyListSection,
    /// Pricing table.
    pub pricing: PricingSection,
    /// Target industry highlights.
    pub industries: CopyListSection,
    /// Page footer copy and social links.
    pub footer: FooterSection,
}

/// Top navigation bar copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSection {
    /// Wordmark text next to the logo.
    pub logo_text: String,
    /// Features navigation label.
    pub nav_features: String,
    /// Pricing navigation label.
    pub nav_pricing: String,
    /// Contact navigation label.
    pub nav_contact: String,
    /// Sign-in button label.
    pub login_label: String,
}

/// Landing hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    pub subtitle: String,
    /// Primary call-to-action label.
    pub cta_label: String,
    /// Hero illustration URL.
    pub image_url: String,
}

/// Product feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    /// Section headline.
    pub title: String,
    /// Section supporting line.
    pub subtitle: String,
    /// Feature cards, keyed by `key`.
    pub items: Vec<FeatureItem>,
}

/// One feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItem {
    /// Stable identity key.
    pub key: String,
    /// Card headline.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Icon identifier rendered next to the card.
    pub icon: String,
}

/// Numbered onboarding steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksSection {
    /// Section headline.
    pub title: String,
    /// Section supporting line.
    pub subtitle: String,
    /// Ordered steps, keyed by `number`.
    pub steps: Vec<HowItWorksStep>,
}

/// One onboarding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowItWorksStep {
    /// Stable step number, also the display order.
    pub number: u32,
    /// Step headline.
    pub title: String,
    /// Step body text.
    pub description: String,
}

/// A headline, a supporting line, and a list of keyed copy items.
///
/// Shared by the card-types, benefits, and industries sections, which
/// differ only in content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyListSection {
    /// Section headline.
    pub title: String,
    /// Section supporting line.
    pub subtitle: String,
    /// Copy items, keyed by `key`.
    pub items: Vec<CopyItem>,
}

/// One keyed copy item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyItem {
    /// Stable identity key.
    pub key: String,
    /// Item headline.
    pub title: String,
    /// Item body text.
    pub description: String,
}

/// Pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSection {
    /// Section headline.
    pub title: String,
    /// Section supporting line.
    pub subtitle: String,
    /// Plans, keyed by `id`.
    pub plans: Vec<PricingPlanCard>,
}

/// One pricing plan card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlanCard {
    /// Stable identity key.
    pub id: String,
    /// Plan display name.
    pub name: String,
    /// Monthly price as a decimal string.
    pub price: String,
    /// Billing period caption, e.g. "per month".
    pub period: String,
    /// Bullet-point feature lines.
    pub features: Vec<String>,
    /// Whether the card is visually emphasised.
    pub highlighted: bool,
}

/// Page footer copy and social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    /// Short company blurb.
    pub about_text: String,
    /// Copyright line.
    pub copyright_text: String,
    /// Social links, keyed by `key` with a positional fallback.
    pub social_links: Vec<SocialLink>,
}

/// One footer social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Stable identity key, e.g. `"facebook"`.
    pub key: String,
    /// Link label.
    pub label: String,
    /// Link target URL.
    pub url: String,
}

/// Name of one document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionName {
    /// Top navigation bar.
    Header,
    /// Landing hero block.
    Hero,
    /// Product feature grid.
    Features,
    /// Numbered onboarding steps.
    HowItWorks,
    /// Supported loyalty card kinds.
    CardTypes,
    /// Merchant benefit highlights.
    Benefits,
    /// Pricing table.
    Pricing,
    /// Target industry highlights.
    Industries,
    /// Page footer.
    Footer,
}

impl SectionName {
    /// The section's wire and storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::HowItWorks => "howItWorks",
            Self::CardTypes => "cardTypes",
            Self::Benefits => "benefits",
            Self::Pricing => "pricing",
            Self::Industries => "industries",
            Self::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown site content section: {0}")]
pub struct UnknownSectionName(String);

impl FromStr for SectionName {
    type Err = UnknownSectionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(Self::Header),
            "hero" => Ok(Self::Hero),
            "features" => Ok(Self::Features),
            "howItWorks" => Ok(Self::HowItWorks),
            "cardTypes" => Ok(Self::CardTypes),
            "benefits" => Ok(Self::Benefits),
            "pricing" => Ok(Self::Pricing),
            "industries" => Ok(Self::Industries),
            "footer" => Ok(Self::Footer),
            other => Err(UnknownSectionName(other.to_owned())),
        }
    }
}

/// One section's payload together with which section it is.
///
/// Serializes as the bare payload; the section name travels out of band
/// (a URL path segment or a struct field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// Top navigation bar payload.
    Header(HeaderSection),
    /// Hero payload.
    Hero(HeroSection),
    /// Feature grid payload.
    Features(FeaturesSection),
    /// Onboarding steps payload.
    HowItWorks(HowItWorksSection),
    /// Card kinds payload.
    CardTypes(CopyListSection),
    /// Benefits payload.
    Benefits(CopyListSection),
    /// Pricing table payload.
    Pricing(PricingSection),
    /// Industries payload.
    Industries(CopyListSection),
    /// Footer payload.
    Footer(FooterSection),
}

impl SectionContent {
    /// Which section this payload belongs to.
    #[must_use]
    pub const fn name(&self) -> SectionName {
        match self {
            Self::Header(_) => SectionName::Header,
            Self::Hero(_) => SectionName::Hero,
            Self::Features(_) => SectionName::Features,
            Self::HowItWorks(_) => SectionName::HowItWorks,
            Self::CardTypes(_) => SectionName::CardTypes,
            Self::Benefits(_) => SectionName::Benefits,
            Self::Pricing(_) => SectionName::Pricing,
            Self::Industries(_) => SectionName::Industries,
            Self::Footer(_) => SectionName::Footer,
        }
    }
}

impl SiteContentDocument {
    /// Replace exactly one section, leaving the rest untouched.
    pub fn replace_section(&mut self, section: SectionContent) {
        match section {
            SectionContent::Header(payload) => self.header = payload,
            SectionContent::Hero(payload) => self.hero = payload,
            SectionContent::Features(payload) => self.features = payload,
            SectionContent::HowItWorks(payload) => self.how_it_works = payload,
            SectionContent::CardTypes(payload) => self.card_types = payload,
            SectionContent::Benefits(payload) => self.benefits = payload,
            SectionContent::Pricing(payload) => self.pricing = payload,
            SectionContent::Industries(payload) => self.industries = payload,
            SectionContent::Footer(payload) => self.footer = payload,
        }
    }

    /// Extract one section as an owned payload.
    #[must_use]
    pub fn section(&self, name: SectionName) -> SectionContent {
        match name {
            SectionName::Header => SectionContent::Header(self.header.clone()),
            SectionName::Hero => SectionContent::Hero(self.hero.clone()),
            SectionName::Features => SectionContent::Features(self.features.clone()),
            SectionName::HowItWorks => SectionContent::HowItWorks(self.how_it_works.clone()),
            SectionName::CardTypes => SectionContent::CardTypes(self.card_types.clone()),
            SectionName::Benefits => SectionContent::Benefits(self.benefits.clone()),
            SectionName::Pricing => SectionContent::Pricing(self.pricing.clone()),
            SectionName::Industries => SectionContent::Industries(self.industries.clone()),
            SectionName::Footer => SectionContent::Footer(self.footer.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SectionName::Header, "header")]
    #[case(SectionName::HowItWorks, "howItWorks")]
    #[case(SectionName::CardTypes, "cardTypes")]
    #[case(SectionName::Footer, "footer")]
    fn section_names_round_trip(#[case] name: SectionName, #[case] text: &str) {
        assert_eq!(name.as_str(), text);
        assert_eq!(text.parse::<SectionName>(), Ok(name));
    }

    #[rstest]
    fn unknown_section_name_is_rejected() {
        let err = "sidebar".parse::<SectionName>();
        assert_eq!(err, Err(UnknownSectionName("sidebar".into())));
    }

    #[rstest]
    fn section_content_serializes_as_bare_payload() {
        let payload = SectionContent::Hero(HeroSection {
            title: "t".into(),
            subtitle: "s".into(),
            cta_label: "go".into(),
            image_url: "https://example.com/hero.png".into(),
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["title"], "t");
        assert_eq!(value["ctaLabel"], "go");
        assert!(value.get("hero").is_none());
    }
}
