//! Deriving default site content from a translation bundle.
//!
//! The mapping is deterministic: the same language always yields the same
//! document, and a missing translation key yields an empty string rather
//! than an error. Item identity keys and display order are fixed here;
//! only the copy comes from the bundle.

use super::document::{
    CopyItem, CopyListSection, FeatureItem, FeaturesSection, FooterSection, HeaderSection,
    HeroSection, HowItWorksSection, HowItWorksStep, PricingPlanCard, PricingSection,
    SiteContentDocument, SocialLink,
};
use super::translations::{Language, TranslationBundle};

const FEATURE_ITEMS: [(&str, &str); 4] = [
    ("stamps", "stamp"),
    ("rewards", "gift"),
    ("notifications", "bell"),
    ("analytics", "chart"),
];

const CARD_TYPE_KEYS: [&str; 3] = ["stamp", "points", "membership"];
const BENEFIT_KEYS: [&str; 3] = ["retention", "insights", "brand"];
const INDUSTRY_KEYS: [&str; 4] = ["cafes", "salons", "retail", "fitness"];
const PLAN_IDS: [&str; 3] = ["starter", "growth", "enterprise"];
const HIGHLIGHTED_PLAN_ID: &str = "growth";
const SOCIAL_KEYS: [&str; 4] = ["facebook", "instagram", "twitter", "linkedin"];

/// Build the default document for one language.
pub(crate) fn document(language: Language) -> SiteContentDocument {
    let bundle = language.bundle();
    SiteContentDocument {
        header: header(bundle),
        hero: hero(bundle),
        features: features(bundle),
        how_it_works: how_it_works(bundle),
        card_types: copy_list(bundle, "cardTypes", &CARD_TYPE_KEYS),
        benefits: copy_list(bundle, "benefits", &BENEFIT_KEYS),
        pricing: pricing(bundle),
        industries: copy_list(bundle, "industries", &INDUSTRY_KEYS),
        footer: footer(bundle),
    }
}

fn text(bundle: &TranslationBundle, key: &str) -> String {
    bundle.text(key).to_owned()
}

fn header(bundle: &TranslationBundle) -> HeaderSection {
    HeaderSection {
        logo_text: text(bundle, "header.logoText"),
        nav_features: text(bundle, "header.navFeatures"),
        nav_pricing: text(bundle, "header.navPricing"),
        nav_contact: text(bundle, "header.navContact"),
        login_label: text(bundle, "header.loginLabel"),
    }
}

fn hero(bundle: &TranslationBundle) -> HeroSection {
    HeroSection {
        title: text(bundle, "hero.title"),
        subtitle: text(bundle, "hero.subtitle"),
        cta_label: text(bundle, "hero.ctaLabel"),
        image_url: text(bundle, "hero.imageUrl"),
    }
}

fn features(bundle: &TranslationBundle) -> FeaturesSection {
    FeaturesSection {
        title: text(bundle, "features.title"),
        subtitle: text(bundle, "features.subtitle"),
        items: FEATURE_ITEMS
            .iter()
            .map(|(key, icon)| FeatureItem {
                key: (*key).to_owned(),
                title: text(bundle, &format!("features.items.{key}.title")),
                description: text(bundle, &format!("features.items.{key}.description")),
                icon: (*icon).to_owned(),
            })
            .collect(),
    }
}

fn how_it_works(bundle: &TranslationBundle) -> HowItWorksSection {
    HowItWorksSection {
        title: text(bundle, "howItWorks.title"),
        subtitle: text(bundle, "howItWorks.subtitle"),
        steps: (1..=4)
            .map(|number| HowItWorksStep {
                number,
                title: text(bundle, &format!("howItWorks.steps.{number}.title")),
                description: text(bundle, &format!("howItWorks.steps.{number}.description")),
            })
            .collect(),
    }
}

fn copy_list(bundle: &TranslationBundle, section: &str, keys: &[&str]) -> CopyListSection {
    CopyListSection {
        title: text(bundle, &format!("{section}.title")),
        subtitle: text(bundle, &format!("{section}.subtitle")),
        items: keys
            .iter()
            .map(|key| CopyItem {
                key: (*key).to_owned(),
                title: text(bundle, &format!("{section}.items.{key}.title")),
                description: text(bundle, &format!("{section}.items.{key}.description")),
            })
            .collect(),
    }
}

fn pricing(bundle: &TranslationBundle) -> PricingSection {
    PricingSection {
        title: text(bundle, "pricing.title"),
        subtitle: text(bundle, "pricing.subtitle"),
        plans: PLAN_IDS
            .iter()
            .map(|id| PricingPlanCard {
                id: (*id).to_owned(),
                name: text(bundle, &format!("pricing.plans.{id}.name")),
                price: text(bundle, &format!("pricing.plans.{id}.price")),
                period: text(bundle, &format!("pricing.plans.{id}.period")),
                features: plan_features(bundle, id),
                highlighted: *id == HIGHLIGHTED_PLAN_ID,
            })
            .collect(),
    }
}

/// Plan bullet points are stored as one pipe-separated bundle value.
fn plan_features(bundle: &TranslationBundle, id: &str) -> Vec<String> {
    let raw = bundle.text(&format!("pricing.plans.{id}.features"));
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('|').map(str::to_owned).collect()
}

fn footer(bundle: &TranslationBundle) -> FooterSection {
    FooterSection {
        about_text: text(bundle, "footer.aboutText"),
        copyright_text: text(bundle, "footer.copyrightText"),
        social_links: SOCIAL_KEYS
            .iter()
            .map(|key| SocialLink {
                key: (*key).to_owned(),
                label: text(bundle, &format!("footer.social.{key}.label")),
                url: text(bundle, &format!("footer.social.{key}.url")),
            })
            .collect(),
    }
}
