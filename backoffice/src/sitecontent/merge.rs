//! Merging persisted overrides over default site content.
//!
//! One merge function per section rather than a generic deep merge: the
//! identity key differs by section (`key`, `number`, `id`) and the footer
//! social links carry a positional fallback no other list has. The
//! default list always defines ordering and cardinality; persisted items
//! that match no default are dropped, defaults that match no persisted
//! item survive unchanged.

use super::document::{
    CopyListSection, FeaturesSection, FooterSection, HeaderSection, HeroSection,
    HowItWorksSection, PricingSection, SiteContentDocument,
};
use super::overlay::{
    CopyListOverlay, DocumentOverlay, FeaturesOverlay, FooterOverlay, HeaderOverlay, HeroOverlay,
    HowItWorksOverlay, PricingOverlay,
};

/// Apply a persisted overlay over a default document.
pub(crate) fn apply_overlay(
    mut document: SiteContentDocument,
    overlay: DocumentOverlay,
) -> SiteContentDocument {
    if let Some(header) = overlay.header {
        merge_header(&mut document.header, header);
    }
    if let Some(hero) = overlay.hero {
        merge_hero(&mut document.hero, hero);
    }
    if let Some(features) = overlay.features {
        merge_features(&mut document.features, features);
    }
    if let Some(how_it_works) = overlay.how_it_works {
        merge_how_it_works(&mut document.how_it_works, how_it_works);
    }
    if let Some(card_types) = overlay.card_types {
        merge_copy_list(&mut document.card_types, card_types);
    }
    if let Some(benefits) = overlay.benefits {
        merge_copy_list(&mut document.benefits, benefits);
    }
    if let Some(pricing) = overlay.pricing {
        merge_pricing(&mut document.pricing, pricing);
    }
    if let Some(industries) = overlay.industries {
        merge_copy_list(&mut document.industries, industries);
    }
    if let Some(footer) = overlay.footer {
        merge_footer(&mut document.footer, footer);
    }
    document
}

/// Replace a scalar with its override when one is present.
///
/// An explicit empty string counts as present and wins over the default.
fn overlay_scalar<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Align each default item with at most one override and apply it.
///
/// Defaults keep their order and cardinality; overrides that match
/// nothing are discarded.
fn merge_keyed<D, O>(
    defaults: &mut [D],
    overrides: Option<Vec<O>>,
    matches: impl Fn(&D, &O) -> bool,
    apply: impl Fn(&mut D, &O),
) {
    let Some(overrides) = overrides else {
        return;
    };
    for item in defaults {
        if let Some(found) = overrides.iter().find(|candidate| matches(item, candidate)) {
            apply(item, found);
        }
    }
}

fn merge_header(section: &mut HeaderSection, overlay: HeaderOverlay) {
    overlay_scalar(&mut section.logo_text, overlay.logo_text);
    overlay_scalar(&mut section.nav_features, overlay.nav_features);
    overlay_scalar(&mut section.nav_pricing, overlay.nav_pricing);
    overlay_scalar(&mut section.nav_contact, overlay.nav_contact);
    overlay_scalar(&mut section.login_label, overlay.login_label);
}

fn merge_hero(section: &mut HeroSection, overlay: HeroOverlay) {
    overlay_scalar(&mut section.title, overlay.title);
    overlay_scalar(&mut section.subtitle, overlay.subtitle);
    overlay_scalar(&mut section.cta_label, overlay.cta_label);
    overlay_scalar(&mut section.image_url, overlay.image_url);
}

fn merge_features(section: &mut FeaturesSection, overlay: FeaturesOverlay) {
    overlay_scalar(&mut section.title, overlay.title);
    overlay_scalar(&mut section.subtitle, overlay.subtitle);
    merge_keyed(
        &mut section.items,
        overlay.items,
        |item, candidate| candidate.key.as_deref() == Some(item.key.as_str()),
        |item, found| {
            overlay_scalar(&mut item.title, found.title.clone());
            overlay_scalar(&mut item.description, found.description.clone());
            overlay_scalar(&mut item.icon, found.icon.clone());
        },
    );
}

fn merge_how_it_works(section: &mut HowItWorksSection, overlay: HowItWorksOverlay) {
    overlay_scalar(&mut section.title, overlay.title);
    overlay_scalar(&mut section.subtitle, overlay.subtitle);
    merge_keyed(
        &mut section.steps,
        overlay.steps,
        |step, candidate| candidate.number == Some(step.number),
        |step, found| {
            overlay_scalar(&mut step.title, found.title.clone());
            overlay_scalar(&mut step.description, found.description.clone());
        },
    );
}

fn merge_copy_list(section: &mut CopyListSection, overlay: CopyListOverlay) {
    overlay_scalar(&mut section.title, overlay.title);
    overlay_scalar(&mut section.subtitle, overlay.subtitle);
    merge_keyed(
        &mut section.items,
        overlay.items,
        |item, candidate| candidate.key.as_deref() == Some(item.key.as_str()),
        |item, found| {
            overlay_scalar(&mut item.title, found.title.clone());
            overlay_scalar(&mut item.description, found.description.clone());
        },
    );
}

fn merge_pricing(section: &mut PricingSection, overlay: PricingOverlay) {
    overlay_scalar(&mut section.title, overlay.title);
    overlay_scalar(&mut section.subtitle, overlay.subtitle);
    merge_keyed(
        &mut section.plans,
        overlay.plans,
        |plan, candidate| candidate.id.as_deref() == Some(plan.id.as_str()),
        |plan, found| {
            overlay_scalar(&mut plan.name, found.name.clone());
            overlay_scalar(&mut plan.price, found.price.clone());
            overlay_scalar(&mut plan.period, found.period.clone());
            overlay_scalar(&mut plan.features, found.features.clone());
            overlay_scalar(&mut plan.highlighted, found.highlighted);
        },
    );
}

/// Footer merge. Social links match by key first; an override with no
/// key match is consulted positionally instead, the one list with that
/// fallback.
fn merge_footer(section: &mut FooterSection, overlay: FooterOverlay) {
    overlay_scalar(&mut section.about_text, overlay.about_text);
    overlay_scalar(&mut section.copyright_text, overlay.copyright_text);
    let Some(overrides) = overlay.social_links else {
        return;
    };
    for (index, link) in section.social_links.iter_mut().enumerate() {
        let by_key = overrides
            .iter()
            .find(|candidate| candidate.key.as_deref() == Some(link.key.as_str()));
        let found = by_key.or_else(|| {
            overrides
                .get(index)
                .filter(|candidate| candidate.key.is_none())
        });
        if let Some(found) = found {
            overlay_scalar(&mut link.label, found.label.clone());
            overlay_scalar(&mut link.url, found.url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::overlay::{CopyItemOverlay, SocialLinkOverlay};
    use super::super::{Language, defaults};
    use super::*;

    fn overlay_from_json(json: &str) -> DocumentOverlay {
        serde_json::from_str(json).expect("overlay fixture must parse")
    }

    #[rstest]
    fn unmatched_default_items_survive_a_sparse_override() {
        let document = defaults::document(Language::En);
        let original_keys: Vec<String> = document
            .features
            .items
            .iter()
            .map(|item| item.key.clone())
            .collect();
        let second_key = original_keys[1].clone();
        let overlay = overlay_from_json(&format!(
            r#"{{"features":{{"items":[{{"key":"{second_key}","title":"Rewritten"}}]}}}}"#
        ));

        let merged = apply_overlay(document, overlay);

        let merged_keys: Vec<String> = merged
            .features
            .items
            .iter()
            .map(|item| item.key.clone())
            .collect();
        assert_eq!(merged_keys, original_keys);
        assert_eq!(merged.features.items[1].title, "Rewritten");
        assert_ne!(merged.features.items[0].title, "Rewritten");
    }

    #[rstest]
    fn empty_string_override_beats_the_default() {
        let document = defaults::document(Language::En);
        let overlay = overlay_from_json(r#"{"hero":{"subtitle":""}}"#);

        let merged = apply_overlay(document, overlay);

        assert_eq!(merged.hero.subtitle, "");
        assert!(!merged.hero.title.is_empty());
    }

    #[rstest]
    fn override_items_matching_no_default_are_dropped() {
        let document = defaults::document(Language::En);
        let overlay = DocumentOverlay {
            benefits: Some(CopyListOverlay {
                items: Some(vec![CopyItemOverlay {
                    key: Some("does-not-exist".into()),
                    title: Some("Ghost".into()),
                    ..CopyItemOverlay::default()
                }]),
                ..CopyListOverlay::default()
            }),
            ..DocumentOverlay::default()
        };
        let expected_len = document.benefits.items.len();

        let merged = apply_overlay(document, overlay);

        assert_eq!(merged.benefits.items.len(), expected_len);
        assert!(merged.benefits.items.iter().all(|item| item.title != "Ghost"));
    }

    #[rstest]
    fn social_links_fall_back_to_positional_matching() {
        let document = defaults::document(Language::En);
        let overlay = DocumentOverlay {
            footer: Some(FooterOverlay {
                social_links: Some(vec![SocialLinkOverlay {
                    key: None,
                    url: Some("https://example.com/first".into()),
                    ..SocialLinkOverlay::default()
                }]),
                ..FooterOverlay::default()
            }),
            ..DocumentOverlay::default()
        };
        let first_key = document.footer.social_links[0].key.clone();

        let merged = apply_overlay(document, overlay);

        assert_eq!(merged.footer.social_links[0].key, first_key);
        assert_eq!(merged.footer.social_links[0].url, "https://example.com/first");
        assert_ne!(merged.footer.social_links[1].url, "https://example.com/first");
    }

    #[rstest]
    fn merging_an_empty_overlay_is_the_identity() {
        let document = defaults::document(Language::Ar);
        let merged = apply_overlay(document.clone(), DocumentOverlay::default());
        assert_eq!(merged, document);
    }
}
