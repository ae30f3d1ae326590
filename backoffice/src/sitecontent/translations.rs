//! Languages and the embedded translation bundles that seed defaults.
//!
//! Bundles are flat dotted-key maps compiled into the binary; a missing
//! key yields an empty string rather than an error so default content can
//! always be produced.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A language the marketing site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic.
    Ar,
    /// English.
    En,
}

impl Language {
    /// Two-letter language code used in URLs and storage keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Key the language's site content document is persisted under.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Ar => "site_content_ar",
            Self::En => "site_content_en",
        }
    }

    /// The language's compiled-in translation bundle.
    #[must_use]
    pub fn bundle(self) -> &'static TranslationBundle {
        match self {
            Self::Ar => arabic_bundle(),
            Self::En => english_bundle(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat dotted-key translation map for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle(BTreeMap<String, String>);

impl TranslationBundle {
    /// Look up a key, returning an empty string when it is absent.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }
}

fn parse_bundle(raw: &str) -> TranslationBundle {
    // The bundles are compile-time assets; a malformed one is a build
    // defect, so degrade to an empty map instead of failing lookups.
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!(%error, "embedded translation bundle failed to parse");
        TranslationBundle(BTreeMap::new())
    })
}

fn arabic_bundle() -> &'static TranslationBundle {
    static BUNDLE: OnceLock<TranslationBundle> = OnceLock::new();
    BUNDLE.get_or_init(|| parse_bundle(include_str!("bundles/ar.json")))
}

fn english_bundle() -> &'static TranslationBundle {
    static BUNDLE: OnceLock<TranslationBundle> = OnceLock::new();
    BUNDLE.get_or_init(|| parse_bundle(include_str!("bundles/en.json")))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Language::Ar, "ar", "site_content_ar")]
    #[case(Language::En, "en", "site_content_en")]
    fn language_codes_and_storage_keys(
        #[case] language: Language,
        #[case] code: &str,
        #[case] storage_key: &str,
    ) {
        assert_eq!(language.as_str(), code);
        assert_eq!(language.storage_key(), storage_key);
    }

    #[rstest]
    #[case(Language::En)]
    #[case(Language::Ar)]
    fn bundles_carry_the_hero_headline(#[case] language: Language) {
        assert!(!language.bundle().text("hero.title").is_empty());
    }

    #[rstest]
    fn missing_keys_fall_back_to_the_empty_string() {
        assert_eq!(Language::En.bundle().text("hero.doesNotExist"), "");
    }
}
