//! Site content: translation-seeded defaults with persisted overrides.
//!
//! The marketing site's editable copy lives here. Defaults derive from
//! embedded translation bundles; an administrator's edits persist as a
//! full document in key/value storage and are merged back over fresh
//! defaults on every read. The read path never fails: unreadable or
//! malformed storage logs a warning and yields the pure defaults. The
//! write path is fail-visible so a lost save is never silent.

mod defaults;
mod document;
mod merge;
mod overlay;
mod translations;

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

pub use document::{
    CopyItem, CopyListSection, FeatureItem, FeaturesSection, FooterSection, HeaderSection,
    HeroSection, HowItWorksSection, HowItWorksStep, PricingPlanCard, PricingSection,
    SectionContent, SectionName, SiteContentDocument, SocialLink, UnknownSectionName,
};
pub use translations::{Language, TranslationBundle};

/// Error raised by site content write operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteContentStoreError {
    /// The backing key/value store rejected the write.
    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),
    /// The document could not be serialized.
    #[error("site content could not be serialized: {message}")]
    Serialize {
        /// Serializer failure description.
        message: String,
    },
}

/// Per-language site content over a key/value store.
#[derive(Clone)]
pub struct SiteContentStore {
    store: Arc<dyn KeyValueStore>,
}

impl SiteContentStore {
    /// Create a store over the given persistence backend.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The pure default document for a language. Never touches storage.
    #[must_use]
    pub fn default_content(&self, language: Language) -> SiteContentDocument {
        defaults::document(language)
    }

    /// One section of the pure defaults, for reset-this-section flows.
    #[must_use]
    pub fn default_section(&self, language: Language, name: SectionName) -> SectionContent {
        defaults::document(language).section(name)
    }

    /// The effective document: persisted overrides merged over defaults.
    ///
    /// Storage read failures and malformed persisted JSON degrade to the
    /// pure defaults with a warning; this method never fails.
    #[must_use]
    pub fn site_content(&self, language: Language) -> SiteContentDocument {
        let document = defaults::document(language);
        let raw = match self.store.get(language.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return document,
            Err(error) => {
                warn!(%language, %error, "site content storage unreadable; using defaults");
                return document;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(overlay) => merge::apply_overlay(document, overlay),
            Err(error) => {
                warn!(%language, %error, "persisted site content malformed; using defaults");
                document
            }
        }
    }

    /// Persist the full document for a language.
    ///
    /// # Errors
    ///
    /// Returns [`SiteContentStoreError`] when serialization fails or the
    /// backing store rejects the write (for example on quota exhaustion).
    pub fn save_site_content(
        &self,
        language: Language,
        document: &SiteContentDocument,
    ) -> Result<(), SiteContentStoreError> {
        let raw = serde_json::to_string(document).map_err(|error| {
            SiteContentStoreError::Serialize {
                message: error.to_string(),
            }
        })?;
        self.store.set(language.storage_key(), &raw)?;
        Ok(())
    }

    /// Overwrite any override with the defaults and return them.
    ///
    /// # Errors
    ///
    /// Returns [`SiteContentStoreError`] when the write fails.
    pub fn reset_to_default(
        &self,
        language: Language,
    ) -> Result<SiteContentDocument, SiteContentStoreError> {
        let document = defaults::document(language);
        self.save_site_content(language, &document)?;
        Ok(document)
    }

    /// Replace one section of the effective document and persist the rest
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SiteContentStoreError`] when the write fails.
    pub fn update_section(
        &self,
        language: Language,
        section: SectionContent,
    ) -> Result<SiteContentDocument, SiteContentStoreError> {
        let mut document = self.site_content(language);
        document.replace_section(section);
        self.save_site_content(language, &document)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use crate::domain::ports::InMemoryKeyValueStore;

    use super::*;

    #[fixture]
    fn store() -> SiteContentStore {
        SiteContentStore::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[rstest]
    fn effective_content_without_overrides_is_the_default(store: SiteContentStore) {
        assert_eq!(
            store.site_content(Language::En),
            store.default_content(Language::En),
        );
    }

    #[rstest]
    fn save_then_read_round_trips(store: SiteContentStore) {
        let mut document = store.default_content(Language::En);
        document.hero.title = "New headline".into();

        store
            .save_site_content(Language::En, &document)
            .expect("save must succeed");

        assert_eq!(store.site_content(Language::En), document);
    }

    #[rstest]
    fn saving_an_effective_document_is_idempotent(store: SiteContentStore) {
        let mut document = store.default_content(Language::En);
        document.features.items[0].title = "Edited".into();
        store
            .save_site_content(Language::En, &document)
            .expect("save must succeed");

        let first = store.site_content(Language::En);
        store
            .save_site_content(Language::En, &first)
            .expect("save must succeed");

        assert_eq!(store.site_content(Language::En), first);
    }

    #[rstest]
    fn malformed_persisted_json_degrades_to_defaults() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        backend
            .set(Language::En.storage_key(), "{not json")
            .expect("seed must succeed");
        let store = SiteContentStore::new(backend);

        assert_eq!(
            store.site_content(Language::En),
            store.default_content(Language::En),
        );
    }

    #[rstest]
    fn reset_overwrites_a_prior_override(store: SiteContentStore) {
        let mut document = store.default_content(Language::Ar);
        document.hero.title = "Overridden".into();
        store
            .save_site_content(Language::Ar, &document)
            .expect("save must succeed");

        let restored = store.reset_to_default(Language::Ar).expect("reset must succeed");

        assert_eq!(restored, store.default_content(Language::Ar));
        assert_eq!(store.site_content(Language::Ar), restored);
    }

    #[rstest]
    fn update_section_touches_only_that_section(store: SiteContentStore) {
        let before = store.site_content(Language::En);
        let mut hero = before.hero.clone();
        hero.title = "Replaced".into();

        let after = store
            .update_section(Language::En, SectionContent::Hero(hero.clone()))
            .expect("update must succeed");

        assert_eq!(after.hero, hero);
        assert_eq!(after.header, before.header);
        assert_eq!(after.features, before.features);
        assert_eq!(after.footer, before.footer);
        assert_eq!(store.site_content(Language::En), after);
    }

    #[rstest]
    fn languages_are_persisted_independently(store: SiteContentStore) {
        let mut english = store.default_content(Language::En);
        english.hero.title = "English only".into();
        store
            .save_site_content(Language::En, &english)
            .expect("save must succeed");

        assert_eq!(
            store.site_content(Language::Ar),
            store.default_content(Language::Ar),
        );
    }

    #[rstest]
    fn quota_failures_propagate_from_save() {
        let backend = Arc::new(InMemoryKeyValueStore::with_capacity_limit(8));
        let store = SiteContentStore::new(backend);
        let document = store.default_content(Language::En);

        let result = store.save_site_content(Language::En, &document);

        assert!(matches!(
            result,
            Err(SiteContentStoreError::Storage(
                KeyValueStoreError::CapacityExceeded { .. }
            )),
        ));
    }

    #[rstest]
    fn default_section_matches_the_document_section(store: SiteContentStore) {
        let document = store.default_content(Language::En);
        let section = store.default_section(Language::En, SectionName::Pricing);
        assert_eq!(section, document.section(SectionName::Pricing));
    }
}
