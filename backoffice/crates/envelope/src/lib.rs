//! Wire primitives shared by every typed back-office API function.
//!
//! The backend wraps every successful response in a JSON envelope carrying a
//! `data` field, an optional human-readable `message`, and, for collection
//! endpoints, optional page metadata. List endpoints accept a small set of
//! query parameters that the client passes through verbatim; no pagination
//! logic lives on the client side.

use serde::{Deserialize, Serialize};

/// Page metadata returned by collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records matching the query.
    pub total: u64,
    /// One-based page number this response covers.
    pub page: u32,
    /// Page size the server applied.
    pub per_page: u32,
}

/// Standard success envelope: `data` plus optional `message` and `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Typed payload of the operation.
    pub data: T,
    /// Optional server-supplied notice (mutations often carry one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Page metadata, present on collection responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Envelope<T> {
    /// Wrap a payload without message or page metadata.
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
            meta: None,
        }
    }

    /// Attach a server notice to the envelope.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach page metadata to the envelope.
    #[must_use]
    pub const fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Validation failures raised when constructing a [`ListQuery`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListQueryValidationError {
    /// Page numbers are one-based; zero never addresses a page.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A zero page size would make every collection response empty.
    #[error("perPage must be at least 1")]
    ZeroPerPage,
}

/// Pass-through query parameters accepted by collection endpoints.
///
/// Every field is optional; omitted fields are simply not serialized into
/// the query string, leaving the server's defaults in charge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    page: Option<u32>,
    per_page: Option<u32>,
    search: Option<String>,
    status: Option<String>,
}

impl ListQuery {
    /// Query with no parameters set; the server applies its defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            per_page: None,
            search: None,
            status: None,
        }
    }

    /// Request a specific one-based page.
    ///
    /// # Errors
    ///
    /// Returns [`ListQueryValidationError::ZeroPage`] when `page` is zero.
    pub fn with_page(mut self, page: u32) -> Result<Self, ListQueryValidationError> {
        if page == 0 {
            return Err(ListQueryValidationError::ZeroPage);
        }
        self.page = Some(page);
        Ok(self)
    }

    /// Request a specific page size.
    ///
    /// # Errors
    ///
    /// Returns [`ListQueryValidationError::ZeroPerPage`] when `per_page` is
    /// zero.
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self, ListQueryValidationError> {
        if per_page == 0 {
            return Err(ListQueryValidationError::ZeroPerPage);
        }
        self.per_page = Some(per_page);
        Ok(self)
    }

    /// Filter by a free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by a server-defined status value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Render the set parameters as query-string pairs, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("perPage", per_page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }

    /// True when no parameter is set and the query string can be omitted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.per_page.is_none()
            && self.search.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for envelope serialization and list query rendering.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn envelope_round_trips_message_and_meta() {
        let envelope = Envelope::new(vec![1, 2, 3])
            .with_message("created")
            .with_meta(PageMeta {
                total: 3,
                page: 1,
                per_page: 25,
            });
        let value = serde_json::to_value(&envelope).expect("envelope serializes");
        assert_eq!(
            value,
            json!({
                "data": [1, 2, 3],
                "message": "created",
                "meta": {"total": 3, "page": 1, "perPage": 25},
            })
        );
    }

    #[rstest]
    fn envelope_omits_absent_optional_fields() {
        let value = serde_json::to_value(Envelope::new("x")).expect("envelope serializes");
        assert_eq!(value, json!({"data": "x"}));
    }

    #[rstest]
    fn envelope_deserializes_bare_data() {
        let envelope: Envelope<u32> =
            serde_json::from_value(json!({"data": 7})).expect("envelope parses");
        assert_eq!(envelope.data, 7);
        assert!(envelope.message.is_none());
        assert!(envelope.meta.is_none());
    }

    #[rstest]
    fn list_query_renders_pairs_in_stable_order() {
        let query = ListQuery::new()
            .with_page(2)
            .expect("page is valid")
            .with_per_page(50)
            .expect("perPage is valid")
            .with_search("latte")
            .with_status("active");
        assert_eq!(
            query.query_pairs(),
            vec![
                ("page", "2".to_owned()),
                ("perPage", "50".to_owned()),
                ("search", "latte".to_owned()),
                ("status", "active".to_owned()),
            ]
        );
    }

    #[rstest]
    fn empty_list_query_renders_no_pairs() {
        let query = ListQuery::new();
        assert!(query.is_empty());
        assert!(query.query_pairs().is_empty());
    }

    #[rstest]
    #[case(ListQuery::new().with_page(0), ListQueryValidationError::ZeroPage)]
    #[case(ListQuery::new().with_per_page(0), ListQueryValidationError::ZeroPerPage)]
    fn zero_values_are_rejected(
        #[case] result: Result<ListQuery, ListQueryValidationError>,
        #[case] expected: ListQueryValidationError,
    ) {
        assert_eq!(result, Err(expected));
    }
}
