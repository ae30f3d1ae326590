//! Core client library for the loyalty-card back-office console.
//!
//! Two components carry all the non-trivial logic:
//!
//! - [`outbound::http::ApiClient`]: the single point of HTTP access to the
//!   backend. It attaches the bearer token held by an injected
//!   [`domain::SessionContext`], exposes one typed function per backend
//!   operation, and normalizes every failure into the one
//!   [`domain::ApiError`] shape the UI layer handles.
//! - [`sitecontent::SiteContentStore`]: derives default marketing copy from
//!   embedded translation bundles, merges persisted overrides on top by
//!   stable item identity, and exposes controlled read/write operations per
//!   language.
//!
//! Both sit behind the [`domain::ports::KeyValueStore`] port so tests can
//! substitute an in-memory store for the client profile storage.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod sitecontent;
