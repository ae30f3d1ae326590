//! Outbound adapters: the HTTP client and the directory storage adapter.

pub mod http;
pub mod storage;
