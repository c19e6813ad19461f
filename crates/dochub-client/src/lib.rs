//! # dochub-client
//!
//! HTTP implementation of the [`dochub_entity::DocumentRepository`] trait
//! over the REST Document API.
//!
//! This layer owns transport concerns only: request construction, response
//! envelope normalization (`_id` vs `id`, `data.documents` vs bare
//! `documents`), timeouts, and error mapping. It never caches and never
//! retries — both are the caller's responsibility.

pub mod http;
pub mod wire;

pub use http::HttpDocumentRepository;
