//! dszoo-core — Data Structure Zoo core library.
//!
//! This crate exposes the catalogue, the keyword normalizer and the search
//! cache, plus the shared [`Descriptor`] type.
//!
//! # Architecture
//!
//! ```text
//! Catalogue ──► Normalizer ──► SearchCache ──► front end
//! ```
//!
//! The cache is built once from a borrowed descriptor slice and is read-only
//! afterwards, so it can be shared by reference without locking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod search;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use normalizer::keywords_for;
pub use search::{SearchCache, SearchOptions};
pub use types::Descriptor;
