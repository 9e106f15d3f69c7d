//! Sanity content store adapter.

mod documents;
mod queries;
mod sanity;

pub use sanity::{query_base_url, SanityContentRepository};
