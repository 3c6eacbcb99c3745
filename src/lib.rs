//! Search-query micro-language for tag-based catalogs.
//!
//! Three pieces, composable as a pipeline and usable on their own:
//! - [`search_input`] turns search-box text like `artist -nsfw ~scenery`
//!   into a [`query::SearchQuery`] and back.
//! - [`urlquery`] round-trips a query through URL query-string encoding so
//!   searches can be shared and bookmarked as links.
//! - [`query::Cursor`] carries pagination state in one of two mutually
//!   exclusive modes, offset or keyset.
//!
//! Parsing, formatting, and the URL codec never fail: malformed input
//! degrades to documented defaults so a shared link always loads.
//! Rejections are the business of the [`backend::SearchBackend`] that runs
//! the query, not of this crate.

pub mod backend;
pub mod cli;
pub mod config;
pub mod query;
pub mod search_input;
pub mod urlquery;

#[cfg(test)]
mod tests;

pub use query::{Cursor, PaginationMode, SearchQuery, TagQuery, DEFAULT_KEYSET_LIMIT};

/// Split a comma- or whitespace-separated tag list into clean tags.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .flat_map(|value| value.split_whitespace())
        .map(|tag| tag.to_string())
        .collect()
}
