//! Seam to the search service that actually runs structured queries.
//!
//! This crate only shapes requests; executing them, mapping transport
//! failures, and scoring results is the backend's business. The types here
//! pin down the values both sides exchange, so a query produced anywhere in
//! this crate can be handed over as-is.

use crate::query::{Cursor, SearchQuery};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("unexpected error: {0:?}")]
    Other(#[from] anyhow::Error),
}

/// One page of results plus what is needed to fetch the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

/// Pagination metadata, shaped per cursor mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PageInfo {
    Offset {
        total_pages: u64,
    },
    Keyset {
        has_next: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next_cursor: Option<Cursor>,
    },
}

pub trait SearchBackend: Send + Sync {
    type Item;

    fn search(&self, query: &SearchQuery) -> Result<SearchPage<Self::Item>, BackendError>;
}
