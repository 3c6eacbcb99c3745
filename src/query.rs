use serde::{Deserialize, Serialize};

/// Limit a fresh keyset cursor starts with when none was asked for.
pub const DEFAULT_KEYSET_LIMIT: u64 = 20;

/// Tag constraints of a search, grouped by how they bind.
///
/// Each list keeps input order and duplicates; downstream scoring may weight
/// repeated tags, so no uniqueness pass happens here. Tags are stored with
/// spaces — the underscore form only exists in search-box text and URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagQuery {
    #[serde(default)]
    pub must: Vec<String>,
    #[serde(default)]
    pub should: Vec<String>,
    #[serde(default)]
    pub must_not: Vec<String>,
}

impl TagQuery {
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }
}

/// Pagination mode discriminant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    #[default]
    Offset,
    Keyset,
}

impl PaginationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaginationMode::Offset => "offset",
            PaginationMode::Keyset => "keyset",
        }
    }

    /// Lenient read of a mode parameter: anything but the literal `keyset`
    /// falls back to offset.
    pub fn parse_lenient(value: &str) -> Self {
        if value == "keyset" {
            PaginationMode::Keyset
        } else {
            PaginationMode::Offset
        }
    }
}

/// Pagination state embedded in a search query.
///
/// Exactly one mode is active at a time; the inactive mode has no fields
/// anywhere to leak through. Switching modes goes through
/// [`Cursor::for_mode`], which never carries anything over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Cursor {
    Offset {
        #[serde(default)]
        page: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        page_size: Option<u64>,
    },
    Keyset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_score: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
    },
}

impl Cursor {
    /// Fresh zero state for the requested mode.
    pub fn for_mode(mode: PaginationMode) -> Self {
        match mode {
            PaginationMode::Offset => Cursor::Offset {
                page: 0,
                page_size: None,
            },
            PaginationMode::Keyset => Cursor::Keyset {
                last_id: None,
                last_score: None,
                limit: Some(DEFAULT_KEYSET_LIMIT),
            },
        }
    }

    pub fn mode(&self) -> PaginationMode {
        match self {
            Cursor::Offset { .. } => PaginationMode::Offset,
            Cursor::Keyset { .. } => PaginationMode::Keyset,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::for_mode(PaginationMode::Offset)
    }
}

/// A complete, self-consistent search snapshot.
///
/// Immutable value data: every transformation returns a new query, so a
/// snapshot handed to the backend stays valid for independent, idempotent
/// requests. `text_query` is the free-text remainder that tag constraints
/// cannot express — it never gets merged into the tag lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub tag_query: TagQuery,
    #[serde(default)]
    pub text_query: String,
    #[serde(default)]
    pub cursor: Cursor,
}

impl SearchQuery {
    /// Query requiring every given tag.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchQuery {
            tag_query: TagQuery {
                must: tags.into_iter().map(Into::into).collect(),
                ..TagQuery::default()
            },
            ..SearchQuery::default()
        }
    }

    /// Switch pagination mode.
    ///
    /// Requesting the mode already in effect is a no-op that returns the
    /// query unchanged — pagination progress survives. An actual switch
    /// replaces the cursor with the new mode's zero state and leaves every
    /// other field alone.
    pub fn with_pagination_mode(self, mode: PaginationMode) -> Self {
        if self.cursor.mode() == mode {
            return self;
        }

        SearchQuery {
            cursor: Cursor::for_mode(mode),
            ..self
        }
    }
}
