//! URL query-string codec for shareable search links.
//!
//! Serialization enumerates the keys in a fixed order (`must`, `should`,
//! `must_not`, `q`, `mode`, then the active cursor's fields) so equal
//! queries always produce equal strings. Deserialization never fails:
//! shared links are allowed to be old or hand-edited, so malformed and
//! missing parameters degrade to defaults instead of erroring.

use crate::query::{Cursor, PaginationMode, SearchQuery, TagQuery};
use std::borrow::Cow;
use url::form_urlencoded;

/// Encode a query as a URL query string (no leading `?`).
pub fn serialize(query: &SearchQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    let tags = &query.tag_query;

    for (key, values) in [
        ("must", &tags.must),
        ("should", &tags.should),
        ("must_not", &tags.must_not),
    ] {
        // One occurrence per value; an empty list contributes no key at all.
        for value in values {
            params.append_pair(key, value);
        }
    }

    if !query.text_query.is_empty() {
        params.append_pair("q", &query.text_query);
    }

    params.append_pair("mode", query.cursor.mode().as_str());

    match &query.cursor {
        Cursor::Offset { page, page_size } => {
            // Page zero is the implicit default; leaving it out keeps
            // shared links canonical.
            if *page > 0 {
                params.append_pair("page", &page.to_string());
            }
            if let Some(size) = page_size {
                params.append_pair("page_size", &size.to_string());
            }
        }
        Cursor::Keyset {
            last_id,
            last_score,
            limit,
        } => {
            if let Some(id) = last_id {
                params.append_pair("last_id", id);
            }
            if let Some(score) = last_score {
                params.append_pair("last_score", &score.to_string());
            }
            if let Some(limit) = limit {
                params.append_pair("limit", &limit.to_string());
            }
        }
    }

    params.finish()
}

/// Decode a URL query string (with or without the leading `?`) into a
/// query. Never fails.
pub fn deserialize(input: &str) -> SearchQuery {
    let raw = input.strip_prefix('?').unwrap_or(input);
    let pairs: Vec<(Cow<str>, Cow<str>)> = form_urlencoded::parse(raw.as_bytes()).collect();

    let tag_query = TagQuery {
        must: read_tag_values(&pairs, "must"),
        should: read_tag_values(&pairs, "should"),
        must_not: read_tag_values(&pairs, "must_not"),
    };

    let text_query = first_value(&pairs, "q").unwrap_or_default().to_string();

    let mode = first_value(&pairs, "mode")
        .map(PaginationMode::parse_lenient)
        .unwrap_or_default();

    let cursor = match mode {
        PaginationMode::Offset => Cursor::Offset {
            page: read_page(&pairs),
            page_size: read_u64(&pairs, "page_size"),
        },
        PaginationMode::Keyset => Cursor::Keyset {
            last_id: first_value(&pairs, "last_id").map(str::to_string),
            last_score: read_f64(&pairs, "last_score"),
            limit: read_u64(&pairs, "limit"),
        },
    };

    SearchQuery {
        tag_query,
        text_query,
        cursor,
    }
}

/// Build a shareable link for the given path.
pub fn search_href(pathname: &str, query: &SearchQuery) -> String {
    let query_string = serialize(query);

    if query_string.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{query_string}")
    }
}

fn first_value<'a>(pairs: &'a [(Cow<'a, str>, Cow<'a, str>)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
}

/// Tag values for one key. The repeated-parameter form wins; a key that
/// appears only once is read as a legacy comma-separated value. Empty
/// values are dropped either way.
fn read_tag_values(pairs: &[(Cow<str>, Cow<str>)], key: &str) -> Vec<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(k, v)| k.as_ref() == key && !v.is_empty())
        .map(|(_, v)| v.as_ref())
        .collect();

    if values.len() > 1 {
        return values.into_iter().map(str::to_string).collect();
    }

    // Backward compatibility with old single-parameter CSV links.
    match values.first() {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn read_page(pairs: &[(Cow<str>, Cow<str>)]) -> u64 {
    let Some(raw) = first_value(pairs, "page") else {
        return 0;
    };

    match raw.parse::<u64>() {
        Ok(page) => page,
        Err(_) => {
            log::debug!("ignoring malformed page parameter {raw:?}");
            0
        }
    }
}

fn read_u64(pairs: &[(Cow<str>, Cow<str>)], key: &str) -> Option<u64> {
    let raw = first_value(pairs, key)?;

    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::debug!("ignoring malformed {key} parameter {raw:?}");
            None
        }
    }
}

fn read_f64(pairs: &[(Cow<str>, Cow<str>)], key: &str) -> Option<f64> {
    let raw = first_value(pairs, key)?;

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::debug!("ignoring malformed {key} parameter {raw:?}");
            None
        }
    }
}
