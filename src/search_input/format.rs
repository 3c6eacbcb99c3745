use crate::query::SearchQuery;

/// Render a structured query back into search-box text.
///
/// Inverse of `parse` at the multiset level: spaces become underscores again
/// and the prefix markers are restored. Whitespace from the original input
/// is not reproduced.
pub fn format(query: &SearchQuery) -> String {
    let tags = &query.tag_query;

    let mut parts: Vec<String> =
        Vec::with_capacity(tags.must.len() + tags.should.len() + tags.must_not.len());

    parts.extend(tags.must.iter().map(|tag| tag.replace(' ', "_")));
    parts.extend(tags.should.iter().map(|tag| format!("~{}", tag.replace(' ', "_"))));
    parts.extend(tags.must_not.iter().map(|tag| format!("-{}", tag.replace(' ', "_"))));

    parts.join(" ").trim().to_string()
}

/// Escape a single tag for use in search-box text.
pub fn escape_tag(tag: &str) -> String {
    tag.trim().replace(' ', "_")
}
