//! Search-box micro-language.
//!
//! Grammar: tokens separated by whitespace. `token` is a must constraint,
//! `~token` a should constraint, `-token` a must-not constraint. Underscores
//! inside a token stand in for spaces. A bare `~` or `-` is a no-op.
//!
//! Behavior:
//! - Empty/whitespace input → empty query (not an error)
//! - Bare prefixes, prefixes over nothing but underscores → dropped
//! - Duplicate tags → kept, in input order
//! - The cursor always starts at the offset zero state

mod format;
mod lexer;

pub use format::{escape_tag, format};

use crate::query::{SearchQuery, TagQuery};
use lexer::Token;

/// Parse search-box text into a structured query. Never fails.
pub fn parse(input: &str) -> SearchQuery {
    let mut tag_query = TagQuery::default();

    for token in lexer::tokenize(input) {
        match token {
            Token::Must(tag) => tag_query.must.push(tag),
            Token::Should(tag) => tag_query.should.push(tag),
            Token::MustNot(tag) => tag_query.must_not.push(tag),
        }
    }

    SearchQuery {
        tag_query,
        ..SearchQuery::default()
    }
}
