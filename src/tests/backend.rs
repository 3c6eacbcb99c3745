use crate::backend::{BackendError, PageInfo, SearchBackend, SearchPage};
use crate::query::{Cursor, PaginationMode, SearchQuery, DEFAULT_KEYSET_LIMIT};
use crate::search_input;

struct Item {
    id: String,
    score: f64,
    tags: Vec<String>,
}

fn item(id: &str, score: f64, tags: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        score,
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

/// Reference backend for the collaborator seam: filters by tag constraints
/// and paginates in both cursor modes over a fixed item list.
struct MemoryBackend {
    items: Vec<Item>,
}

impl MemoryBackend {
    fn matched(&self, query: &SearchQuery) -> Vec<&Item> {
        let tags = &query.tag_query;

        self.items
            .iter()
            .filter(|item| {
                let has = |tag: &String| item.tags.iter().any(|have| have == tag);

                tags.must.iter().all(has)
                    && !tags.must_not.iter().any(has)
                    && (tags.should.is_empty() || tags.should.iter().any(has))
            })
            .collect()
    }
}

impl SearchBackend for MemoryBackend {
    type Item = String;

    fn search(&self, query: &SearchQuery) -> Result<SearchPage<String>, BackendError> {
        let matched = self.matched(query);

        match &query.cursor {
            Cursor::Offset { page, page_size } => {
                let size = page_size.unwrap_or(2) as usize;
                let start = *page as usize * size;

                let items: Vec<String> = matched
                    .iter()
                    .skip(start)
                    .take(size)
                    .map(|item| item.id.clone())
                    .collect();
                let total_pages = (matched.len() as u64 + size as u64 - 1) / size as u64;

                Ok(SearchPage {
                    items,
                    page_info: PageInfo::Offset { total_pages },
                })
            }
            Cursor::Keyset { last_id, limit, .. } => {
                let start = match last_id {
                    Some(id) => matched
                        .iter()
                        .position(|item| &item.id == id)
                        .map_or(0, |pos| pos + 1),
                    None => 0,
                };
                let size = limit.unwrap_or(DEFAULT_KEYSET_LIMIT) as usize;

                let window: Vec<&Item> = matched.iter().skip(start).take(size).copied().collect();
                let has_next = start + window.len() < matched.len();
                let next_cursor = window.last().filter(|_| has_next).map(|item| Cursor::Keyset {
                    last_id: Some(item.id.clone()),
                    last_score: Some(item.score),
                    limit: Some(size as u64),
                });

                Ok(SearchPage {
                    items: window.iter().map(|item| item.id.clone()).collect(),
                    page_info: PageInfo::Keyset {
                        has_next,
                        next_cursor,
                    },
                })
            }
        }
    }
}

fn backend() -> MemoryBackend {
    MemoryBackend {
        items: vec![
            item("p1", 9.0, &["cat", "art"]),
            item("p2", 8.0, &["cat", "nsfw"]),
            item("p3", 7.0, &["cat", "art"]),
            item("p4", 6.0, &["dog", "art"]),
            item("p5", 5.0, &["cat", "art", "scenery"]),
        ],
    }
}

#[test]
fn test_parsed_query_drives_offset_search() {
    let query = search_input::parse("cat -nsfw");
    let page = backend().search(&query).unwrap();

    assert_eq!(page.items, vec!["p1", "p3"]);
    assert_eq!(page.page_info, PageInfo::Offset { total_pages: 2 });
}

#[test]
fn test_offset_second_page() {
    let query = SearchQuery {
        cursor: Cursor::Offset {
            page: 1,
            page_size: Some(2),
        },
        ..search_input::parse("cat -nsfw")
    };
    let page = backend().search(&query).unwrap();

    assert_eq!(page.items, vec!["p5"]);
}

#[test]
fn test_should_constraints_widen_matches() {
    let query = search_input::parse("~scenery ~nsfw");
    let page = backend().search(&query).unwrap();

    assert_eq!(page.items, vec!["p2", "p5"]);
}

#[test]
fn test_keyset_walk_follows_next_cursor() {
    let be = backend();
    let mut query = SearchQuery {
        cursor: Cursor::Keyset {
            last_id: None,
            last_score: None,
            limit: Some(1),
        },
        ..search_input::parse("cat -nsfw")
    };

    let mut seen = Vec::new();
    loop {
        let page = be.search(&query).unwrap();
        seen.extend(page.items);

        match page.page_info {
            PageInfo::Keyset {
                has_next: true,
                next_cursor: Some(cursor),
            } => query = SearchQuery { cursor, ..query },
            PageInfo::Keyset { .. } => break,
            PageInfo::Offset { .. } => unreachable!(),
        }
    }

    assert_eq!(seen, vec!["p1", "p3", "p5"]);
}

#[test]
fn test_mode_switch_starts_keyset_from_the_top() {
    let be = backend();
    let paged = SearchQuery {
        cursor: Cursor::Offset {
            page: 1,
            page_size: Some(2),
        },
        ..search_input::parse("cat -nsfw")
    };

    let switched = paged.with_pagination_mode(PaginationMode::Keyset);
    let page = be.search(&switched).unwrap();

    // Fresh keyset cursor: no last_id, default limit, so the walk restarts.
    assert_eq!(page.items, vec!["p1", "p3", "p5"]);
}

#[test]
fn test_queries_are_reusable_snapshots() {
    let be = backend();
    let query = search_input::parse("cat");

    let first = be.search(&query).unwrap();
    let second = be.search(&query).unwrap();
    assert_eq!(first.items, second.items);
}
