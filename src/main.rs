use clap::Parser;

use tsq::{
    cli,
    config::Config,
    parse_tags,
    query::{Cursor, PaginationMode, SearchQuery},
    search_input, urlquery,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Parse { text, compact } => {
            print_query(&search_input::parse(&text), compact)?;
        }

        cli::Command::Format { query } => {
            let raw = match query {
                Some(raw) => raw,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let query: SearchQuery = serde_json::from_str(&raw)?;

            println!("{}", search_input::format(&query));
        }

        cli::Command::Encode {
            text,
            tags,
            mode,
            page,
            page_size,
            last_id,
            last_score,
            limit,
            href,
        } => {
            let config = Config::load();
            tracing::debug!("using search path {}", config.search_path);

            let query = build_query(
                &config, text, tags, mode, page, page_size, last_id, last_score, limit,
            );

            if href {
                println!("{}", urlquery::search_href(&config.search_path, &query));
            } else {
                println!("{}", urlquery::serialize(&query));
            }
        }

        cli::Command::Decode { query_string, text } => {
            let query = urlquery::deserialize(&query_string);

            if text {
                println!("{}", search_input::format(&query));
            } else {
                print_query(&query, false)?;
            }
        }
    }

    Ok(())
}

fn build_query(
    config: &Config,
    text: Option<String>,
    tags: Option<String>,
    mode: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
    last_id: Option<String>,
    last_score: Option<f64>,
    limit: Option<u64>,
) -> SearchQuery {
    let mut query = match text {
        Some(text) => search_input::parse(&text),
        None => SearchQuery::default(),
    };

    if let Some(tags) = tags {
        query.tag_query.must.extend(parse_tags(&tags));
    }

    let mode = mode
        .map(|raw| PaginationMode::parse_lenient(&raw))
        .unwrap_or(config.default_mode);
    let query = query.with_pagination_mode(mode);

    // Flags override whatever the zero-state cursor started with.
    let cursor = match query.cursor.clone() {
        Cursor::Offset {
            page: current,
            page_size: current_size,
        } => Cursor::Offset {
            page: page.unwrap_or(current),
            page_size: page_size.or(config.page_size).or(current_size),
        },
        Cursor::Keyset {
            last_id: current_id,
            last_score: current_score,
            limit: current_limit,
        } => Cursor::Keyset {
            last_id: last_id.or(current_id),
            last_score: last_score.or(current_score),
            limit: limit.or(current_limit),
        },
    };

    SearchQuery { cursor, ..query }
}

fn print_query(query: &SearchQuery, compact: bool) -> anyhow::Result<()> {
    if compact {
        println!("{}", serde_json::to_string(query)?);
    } else {
        println!("{}", serde_json::to_string_pretty(query)?);
    }

    Ok(())
}
