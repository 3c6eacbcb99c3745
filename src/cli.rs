use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse search-box text into a structured query
    Parse {
        /// Search-box text, e.g. "artist -nsfw ~scenery"
        #[clap(allow_hyphen_values = true)]
        text: String,

        /// Print compact JSON instead of pretty
        #[clap(long, default_value = "false")]
        compact: bool,
    },

    /// Render a structured query (JSON) back into search-box text
    Format {
        /// Query JSON; read from stdin when omitted
        query: Option<String>,
    },

    /// Encode a query as a URL query string or a full href
    Encode {
        /// Search-box text
        #[clap(allow_hyphen_values = true)]
        text: Option<String>,

        /// Comma- or space-separated tags, all added as must constraints
        #[clap(short = 'g', long)]
        tags: Option<String>,

        /// Pagination mode: offset or keyset
        #[clap(short, long)]
        mode: Option<String>,

        /// Page number (offset mode)
        #[clap(long)]
        page: Option<u64>,

        /// Page size (offset mode)
        #[clap(long)]
        page_size: Option<u64>,

        /// Last seen id (keyset mode)
        #[clap(long)]
        last_id: Option<String>,

        /// Last seen score (keyset mode)
        #[clap(long, allow_hyphen_values = true)]
        last_score: Option<f64>,

        /// Page limit (keyset mode)
        #[clap(long)]
        limit: Option<u64>,

        /// Print a full href using the configured search path
        #[clap(long, default_value = "false")]
        href: bool,
    },

    /// Decode a URL query string into a structured query
    Decode {
        /// Query string, with or without the leading '?'
        query_string: String,

        /// Print as search-box text instead of JSON
        #[clap(long, default_value = "false")]
        text: bool,
    },
}
