use homedir::my_home;
use serde::{Deserialize, Serialize};

use crate::query::PaginationMode;

const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_SEARCH_PATH: &str = "/posts";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path prefix used when building shareable hrefs.
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// When set, offset links built by the CLI carry this page size unless
    /// `--page-size` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,

    /// Pagination mode applied when no `--mode` flag is given.
    #[serde(default)]
    pub default_mode: PaginationMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            page_size: None,
            default_mode: PaginationMode::Offset,
        }
    }
}

fn default_search_path() -> String {
    DEFAULT_SEARCH_PATH.to_string()
}

impl Config {
    fn validate(&mut self) {
        if self.search_path.is_empty() {
            self.search_path = DEFAULT_SEARCH_PATH.to_string();
        }

        if self.page_size == Some(0) {
            log::warn!("page_size 0 makes no sense, ignoring it");
            self.page_size = None;
        }
    }

    pub fn load_with(base_path: &str) -> Self {
        let path = format!("{base_path}/{CONFIG_FILE}");

        // create new if does not exist
        if !std::path::Path::new(&path).exists() {
            std::fs::create_dir_all(base_path).expect("could not create config directory");
            std::fs::write(&path, serde_yml::to_string(&Self::default()).unwrap())
                .expect("could not write default config");
        }

        let config_str = std::fs::read_to_string(&path).expect("config file is not readable");
        let mut config: Self = serde_yml::from_str(&config_str).expect("config is malformed");

        config.validate();

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config).unwrap() {
            let _ = std::fs::write(&path, serde_yml::to_string(&config).unwrap());
        }

        config
    }

    pub fn load() -> Self {
        Self::load_with(&base_path())
    }
}

fn base_path() -> String {
    std::env::var("TSQ_BASE_PATH").unwrap_or_else(|_| {
        let home = my_home()
            .expect("could not determine home directory")
            .expect("home directory path is empty");
        format!("{}/.config/tsq", home.to_string_lossy())
    })
}
