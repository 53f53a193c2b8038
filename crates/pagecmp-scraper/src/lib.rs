mod collector;
mod config;
mod extractor;
mod fetcher;

pub use collector::collect_all;
pub use config::{load_lines, load_page_specs, load_user_agents, ConfigError, PageSpec};
pub use extractor::extract;
pub use fetcher::{fetch, FetchError};
