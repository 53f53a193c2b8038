use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the four input lists and the output report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    #[serde(default = "default_user_agents_file")]
    pub user_agents_file: PathBuf,

    #[serde(default = "default_proxies_file")]
    pub proxies_file: PathBuf,

    #[serde(default = "default_base_pages_file")]
    pub base_pages_file: PathBuf,

    #[serde(default = "default_compare_pages_file")]
    pub compare_pages_file: PathBuf,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            user_agents_file: default_user_agents_file(),
            proxies_file: default_proxies_file(),
            base_pages_file: default_base_pages_file(),
            compare_pages_file: default_compare_pages_file(),
            output_file: default_output_file(),
        }
    }
}

fn default_user_agents_file() -> PathBuf {
    PathBuf::from("resources/user_agents.txt")
}

fn default_proxies_file() -> PathBuf {
    PathBuf::from("resources/proxies.txt")
}

fn default_base_pages_file() -> PathBuf {
    PathBuf::from("resources/base_pages.txt")
}

fn default_compare_pages_file() -> PathBuf {
    PathBuf::from("resources/compare_pages.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("comparison.xlsx")
}
