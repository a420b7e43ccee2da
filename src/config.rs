use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::utils::normalize_base_url;

/// Configuration for the listing scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Origin prepended to the root-relative links found in cards
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Listing pages to scrape, in order
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            urls: default_urls(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the scraper relies on
    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://in.bookmyshow.com".to_string()
}

fn default_urls() -> Vec<String> {
    vec![
        "https://in.bookmyshow.com/bengaluru/movies/english".to_string(),
        "https://in.bookmyshow.com/chennai/movies/english".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    10
}
