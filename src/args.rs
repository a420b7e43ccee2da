use bms_scrape::{Result, ScraperConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bms-scrape")]
#[command(about = "Lists currently-showing movies with open bookings")]
#[command(version)]
pub struct Args {
    /// Listing pages to scrape (defaults to the configured URLs)
    pub urls: Vec<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Origin prepended to root-relative links
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Args {
    /// Build the effective configuration: file or defaults, then flags
    pub fn into_config(self) -> Result<ScraperConfig> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };

        if !self.urls.is_empty() {
            config.urls = self.urls;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }
}
