//! Scrapes movie listing pages for currently-showing movies that can be booked.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use pipeline::Scraper;
pub use results::{MovieRecord, ResultSet};

/// Scrape one listing page with the default configuration
pub async fn run(url: &str) -> Result<ResultSet> {
    Scraper::new(&ScraperConfig::default())?.run(url).await
}
