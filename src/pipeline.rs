use crate::config::ScraperConfig;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::parsers::extract_movies;
use crate::results::ResultSet;
use crate::utils::normalize_base_url;

/// Scrapes listing pages into result sets, one page at a time
#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: Fetcher,
    base_url: String,
}

impl Scraper {
    /// Create a scraper from configuration
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: Fetcher::new(config.timeout_secs, config.user_agent.as_deref())?,
            base_url: normalize_base_url(&config.base_url)?,
        })
    }

    /// Fetch one listing page and extract its bookable movies
    pub async fn run(&self, url: &str) -> Result<ResultSet> {
        ::log::info!("Scraping {}", url);

        let document = self.fetcher.fetch(url).await?;
        let data = extract_movies(&document, &self.base_url);

        ::log::info!("Found {} bookable movies at {}", data.len(), url);
        Ok(ResultSet::new(url.to_string(), data))
    }

    /// Scrape each URL in order, handing every result to `emit` as soon as it
    /// is ready
    ///
    /// Stops at the first failure; URLs after it are not fetched. Returns the
    /// number of pages emitted.
    pub async fn run_all<I, S, F>(&self, urls: I, mut emit: F) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(ResultSet),
    {
        let mut emitted = 0;
        for url in urls {
            let result = self.run(url.as_ref()).await?;
            emit(result);
            emitted += 1;
        }
        Ok(emitted)
    }
}
