use reqwest::Client;
use std::time::Duration;

use crate::error::{Result, ScrapeError};
use crate::parsers::{Document, parse_document};

/// Fetches listing pages and parses them into documents
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher whose requests are bounded by `timeout_secs`
    pub fn new(timeout_secs: u64, user_agent: Option<&str>) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let mut builder = Client::builder().timeout(timeout).connect_timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder
            .build()
            .map_err(|e| ScrapeError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// GET `url` and parse the body
    ///
    /// Any status code is accepted; only transport failures are errors.
    pub async fn fetch(&self, url: &str) -> Result<Document> {
        if url.is_empty() {
            return Err(ScrapeError::InvalidArgument(
                "fetch(): url must not be empty".to_string(),
            ));
        }

        ::log::debug!("GET {} (timeout {:?})", url, self.timeout);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| fetch_error(url, source))?;
        ::log::debug!("{} responded with {}", url, response.status());

        let body = response
            .text()
            .await
            .map_err(|source| fetch_error(url, source))?;

        Ok(parse_document(&body))
    }
}

fn fetch_error(url: &str, source: reqwest::Error) -> ScrapeError {
    ::log::error!("Failed to fetch {}: {}", url, source);
    ScrapeError::Fetch {
        url: url.to_string(),
        source,
    }
}
