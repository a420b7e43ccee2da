use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Error fetching content from '{url}' : '{source}'")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    /// URL whose fetch failed, if this is a network failure
    pub fn failed_url(&self) -> Option<&str> {
        match self {
            ScrapeError::Fetch { url, .. } => Some(url),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
