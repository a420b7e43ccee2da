use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// One currently-showing movie extracted from a listing card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    /// Movie title, trimmed
    pub title: Option<String>,

    /// Absolute link to the movie detail page
    pub movie_link: Option<String>,

    /// Absolute booking link; records without one are dropped by the pipeline
    pub tickets_link: Option<String>,
}

impl MovieRecord {
    /// Create a new movie record
    pub fn new(
        title: Option<String>,
        movie_link: Option<String>,
        tickets_link: Option<String>,
    ) -> Self {
        Self {
            title,
            movie_link,
            tickets_link,
        }
    }

    /// Whether the movie can currently be booked
    pub fn is_bookable(&self) -> bool {
        self.tickets_link.is_some()
    }
}

/// Bookable movies found on one listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    /// Listing page the records came from
    pub url: String,

    /// Records in card order
    pub data: Vec<MovieRecord>,
}

impl ResultSet {
    pub fn new(url: String, data: Vec<MovieRecord>) -> Self {
        Self { url, data }
    }

    /// Render as JSON indented with four spaces
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
