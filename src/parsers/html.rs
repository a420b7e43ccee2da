use scraper::Html;

/// Parsed page. Malformed markup is recovered by the parser, never rejected.
pub type Document = Html;

/// Parses a response body into a navigable document
pub fn parse_document(body: &str) -> Document {
    let doc = Html::parse_document(body);

    if !doc.errors.is_empty() {
        ::log::debug!("HTML parser recovered from {} errors", doc.errors.len());
    }

    doc
}
