pub mod cards;
pub mod html;
pub mod query;

#[cfg(test)]
mod tests;

pub use cards::{build_record, extract_movies, extract_tickets_link, find_cards};
pub use html::{Document, parse_document};
pub use query::{Matches, Node, attr, children, select, select_path};
