use scraper::Selector;
use std::sync::LazyLock;

use crate::parsers::Document;
use crate::parsers::query::{Matches, Node, attr, children, select, select_path};
use crate::results::MovieRecord;
use crate::utils::absolute_link;

static CARDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[class='card-container']").unwrap());
static BOOK_BUTTON: LazyLock<[Selector; 1]> =
    LazyLock::new(|| [Selector::parse("div[class='book-button']").unwrap()]);
static DETAIL_ANCHOR: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        Selector::parse("div[class='detail']").unwrap(),
        Selector::parse("div[class='__name overflowEllipses']").unwrap(),
        Selector::parse("a").unwrap(),
    ]
});

/// Locates every movie card in the document
pub fn find_cards(document: &Document) -> Matches<Node<'_>> {
    select(Some(document.root_element()), &CARDS)
}

/// Root-relative booking link of a card, if booking is open
///
/// The book button wraps an anchor while booking is open and a plain `div`
/// placeholder otherwise. Any other shape yields nothing.
pub fn extract_tickets_link(card: Node<'_>) -> Option<&str> {
    let button = select_path(Some(card), &*BOOK_BUTTON).one()?;
    let child = children(Some(button)).one()?;

    // NOTE: tied to the site's current markup for a disabled button
    if child.value().name() == "div" {
        ::log::trace!("Book button is a placeholder, booking closed");
        return None;
    }

    attr(Some(child), "href")
}

/// Builds a record from one card. Missing pieces are left empty.
pub fn build_record(card: Node<'_>, base_url: &str) -> MovieRecord {
    let anchor = select_path(Some(card), &*DETAIL_ANCHOR).one();

    let title = attr(anchor, "title").map(|t| t.trim().to_string());
    let movie_link = attr(anchor, "href");
    let tickets_link = extract_tickets_link(card);

    MovieRecord::new(
        title,
        absolute_link(base_url, movie_link),
        absolute_link(base_url, tickets_link),
    )
}

/// Extracts the bookable movies of a listing page, in card order
pub fn extract_movies(document: &Document, base_url: &str) -> Vec<MovieRecord> {
    let cards = find_cards(document).into_vec();
    ::log::debug!("Found {} movie cards", cards.len());

    cards
        .into_iter()
        .map(|card| build_record(card, base_url))
        .filter(|record| {
            if !record.is_bookable() {
                ::log::debug!("Skipping {:?}: no booking link", record.title);
            }
            record.is_bookable()
        })
        .collect()
}
