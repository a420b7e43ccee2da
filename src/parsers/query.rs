//! Lookups over parsed documents.
//!
//! Every lookup collapses its matches into [`Matches`]: nothing, exactly one
//! match, or several matches in document order.

use scraper::{ElementRef, Selector};

/// Read-only view of one element of a [`Document`](super::Document)
pub type Node<'a> = ElementRef<'a>;

/// Outcome of a lookup: no match, a single unwrapped match, or many matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matches<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Matches<T> {
    /// Collapse a list of matches, unwrapping a single element
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Matches::None,
            1 => items.pop().map_or(Matches::None, Matches::One),
            _ => Matches::Many(items),
        }
    }

    /// The match, if there was exactly one
    pub fn one(self) -> Option<T> {
        match self {
            Matches::One(item) => Some(item),
            _ => None,
        }
    }

    /// All matches in order, treating `None` as empty
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Matches::None => Vec::new(),
            Matches::One(item) => vec![item],
            Matches::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Matches::None => 0,
            Matches::One(_) => 1,
            Matches::Many(items) => items.len(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Matches::None)
    }
}

/// Descendants of `node` matching `selector`, in document order
pub fn select<'a>(node: Option<Node<'a>>, selector: &Selector) -> Matches<Node<'a>> {
    node.map_or(Matches::None, |n| Matches::from_vec(n.select(selector).collect()))
}

/// Follows `path` down from `node`, one level per selector
///
/// Each step keeps the element children matching that step's selector. All
/// nodes of a step sit at the same depth, so the result stays in document
/// order.
pub fn select_path<'a>(node: Option<Node<'a>>, path: &[Selector]) -> Matches<Node<'a>> {
    let Some(node) = node else {
        return Matches::None;
    };

    let mut current = vec![node];
    for selector in path {
        current = current
            .iter()
            .flat_map(|n| n.children().filter_map(ElementRef::wrap))
            .filter(|c| selector.matches(c))
            .collect();
        if current.is_empty() {
            return Matches::None;
        }
    }
    Matches::from_vec(current)
}

/// Value of attribute `name` on `node`
pub fn attr<'a>(node: Option<Node<'a>>, name: &str) -> Option<&'a str> {
    node.and_then(|n| n.value().attr(name))
}

/// Element children of `node`, collapsed like a query result
pub fn children(node: Option<Node<'_>>) -> Matches<Node<'_>> {
    node.map_or(Matches::None, |n| {
        Matches::from_vec(n.children().filter_map(ElementRef::wrap).collect())
    })
}
