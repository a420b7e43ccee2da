use crate::parsers::html::parse_document;
use crate::parsers::query::{Matches, Node, attr, children, select, select_path};
use scraper::Selector;

#[cfg(test)]
mod unit_tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div id="list">
            <div class="item" id="first"><a href="/one" title=" One ">One</a></div>
            <div class="item" id="second"><a href="/two">Two</a></div>
            <div class="item wide" id="third"><span>3</span></div>
            <p class="item">not a div</p>
        </div>
        <div id="solo"><span class="only">x</span></div>
        <div id="empty"></div>
    </body></html>"#;

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    fn ids(matches: Matches<Node<'_>>) -> Vec<String> {
        matches
            .into_vec()
            .into_iter()
            .filter_map(|n| n.value().attr("id").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_no_matches_is_none() {
        let doc = parse_document(PAGE);
        let result = select(Some(doc.root_element()), &sel("section"));
        assert_eq!(result, Matches::None);
        assert!(result.is_none());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_single_match_is_unwrapped() {
        let doc = parse_document(PAGE);
        let result = select(Some(doc.root_element()), &sel("span[class='only']"));
        match result {
            Matches::One(node) => assert_eq!(node.value().name(), "span"),
            other => panic!("expected a single node, got {:?}", other),
        }
    }

    #[test]
    fn test_many_matches_keep_document_order() {
        let doc = parse_document(PAGE);
        let result = select(Some(doc.root_element()), &sel("div[class='item']"));
        assert!(matches!(result, Matches::Many(_)));
        // exact class match excludes "item wide" and the <p>
        assert_eq!(ids(result), vec!["first", "second"]);
    }

    #[test]
    fn test_nested_matches_keep_document_order() {
        let doc = parse_document(
            r#"<html><body><div id="outer"><div id="inner"><span id="s1"></span></div><span id="s2"></span></div></body></html>"#,
        );
        let result = select(Some(doc.root_element()), &sel("div > span"));
        assert_eq!(ids(result), vec!["s1", "s2"]);
    }

    #[test]
    fn test_select_path_follows_children_only() {
        let doc = parse_document(PAGE);
        let list = select(Some(doc.root_element()), &sel("div[id='list']")).one();

        let anchors = select_path(list, &[sel("div"), sel("a")]);
        let hrefs: Vec<_> = anchors
            .into_vec()
            .into_iter()
            .filter_map(|a| attr(Some(a), "href"))
            .collect();
        assert_eq!(hrefs, vec!["/one", "/two"]);

        // a child step does not reach grandchildren
        assert!(select_path(list, &[sel("a")]).is_none());
    }

    #[test]
    fn test_attr() {
        let doc = parse_document(PAGE);
        let anchor = select(Some(doc.root_element()), &sel("a[href='/one']")).one();

        assert_eq!(attr(anchor, "title"), Some(" One "));
        assert_eq!(attr(anchor, "missing"), None);
    }

    #[test]
    fn test_missing_node_yields_none() {
        assert_eq!(select(None, &sel("a")), Matches::None);
        assert_eq!(select_path(None, &[sel("a")]), Matches::None);
        assert_eq!(attr(None, "href"), None);
        assert_eq!(children(None), Matches::None);
    }

    #[test]
    fn test_children_shapes() {
        let doc = parse_document(PAGE);
        let root = Some(doc.root_element());

        let empty = select(root, &sel("div[id='empty']")).one();
        assert_eq!(children(empty), Matches::None);

        let solo = select(root, &sel("div[id='solo']")).one();
        match children(solo) {
            Matches::One(child) => assert_eq!(child.value().name(), "span"),
            other => panic!("expected one child, got {:?}", other),
        }

        let list = select(root, &sel("div[id='list']")).one();
        assert_eq!(children(list).len(), 4);
    }

    #[test]
    fn test_one_rejects_many() {
        let doc = parse_document(PAGE);
        let result = select(Some(doc.root_element()), &sel("div[class='item']"));
        assert!(result.one().is_none());
    }
}
