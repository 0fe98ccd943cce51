//! Shared test stores.

use std::collections::BTreeMap;

use ccc_store::{
    CccMeta, EnhancedStore, PageMeta, PageNode, Paragraph, ParagraphAttrs, ParagraphElement,
    RawStore,
};

fn page(id: &str, text: &str) -> PageNode {
    PageNode {
        id: id.to_owned(),
        paragraphs: vec![Paragraph {
            attrs: ParagraphAttrs::default(),
            elements: vec![ParagraphElement::Text {
                text: text.to_owned(),
                attrs: None,
            }],
        }],
        footnotes: BTreeMap::new(),
    }
}

fn meta(url: &str, prev: Option<&str>, next: Option<&str>) -> PageMeta {
    PageMeta {
        title: String::new(),
        url: Some(url.to_owned()),
        prev: prev.map(str::to_owned),
        next: next.map(str::to_owned),
    }
}

/// Two pages with hand-written metadata:
/// `{"1": {url: "a", next: "2"}, "2": {url: "b", prev: "1"}}`.
pub(crate) fn two_page_store() -> EnhancedStore {
    let raw = RawStore {
        page_nodes: BTreeMap::from([
            ("1".to_owned(), page("1", "first page")),
            ("2".to_owned(), page("2", "second page")),
        ]),
        ..Default::default()
    };
    let meta = CccMeta {
        page_meta_map: BTreeMap::from([
            ("1".to_owned(), meta("a", None, Some("2"))),
            ("2".to_owned(), meta("b", Some("1"), None)),
        ]),
        url_map: BTreeMap::from([
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
        ]),
        reading_order: vec!["1".to_owned(), "2".to_owned()],
        toc_parents: BTreeMap::new(),
    };
    EnhancedStore::from_parts(raw, meta)
}

/// Store generated from JSON with a nested table of contents:
///
/// ```text
/// part-1 (no page)
///   1  __P1.HTM
///     1a  __P1A.HTM
///   2  __P2.HTM
/// 3  __P3.HTM
/// ```
pub(crate) fn generated_store() -> EnhancedStore {
    let raw = RawStore::from_json_str(
        r#"{
            "toc_link_tree": [
                {"id": "part-1", "children": [
                    {"id": "1", "children": [{"id": "1a"}]},
                    {"id": "2"}
                ]},
                {"id": "3"}
            ],
            "toc_nodes": {
                "part-1": {"id": "part-1", "text": "Part One"},
                "1": {"id": "1", "text": "Prologue", "link": "https://example.org/__P1.HTM"},
                "1a": {"id": "1a", "text": "Life of Man", "link": "__P1A.HTM"},
                "2": {"id": "2", "text": "Handing on", "link": "__P2.HTM"},
                "3": {"id": "3", "text": "Part Two", "link": "__P3.HTM"}
            },
            "page_nodes": {
                "1": {
                    "id": "1",
                    "paragraphs": [
                        {"attrs": {"indent": true}, "elements": [
                            {"type": "ref-ccc", "ref_number": 1},
                            {"type": "text", "text": "God, infinitely perfect", "attrs": {"b": true}},
                            {"type": "ref", "number": 1}
                        ]},
                        {"attrs": {}, "elements": [
                            {"type": "ref-anchor", "link": "/p/P2", "attrs": {"i": true}},
                            {"type": "spacer"},
                            {"type": "video", "src": "x.mp4"}
                        ]}
                    ],
                    "footnotes": {
                        "x": {"number": 2, "refs": [{"text": "r1"}]},
                        "y": {"number": 1, "refs": [{"text": "r2"}, {"text": "r3"}]}
                    }
                },
                "1a": {"id": "1a", "paragraphs": []},
                "2": {"id": "2", "paragraphs": []},
                "3": {"id": "3", "paragraphs": []}
            }
        }"#,
    )
    .unwrap();
    EnhancedStore::new(raw)
}
