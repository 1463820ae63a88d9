//! Integration tests for slug derivation and TOC extraction.

use docblocks::model::{BlockKind, ContentBlock, InfoBoxStyle, ListStyle};
use docblocks::{extract_toc, nest_toc, parse_content, slug, traverse, TocItem};

fn page_with(children: Vec<ContentBlock>) -> ContentBlock {
    ContentBlock::page(children)
}

#[test]
fn test_single_heading() {
    let page = page_with(vec![ContentBlock::heading(2, "Getting Started")]);
    assert_eq!(
        extract_toc(&page),
        vec![TocItem::new("getting-started", "Getting Started", 2)]
    );
}

#[test]
fn test_section_level_independent_of_depth() {
    for depth in 0..5 {
        let mut inner = ContentBlock::section(Some("Setup Steps"), vec![]);
        for _ in 0..depth {
            inner = ContentBlock::info_box(InfoBoxStyle::Note, vec![inner]);
        }
        let toc = extract_toc(&page_with(vec![inner]));

        assert_eq!(toc.len(), 1, "depth {}", depth);
        assert_eq!(toc[0].id, "setup-steps");
        assert_eq!(toc[0].level, 2);
    }
}

#[test]
fn test_section_under_heading_of_level_four() {
    let page = page_with(vec![
        ContentBlock::heading(4, "Deep"),
        ContentBlock::section(Some("Setup Steps"), vec![ContentBlock::heading(5, "Deeper")]),
    ]);
    let levels: Vec<u8> = extract_toc(&page).iter().map(|t| t.level).collect();
    assert_eq!(levels, [4, 2, 5]);
}

#[test]
fn test_explicit_id_overrides_slug() {
    let page = page_with(vec![ContentBlock::heading(3, "Anything").with_id("custom-anchor")]);
    assert_eq!(
        extract_toc(&page),
        vec![TocItem::new("custom-anchor", "Anything", 3)]
    );
}

#[test]
fn test_level_order_preserved() {
    let page = page_with(vec![
        ContentBlock::heading(2, "Install"),
        ContentBlock::paragraph_text("text between"),
        ContentBlock::heading(3, "Homebrew"),
        ContentBlock::heading(2, "Configure"),
    ]);
    let levels: Vec<u8> = extract_toc(&page).iter().map(|t| t.level).collect();
    assert_eq!(levels, [2, 3, 2]);
}

#[test]
fn test_ancestor_before_descendant() {
    let page = page_with(vec![ContentBlock::section(
        Some("Outer"),
        vec![
            ContentBlock::heading(3, "Middle"),
            ContentBlock::section(Some("Inner"), vec![ContentBlock::heading(4, "Leaf")]),
        ],
    )]);
    let ids: Vec<String> = extract_toc(&page).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["outer", "middle", "inner", "leaf"]);
}

#[test]
fn test_no_classifiable_nodes() {
    let page = page_with(vec![
        ContentBlock::paragraph_text("Just prose"),
        ContentBlock::list(ListStyle::Ordered, vec![ContentBlock::list_item("one")]),
    ]);
    assert!(extract_toc(&page).is_empty());

    let none: Vec<&str> = traverse(&page, |_| None);
    assert!(none.is_empty());
}

#[test]
fn test_children_not_assumed_by_kind() {
    // A list holding a heading directly, and a text node with children.
    let page = page_with(vec![
        ContentBlock::list(ListStyle::Unordered, vec![ContentBlock::heading(2, "Odd")]),
        ContentBlock::text("carrier").with_children(vec![ContentBlock::heading(3, "Hidden")]),
    ]);
    let titles: Vec<String> = extract_toc(&page).into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["Odd", "Hidden"]);
}

#[test]
fn test_toc_from_json() {
    let page = parse_content(
        r#"{
            "type": "page",
            "children": [
                {"type": "heading", "level": 1, "text": "Moley CLI"},
                {"type": "section", "id": "env", "title": "Environment Variables", "children": [
                    {"type": "codeblock", "language": "bash", "code": "export MOLEY_TUNNEL_INGRESS_ZONE=\"yourdomain.com\""}
                ]},
                {"type": "section", "children": []}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        extract_toc(&page),
        vec![
            TocItem::new("moley-cli", "Moley CLI", 1),
            TocItem::new("env", "Environment Variables", 2),
            TocItem::new("", "", 2),
        ]
    );
}

#[test]
fn test_nested_toc_from_page() {
    let page = page_with(vec![
        ContentBlock::heading(2, "Install"),
        ContentBlock::heading(3, "macOS"),
        ContentBlock::heading(3, "Linux"),
        ContentBlock::heading(2, "Usage"),
    ]);
    let tree = nest_toc(extract_toc(&page));

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].children.len(), 2);
    assert_eq!(tree[0].children[1].item.id, "linux");
    assert_eq!(tree[1].item.title, "Usage");
}

#[test]
fn test_slug_properties() {
    let samples = [
        "Getting Started",
        "What's New in v0.3?",
        "  Leading and trailing  ",
        "MOLEY_CLOUDFLARE_TOKEN",
        "emoji 🚇 tunnel",
        "",
    ];
    for sample in samples {
        let out = slug(sample);
        assert!(!out.chars().any(char::is_whitespace), "{:?}", out);
        assert!(!out.chars().any(|c| c.is_uppercase()), "{:?}", out);
        assert_eq!(slug(&out), out, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_traverse_generic_projection() {
    let page = page_with(vec![
        ContentBlock::tabs(vec![
            ContentBlock::tab("Homebrew", vec![]),
            ContentBlock::tab("Go", vec![]),
        ]),
        ContentBlock::step(1, "Install"),
    ]);
    let tabs: Vec<&str> = traverse(&page, |block| match &block.kind {
        BlockKind::Tab { title } => Some(title.as_str()),
        _ => None,
    });
    assert_eq!(tabs, ["Homebrew", "Go"]);
}
