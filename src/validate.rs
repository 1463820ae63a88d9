//! Structural checks on content trees.
//!
//! Only shape is checked here. Whether a step or card makes sense is up to
//! the page author.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{BlockKind, ContentBlock};
use crate::traverse::{extract_toc, TocItem};

/// Check that `root` is a well-formed page tree.
///
/// Fails if the root is not a page block or a grid declares zero columns.
/// Duplicate TOC anchors are logged as warnings but never rejected or
/// rewritten.
pub fn validate(root: &ContentBlock) -> Result<()> {
    if !root.is_page() {
        return Err(Error::RootNotPage(root.kind_name()));
    }

    for block in root.descendants() {
        if let BlockKind::Grid { columns: 0, .. } = block.kind {
            return Err(Error::InvalidGrid {
                id: block.id.clone(),
                columns: 0,
            });
        }
    }

    for id in duplicate_anchors(&extract_toc(root)) {
        log::warn!("Anchor '{}' is used by more than one TOC entry", id);
    }

    Ok(())
}

/// Anchor ids that occur more than once, in order of first occurrence.
pub fn duplicate_anchors(toc: &[TocItem]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in toc {
        *counts.entry(item.id.as_str()).or_default() += 1;
    }

    let mut reported = Vec::new();
    for item in toc {
        if counts.get(item.id.as_str()).copied().unwrap_or(0) > 1
            && !reported.contains(&item.id)
        {
            reported.push(item.id.clone());
        }
    }
    reported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page() {
        let page = ContentBlock::page(vec![
            ContentBlock::heading(2, "Intro"),
            ContentBlock::grid(2, vec![ContentBlock::card("A", "/a/")]),
        ]);
        assert!(validate(&page).is_ok());
    }

    #[test]
    fn test_root_must_be_page() {
        let root = ContentBlock::section(Some("Loose"), vec![]);
        let err = validate(&root).unwrap_err();
        assert!(matches!(err, Error::RootNotPage("section")));
    }

    #[test]
    fn test_zero_column_grid() {
        let page = ContentBlock::page(vec![ContentBlock::section(
            None,
            vec![ContentBlock::grid(0, vec![]).with_id("cards")],
        )]);
        let err = validate(&page).unwrap_err();
        match err {
            Error::InvalidGrid { id, columns } => {
                assert_eq!(id.as_deref(), Some("cards"));
                assert_eq!(columns, 0);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_wide_grid_is_valid() {
        let json = r#"{"type":"page","children":[{"type":"grid","columns":300,"children":[]}]}"#;
        let page: ContentBlock = serde_json::from_str(json).unwrap();
        match &page.children()[0].kind {
            BlockKind::Grid { columns, .. } => assert_eq!(*columns, 300),
            other => panic!("unexpected kind {:?}", other),
        }
        assert!(validate(&page).is_ok());
    }

    #[test]
    fn test_duplicates_do_not_fail() {
        let page = ContentBlock::page(vec![
            ContentBlock::heading(2, "Usage"),
            ContentBlock::heading(3, "Usage"),
        ]);
        assert!(validate(&page).is_ok());
    }

    #[test]
    fn test_duplicate_anchors() {
        let toc = vec![
            TocItem::new("usage", "Usage", 2),
            TocItem::new("setup", "Setup", 2),
            TocItem::new("usage", "Usage", 3),
            TocItem::new("setup", "Setup", 3),
            TocItem::new("usage", "Usage", 2),
        ];
        assert_eq!(duplicate_anchors(&toc), ["usage", "setup"]);
        assert!(duplicate_anchors(&toc[..2]).is_empty());
    }
}
