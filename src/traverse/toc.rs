//! Table-of-contents extraction.

use serde::{Deserialize, Serialize};

use super::traverse;
use crate::model::{BlockKind, ContentBlock};
use crate::slug::resolve_id;

/// Heading level every section is normalized to.
const SECTION_LEVEL: u8 = 2;

/// A single table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id
    pub id: String,

    /// Display title
    pub title: String,

    /// Heading level (sections are always 2)
    pub level: u8,
}

impl TocItem {
    /// Create a TOC item.
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
        }
    }
}

/// Classify a single block as a TOC entry.
///
/// Headings map to their own level; sections map to level 2 regardless of
/// how deeply they are nested. An explicit id always wins over the slug.
pub fn toc_entry(block: &ContentBlock) -> Option<TocItem> {
    match &block.kind {
        BlockKind::Heading { level, text } => Some(TocItem {
            id: resolve_id(block.explicit_id(), text),
            title: text.clone(),
            level: level.get(),
        }),
        BlockKind::Section { title, .. } => {
            let title = title.as_deref().unwrap_or_default();
            Some(TocItem {
                id: resolve_id(block.explicit_id(), title),
                title: title.to_string(),
                level: SECTION_LEVEL,
            })
        }
        _ => None,
    }
}

/// Extract the table of contents of a page, in reading order.
pub fn extract_toc(root: &ContentBlock) -> Vec<TocItem> {
    traverse(root, toc_entry)
}

/// A TOC entry with the entries nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// The entry itself
    #[serde(flatten)]
    pub item: TocItem,

    /// Entries nested under this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

impl TocNode {
    fn leaf(item: TocItem) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    /// Total number of entries in this subtree, including itself.
    pub fn total_items(&self) -> usize {
        1 + self.children.iter().map(TocNode::total_items).sum::<usize>()
    }
}

/// Fold a flat TOC into a tree.
///
/// Each item becomes a child of the closest preceding item with a strictly
/// smaller level; items with no such predecessor are top-level. Order is
/// preserved.
pub fn nest_toc(items: Vec<TocItem>) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = Vec::new();
    // Open ancestors, outermost first.
    let mut stack: Vec<TocNode> = Vec::new();

    for item in items {
        while stack.last().is_some_and(|open| open.item.level >= item.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(TocNode::leaf(item));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<TocNode>, roots: &mut Vec<TocNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
