//! Depth-first traversal over content trees.
//!
//! [`traverse`] is the general-purpose primitive: it walks a tree in
//! pre-order and collects whatever a caller-supplied classifier returns. It
//! knows nothing about block kinds; the table of contents and the other
//! projections in this module are all classifiers layered on top of it.
//!
//! # Example
//!
//! ```
//! use docblocks::model::{BlockKind, ContentBlock};
//! use docblocks::traverse::traverse;
//!
//! let page = ContentBlock::page(vec![
//!     ContentBlock::code_block("bash", "moley tunnel run"),
//!     ContentBlock::code_block("yaml", "zone: example.com"),
//! ]);
//!
//! let languages = traverse(&page, |block| match &block.kind {
//!     BlockKind::CodeBlock { language, .. } => Some(language.clone()),
//!     _ => None,
//! });
//! assert_eq!(languages, ["bash", "yaml"]);
//! ```

mod collect;
mod toc;
pub mod visitor;

pub use collect::{collect_code_blocks, collect_links, plain_text, CodeSample, LinkTarget};
pub use toc::{extract_toc, nest_toc, toc_entry, TocItem, TocNode};
pub use visitor::{walk, BlockVisitor, WalkAction};

use crate::model::ContentBlock;

/// Collect the present classifications of every node, in pre-order.
///
/// The root is classified first, then each child subtree in order. A
/// parent's record always precedes its descendants' records. The tree must
/// be finite; there is no failure mode. Classifications may borrow from
/// the tree.
pub fn traverse<'a, T, F>(root: &'a ContentBlock, classify: F) -> Vec<T>
where
    F: FnMut(&'a ContentBlock) -> Option<T>,
{
    root.descendants().filter_map(classify).collect()
}

impl ContentBlock {
    /// Iterate over this block and all of its descendants in pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a content tree.
///
/// Created by [`ContentBlock::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a ContentBlock>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ContentBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(block.children().iter().rev());
        Some(block)
    }
}
