//! Visitor-driven walks with depth and subtree control.
//!
//! Where [`traverse`](super::traverse) only collects, a [`BlockVisitor`]
//! can prune subtrees or stop the walk early, and it is told the depth of
//! each node.
//!
//! # Example
//!
//! ```
//! use docblocks::model::{BlockKind, ContentBlock};
//! use docblocks::traverse::{walk, BlockVisitor, WalkAction};
//!
//! /// Counts headings outside of tabs.
//! struct HeadingCounter(usize);
//!
//! impl BlockVisitor for HeadingCounter {
//!     fn visit_block(&mut self, block: &ContentBlock, _depth: usize) -> WalkAction {
//!         match block.kind {
//!             BlockKind::Tabs => WalkAction::SkipChildren,
//!             BlockKind::Heading { .. } => {
//!                 self.0 += 1;
//!                 WalkAction::Continue
//!             }
//!             _ => WalkAction::Continue,
//!         }
//!     }
//! }
//!
//! let page = ContentBlock::page(vec![
//!     ContentBlock::heading(2, "Install"),
//!     ContentBlock::tabs(vec![ContentBlock::tab("macOS", vec![ContentBlock::heading(3, "Brew")])]),
//! ]);
//! let mut counter = HeadingCounter(0);
//! walk(&page, &mut counter);
//! assert_eq!(counter.0, 1);
//! ```

use crate::model::ContentBlock;

/// Action returned by a visitor to steer the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkAction {
    /// Descend into this block's children.
    #[default]
    Continue,

    /// Do not visit this block's descendants.
    SkipChildren,

    /// End the walk immediately.
    Stop,
}

impl WalkAction {
    /// Check if this action ends the walk.
    pub fn is_stop(self) -> bool {
        matches!(self, WalkAction::Stop)
    }
}

/// Trait for visiting blocks during a pre-order walk.
pub trait BlockVisitor {
    /// Called when a block is entered, before its children.
    ///
    /// # Arguments
    /// * `block` - The block being visited
    /// * `depth` - Distance from the root (the root is 0)
    fn visit_block(&mut self, block: &ContentBlock, depth: usize) -> WalkAction;

    /// Called after a block's children were visited (or skipped).
    ///
    /// Not called for the block that returned [`WalkAction::Stop`] or any
    /// block still open when the walk stopped.
    fn leave_block(&mut self, block: &ContentBlock, depth: usize) {
        let _ = (block, depth);
    }
}

impl<F> BlockVisitor for F
where
    F: FnMut(&ContentBlock, usize) -> WalkAction,
{
    fn visit_block(&mut self, block: &ContentBlock, depth: usize) -> WalkAction {
        self(block, depth)
    }
}

/// Walk `root` in pre-order, driving `visitor`.
///
/// Returns `false` if the visitor stopped the walk early.
pub fn walk<V: BlockVisitor + ?Sized>(root: &ContentBlock, visitor: &mut V) -> bool {
    walk_at(root, 0, visitor)
}

fn walk_at<V: BlockVisitor + ?Sized>(block: &ContentBlock, depth: usize, visitor: &mut V) -> bool {
    match visitor.visit_block(block, depth) {
        WalkAction::Stop => return false,
        WalkAction::SkipChildren => {}
        WalkAction::Continue => {
            for child in block.children() {
                if !walk_at(child, depth + 1, visitor) {
                    return false;
                }
            }
        }
    }
    visitor.leave_block(block, depth);
    true
}
