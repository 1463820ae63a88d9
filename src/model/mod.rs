//! Content model for documentation pages.
//!
//! A page is a tree of [`ContentBlock`]s rooted at a single page block. The
//! set of block kinds is closed: [`BlockKind`] lists every variant and the
//! fields it carries. Trees are built once (usually deserialized from JSON)
//! and read, never mutated, by the traversal functions.

mod block;
mod page;
mod styles;

pub use block::{BlockKind, ContentBlock};
pub use page::{PageDefinition, PageMeta};
pub use styles::{
    CalloutStyle, GapSize, HeadingLevel, InfoBoxStyle, ListStyle, SpacingSize, StepNumber,
};
