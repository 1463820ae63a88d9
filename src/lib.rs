//! # docblocks
//!
//! Recursive content-block model and table-of-contents extraction for
//! documentation sites.
//!
//! Pages are trees of typed [`ContentBlock`]s (headings, paragraphs, lists,
//! tabs, cards, code blocks and so on) rooted at a single page block. The
//! crate provides a generic pre-order traversal over those trees and the
//! projections built on it: anchor slugs, tables of contents, link and code
//! sample listings, and site navigation.
//!
//! ## Quick Start
//!
//! ```
//! use docblocks::{extract_toc, ContentBlock, TocItem};
//!
//! let page = ContentBlock::page(vec![
//!     ContentBlock::heading(2, "Getting Started"),
//!     ContentBlock::section(Some("Setup Steps"), vec![]),
//!     ContentBlock::heading(3, "Anything").with_id("custom-anchor"),
//! ]);
//!
//! let toc = extract_toc(&page);
//! assert_eq!(toc[0], TocItem::new("getting-started", "Getting Started", 2));
//! assert_eq!(toc[1].id, "setup-steps");
//! assert_eq!(toc[2].id, "custom-anchor");
//! ```
//!
//! ## Features
//!
//! - **Closed block model**: every kind and its fields in one enum, JSON via serde
//! - **Generic traversal**: classifier-driven collection and visitor walks
//! - **TOC extraction**: headings and sections, flat or nested
//! - **Sites**: page metadata, navigation grouping, parallel per-page TOCs

pub mod error;
pub mod export;
pub mod model;
pub mod site;
pub mod slug;
pub mod traverse;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{to_json, JsonFormat};
pub use model::{BlockKind, ContentBlock, HeadingLevel, PageDefinition, PageMeta};
pub use site::{build_url, ErrorMode, NavEntry, NavGroup, PageToc, Site, SiteOptions};
pub use slug::{resolve_id, slug};
pub use traverse::{
    collect_code_blocks, collect_links, extract_toc, nest_toc, plain_text, traverse, TocItem,
    TocNode,
};
pub use validate::validate;

use std::path::Path;

/// Parse a single content tree from JSON.
///
/// `serde_json` stops at 128 nested arrays and objects. Each child level
/// costs two (the `children` array and the block object), so trees deeper
/// than about 60 levels fail with [`Error::Json`] instead of overflowing
/// the stack.
///
/// # Example
///
/// ```
/// let page = docblocks::parse_content(r#"{"type": "page", "children": [
///     {"type": "heading", "level": 2, "text": "Usage"}
/// ]}"#).unwrap();
/// assert_eq!(docblocks::extract_toc(&page)[0].id, "usage");
/// ```
pub fn parse_content(json: &str) -> Result<ContentBlock> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate a single page definition from JSON.
pub fn parse_page(json: &str) -> Result<PageDefinition> {
    let page: PageDefinition = serde_json::from_str(json)?;
    validate(&page.content)?;
    Ok(page)
}

/// Load a site file with default options.
///
/// # Example
///
/// ```no_run
/// let site = docblocks::load_site("pages.json").unwrap();
/// for page in site.toc_index() {
///     println!("{}: {} entries", page.href, page.items.len());
/// }
/// ```
pub fn load_site<P: AsRef<Path>>(path: P) -> Result<Site> {
    Site::load(path, SiteOptions::default())
}

/// Table of contents of a content tree serialized as JSON.
pub fn toc_json(root: &ContentBlock, format: JsonFormat) -> Result<String> {
    to_json(&extract_toc(root), format)
}
