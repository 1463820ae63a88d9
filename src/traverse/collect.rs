//! Other projections built on [`traverse`].

use serde::{Deserialize, Serialize};

use super::traverse;
use crate::model::{BlockKind, ContentBlock};

/// A navigation target found in a page (link or card).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub href: String,
    pub text: String,
    pub external: bool,
}

/// A code sample found in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub code: String,
}

/// Collect every link and card target, in reading order.
pub fn collect_links(root: &ContentBlock) -> Vec<LinkTarget> {
    traverse(root, |block| match &block.kind {
        BlockKind::Link {
            href,
            text,
            external,
            ..
        } => Some(LinkTarget {
            href: href.clone(),
            text: text.clone(),
            external: *external,
        }),
        BlockKind::Card {
            href,
            title,
            external,
            ..
        } => Some(LinkTarget {
            href: href.clone(),
            text: title.clone(),
            external: *external,
        }),
        _ => None,
    })
}

/// Collect every code block, in reading order.
pub fn collect_code_blocks(root: &ContentBlock) -> Vec<CodeSample> {
    traverse(root, |block| match &block.kind {
        BlockKind::CodeBlock {
            language,
            code,
            title,
        } => Some(CodeSample {
            language: language.clone(),
            title: title.clone(),
            code: code.clone(),
        }),
        _ => None,
    })
}

/// Reading-order text of a tree, joined by single spaces.
pub fn plain_text(root: &ContentBlock) -> String {
    traverse(root, ContentBlock::own_text).join(" ")
}
