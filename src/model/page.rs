//! Page-level types: metadata plus a content root.

use serde::{Deserialize, Serialize};

use super::ContentBlock;
use crate::slug::slug;

/// Metadata for a documentation page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Page title for navigation and SEO
    pub title: String,

    /// Short title for the navigation menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_title: Option<String>,

    /// Page description for SEO and previews
    #[serde(default)]
    pub description: String,

    /// Sort order in navigation (lower first)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Navigation group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Custom slug override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Page URL path
    pub href: String,

    /// Internal-only page, hidden from public navigation
    #[serde(default)]
    pub internal: bool,
}

impl PageMeta {
    /// Create metadata with a title and href.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            ..Default::default()
        }
    }

    /// Title shown in the navigation menu, falling back to the page title.
    pub fn menu_title(&self) -> &str {
        self.menu_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }

    /// Slug for this page: the override when set, otherwise derived from the title.
    pub fn slug(&self) -> String {
        match self.slug.as_deref().filter(|s| !s.is_empty()) {
            Some(custom) => custom.to_string(),
            None => slug(&self.title),
        }
    }

    /// Set the navigation order.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the navigation category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Mark the page as internal-only.
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }
}

/// A complete page: metadata plus its content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDefinition {
    /// Page metadata
    pub meta: PageMeta,

    /// Root content block, normally a page block
    pub content: ContentBlock,
}

impl PageDefinition {
    /// Create a page definition.
    pub fn new(meta: PageMeta, content: ContentBlock) -> Self {
        Self { meta, content }
    }

    /// Page URL path.
    pub fn href(&self) -> &str {
        &self.meta.href
    }
}
