//! Navigation menus derived from page metadata.

use serde::{Deserialize, Serialize};

use super::SiteOptions;
use crate::model::PageMeta;

/// Join a base URL and a site-relative href.
///
/// A single leading `/` on `href` is dropped so `"/docs/"` under base
/// `"/moley/"` becomes `"/moley/docs/"`.
pub fn build_url(base: &str, href: &str) -> String {
    let relative = href.strip_prefix('/').unwrap_or(href);
    format!("{}{}", base, relative)
}

/// One entry in a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Menu label
    pub title: String,

    /// Resolved URL
    pub url: String,

    /// Sort order, if the page declared one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// Entries sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Category name; `None` for uncategorised pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Entries in menu order
    pub entries: Vec<NavEntry>,
}

/// Build grouped navigation from page metadata.
///
/// Internal pages are dropped unless the options include them. Pages are
/// stable-sorted by `order`, pages without one last. Groups appear in the
/// order their category is first seen after sorting.
pub fn build_navigation<'a, I>(pages: I, options: &SiteOptions) -> Vec<NavGroup>
where
    I: IntoIterator<Item = &'a PageMeta>,
{
    let mut visible: Vec<&PageMeta> = pages
        .into_iter()
        .filter(|meta| options.include_internal || !meta.internal)
        .collect();
    visible.sort_by_key(|meta| (meta.order.is_none(), meta.order));

    let mut groups: Vec<NavGroup> = Vec::new();
    for meta in visible {
        let entry = NavEntry {
            title: meta.menu_title().to_string(),
            url: build_url(&options.base_url, &meta.href),
            order: meta.order,
        };
        match groups.iter_mut().find(|g| g.category == meta.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(NavGroup {
                category: meta.category.clone(),
                entries: vec![entry],
            }),
        }
    }

    log::debug!("Built navigation with {} groups", groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metas() -> Vec<PageMeta> {
        vec![
            PageMeta::new("Troubleshooting", "/docs/troubleshooting/")
                .with_order(5)
                .with_category("Guides"),
            PageMeta::new("Debugging Internals", "/docs/debugging/")
                .with_order(10)
                .with_category("Internal")
                .internal(),
            PageMeta::new("Changelog", "/changelog/"),
            PageMeta::new("Quick Start", "/docs/quick-start/")
                .with_order(2)
                .with_category("Getting Started"),
            PageMeta::new("Configuration", "/docs/configuration/")
                .with_order(4)
                .with_category("Guides"),
            PageMeta {
                menu_title: Some("Documentation".to_string()),
                ..PageMeta::new("Moley Documentation", "/docs/")
                    .with_order(1)
                    .with_category("Getting Started")
            },
        ]
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url("/", "/docs/"), "/docs/");
        assert_eq!(build_url("/moley/", "/docs/"), "/moley/docs/");
        assert_eq!(build_url("/moley/", "docs/"), "/moley/docs/");
        assert_eq!(build_url("/", "//x"), "//x");
    }

    #[test]
    fn test_navigation_groups_and_order() {
        let metas = metas();
        let nav = build_navigation(&metas, &SiteOptions::default());

        let categories: Vec<Option<&str>> = nav.iter().map(|g| g.category.as_deref()).collect();
        assert_eq!(categories, [Some("Getting Started"), Some("Guides"), None]);

        let started: Vec<&str> = nav[0].entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(started, ["Documentation", "Quick Start"]);

        let guides: Vec<&str> = nav[1].entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(guides, ["/docs/configuration/", "/docs/troubleshooting/"]);

        assert_eq!(nav[2].entries[0].order, None);
    }

    #[test]
    fn test_internal_pages() {
        let metas = metas();
        let hidden = build_navigation(&metas, &SiteOptions::default());
        assert!(hidden
            .iter()
            .all(|g| g.category.as_deref() != Some("Internal")));

        let shown = build_navigation(&metas, &SiteOptions::new().include_internal(true));
        assert!(shown
            .iter()
            .any(|g| g.category.as_deref() == Some("Internal")));
    }

    #[test]
    fn test_base_url_applied() {
        let metas = metas();
        let nav = build_navigation(&metas, &SiteOptions::new().with_base_url("/moley/"));
        assert_eq!(nav[0].entries[0].url, "/moley/docs/");
    }
}
