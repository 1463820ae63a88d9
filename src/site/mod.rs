//! A documentation site: an ordered set of page definitions.

mod nav;
mod options;

pub use nav::{build_navigation, build_url, NavEntry, NavGroup};
pub use options::{ErrorMode, SiteOptions};

use rayon::prelude::*;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::PageDefinition;
use crate::traverse::{extract_toc, TocItem};
use crate::validate::validate;

/// Accepted top-level shapes of a site file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SiteFile {
    Pages(Vec<PageDefinition>),
    Page(Box<PageDefinition>),
}

/// The table of contents of one page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageToc {
    /// Page href
    pub href: String,

    /// Page title
    pub title: String,

    /// TOC entries in reading order
    pub items: Vec<TocItem>,
}

/// An ordered collection of documentation pages.
#[derive(Debug, Clone)]
pub struct Site {
    pages: Vec<PageDefinition>,
    options: SiteOptions,
}

impl Site {
    /// Create a site from pages, validating each according to `options`.
    pub fn new(pages: Vec<PageDefinition>, options: SiteOptions) -> Result<Self> {
        for page in &pages {
            if let Err(e) = validate(&page.content) {
                match options.error_mode {
                    ErrorMode::Strict => return Err(e),
                    ErrorMode::Lenient => {
                        log::warn!("Page {} is malformed: {}", page.href(), e);
                    }
                }
            }
        }

        log::debug!("Loaded site with {} pages", pages.len());
        Ok(Self { pages, options })
    }

    /// Parse a site from JSON text: an array of page definitions or a single one.
    ///
    /// Content trees nested deeper than about 60 levels hit the `serde_json`
    /// recursion limit and fail with [`Error::Json`].
    pub fn from_json_str(json: &str, options: SiteOptions) -> Result<Self> {
        let pages = match serde_json::from_str::<SiteFile>(json) {
            Ok(SiteFile::Pages(pages)) => pages,
            Ok(SiteFile::Page(page)) => vec![*page],
            // Untagged errors are opaque; re-parse with the intended shape for a precise message.
            Err(_) if json.trim_start().starts_with('[') => {
                serde_json::from_str::<Vec<PageDefinition>>(json)?
            }
            Err(_) => vec![serde_json::from_str::<PageDefinition>(json)?],
        };
        Self::new(pages, options)
    }

    /// Read a site from any reader.
    pub fn from_reader<R: Read>(mut reader: R, options: SiteOptions) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json, options)
    }

    /// Load a site file.
    pub fn load<P: AsRef<Path>>(path: P, options: SiteOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading site definition from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, options)
    }

    /// Load a site file without blocking the async runtime.
    #[cfg(feature = "async")]
    pub async fn load_async<P: AsRef<Path>>(path: P, options: SiteOptions) -> Result<Self> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&json, options)
    }

    /// Pages in definition order.
    pub fn pages(&self) -> &[PageDefinition] {
        &self.pages
    }

    /// Options the site was loaded with.
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the site has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find a page by href.
    pub fn find(&self, href: &str) -> Result<&PageDefinition> {
        self.pages
            .iter()
            .find(|page| page.href() == href)
            .ok_or_else(|| Error::PageNotFound(href.to_string()))
    }

    /// Table of contents of every page, in page order.
    ///
    /// Pages are independent, so the work is spread across threads unless
    /// the site is configured as sequential.
    pub fn toc_index(&self) -> Vec<PageToc> {
        let page_toc = |page: &PageDefinition| PageToc {
            href: page.meta.href.clone(),
            title: page.meta.title.clone(),
            items: extract_toc(&page.content),
        };

        if self.options.parallel {
            self.pages.par_iter().map(page_toc).collect()
        } else {
            self.pages.iter().map(page_toc).collect()
        }
    }

    /// Grouped navigation for the site.
    pub fn navigation(&self) -> Vec<NavGroup> {
        build_navigation(self.pages.iter().map(|p| &p.meta), &self.options)
    }
}
