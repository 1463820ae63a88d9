//! Site loading and navigation options.

/// Options for loading a site and deriving its navigation.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// How structural errors in page trees are handled
    pub error_mode: ErrorMode,

    /// Base URL prepended to page hrefs (e.g., "/moley/")
    pub base_url: String,

    /// Whether internal-only pages appear in navigation
    pub include_internal: bool,

    /// Whether to compute per-page projections in parallel
    pub parallel: bool,
}

impl SiteOptions {
    /// Create new site options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (log structural errors instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Show or hide internal-only pages in navigation.
    pub fn include_internal(mut self, include: bool) -> Self {
        self.include_internal = include;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            base_url: "/".to_string(),
            include_internal: false,
            parallel: true,
        }
    }
}

/// Error handling mode when loading pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first structural error
    #[default]
    Strict,
    /// Log structural errors and keep the page
    Lenient,
}
