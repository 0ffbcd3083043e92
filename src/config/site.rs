//! `[site]` section configuration.
//!
//! Describes the rendered site tree and the url shapes it uses.
//!
//! # Example
//!
//! ```toml
//! [site]
//! root = "_site"                                        # Rendered site directory
//! url = "https://example.github.io/jaqman-chemicals/"   # Deployment URL
//! base = "jaqman-chemicals"                             # Overrides the url path
//! pages = ["about", "products", "industries", "resources", "contact"]
//! assets = ["static", "media"]
//! extensions = ["html"]
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use super::{ConfigDiagnostics, util::extract_url_path};

/// Top-level pages linked from templates as `/<name>/...`.
pub const DEFAULT_PAGES: &[&str] = &["about", "products", "industries", "resources", "contact"];

/// Deployment base segment used when neither `base` nor `url` is set.
pub const DEFAULT_BASE: &str = "jaqman-chemicals";

/// Asset roots served as `/<name>/...`.
pub const DEFAULT_ASSETS: &[&str] = &["static", "media"];

/// Site tree settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Rendered site directory, relative to the config file.
    pub root: PathBuf,

    /// Deployment URL; its path becomes the base segment when `base` is unset.
    pub url: Option<String>,

    /// Deployment base segment prefixed to some internal links.
    /// Falls back to the `url` path, then to [`DEFAULT_BASE`].
    /// An empty string disables the base rule.
    pub base: Option<String>,

    /// Named top-level pages, rewritten in this order.
    pub pages: Vec<String>,

    /// Asset roots, rewritten in this order.
    pub assets: Vec<String>,

    /// File extensions treated as HTML.
    pub extensions: Vec<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("_site"),
            url: None,
            base: None,
            pages: DEFAULT_PAGES.iter().map(ToString::to_string).collect(),
            assets: DEFAULT_ASSETS.iter().map(ToString::to_string).collect(),
            extensions: vec!["html".to_string()],
        }
    }
}

impl SiteSectionConfig {
    /// Resolve the effective base segment.
    ///
    /// An explicit `base` wins, then the path of `url`, then [`DEFAULT_BASE`].
    /// Surrounding slashes are stripped and an empty result means no base.
    pub fn base_segment(&self) -> Option<String> {
        let raw = match (&self.base, self.url.as_deref().and_then(extract_url_path)) {
            (Some(base), _) => base.clone(),
            (None, Some(path)) => path,
            (None, None) => DEFAULT_BASE.to_string(),
        };
        let trimmed = raw.trim_matches('/');
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must parse when set
    /// - the resolved base segment must be a single path segment
    /// - `pages` and `assets` entries must be single, non-empty path segments
    /// - `extensions` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && extract_url_path(url).is_none()
        {
            diag.error("site.url", format!("not a valid URL: `{url}`"));
        }

        if let Some(base) = self.base_segment() {
            let field = if self.base.is_some() { "site.base" } else { "site.url" };
            check_segment(diag, field, "base segment", &base);
        }

        for page in &self.pages {
            check_segment(diag, "site.pages", "page name", page);
        }
        for asset in &self.assets {
            check_segment(diag, "site.assets", "asset root", asset);
        }

        if self.extensions.is_empty() {
            diag.error("site.extensions", "at least one extension is required");
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                diag.error(
                    "site.extensions",
                    format!("extension `{ext}` must be non-empty and written without a dot"),
                );
            }
        }
    }
}

fn check_segment(diag: &mut ConfigDiagnostics, field: &'static str, what: &str, value: &str) {
    if value.is_empty() {
        diag.error(field, format!("{what} must not be empty"));
    } else if value.contains('/') {
        diag.error(field, format!("{what} `{value}` must not contain `/`"));
    }
}
