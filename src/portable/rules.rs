//! Ordered url rewrite rules.
//!
//! Rules run as whole-text substitutions in a fixed order, so matches inside
//! inline scripts or comments are rewritten just like attribute values:
//!
//! | # | Rule        | Before                        | After (prefix `../`)          |
//! |---|-------------|-------------------------------|-------------------------------|
//! | 1 | asset       | `src="/static/app.js"`        | `src="../static/app.js"`      |
//! | 2 | base        | `href="/my-project/about/"`   | `href="../about/"`            |
//! | 3 | page        | `href="/about/team"`          | `href="../about/team"`        |
//! | 4 | home        | `href="/"`                    | `href="../"`                  |
//! | 5 | query       | `href="/search?q=acid"`       | `href="../search?q=acid"`     |
//! | 6 | style url   | `url('/media/hero.jpg')`      | `url('../media/hero.jpg')`    |
//!
//! Every replacement starts with the prefix (`./` or `../`), never with `/`,
//! so a later rule cannot match text an earlier rule produced.

use regex::{Captures, Regex};

use super::{PortableError, RelativePrefix};
use crate::config::SiteSectionConfig;

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    /// Number of url references substituted.
    pub rewrites: usize,
}

/// What a matched reference turns into.
#[derive(Debug, Clone)]
enum Replacement {
    /// `(href|src)="/<asset>/` -> `$1="<prefix><asset>/`
    Asset(String),
    /// `href="/<base>/<rest>"` -> `href="<prefix><rest>"`
    Base,
    /// `href="/<page><sub>"` -> `href="<prefix><page><sub>"`
    Page(String),
    /// `href="/"` -> `href="<prefix>"`
    Home,
    /// `href="/<path>?<query>"` -> `href="<prefix><path>?<query>"`
    Query,
    /// `url(<quote>/<asset>/` -> `url(<quote><prefix><asset>/`
    StyleUrl(String),
}

impl Replacement {
    fn render(&self, caps: &Captures<'_>, prefix: &str) -> String {
        match self {
            Self::Asset(asset) => format!("{}=\"{prefix}{asset}/", &caps[1]),
            Self::Base => format!("href=\"{prefix}{}\"", &caps[1]),
            Self::Page(page) => {
                let sub = caps.get(1).map_or("", |m| m.as_str());
                format!("href=\"{prefix}{page}{sub}\"")
            }
            Self::Home => format!("href=\"{prefix}\""),
            Self::Query => format!("href=\"{prefix}{}?{}\"", &caps[1], &caps[2]),
            Self::StyleUrl(asset) => format!("url({}{prefix}{asset}/", &caps[1]),
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn new(pattern: &str, replacement: Replacement) -> Result<Self, PortableError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }
}

/// Compiled rewrite rules for one site, applied in order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile the rules once for a run.
    ///
    /// Asset roots, the base segment and page names are regex-escaped.
    pub fn from_config(site: &SiteSectionConfig) -> Result<Self, PortableError> {
        let mut rules = Vec::new();

        for asset in &site.assets {
            rules.push(Rule::new(
                &format!(r#"(href|src)="/{}/"#, regex::escape(asset)),
                Replacement::Asset(asset.clone()),
            )?);
        }

        if let Some(base) = site.base_segment() {
            rules.push(Rule::new(
                &format!(r#"href="/{}/([^"]*)""#, regex::escape(&base)),
                Replacement::Base,
            )?);
        }

        for page in &site.pages {
            rules.push(Rule::new(
                &format!(r#"href="/{}(/[^"]*)?""#, regex::escape(page)),
                Replacement::Page(page.clone()),
            )?);
        }

        rules.push(Rule::new(r#"href="/""#, Replacement::Home)?);
        rules.push(Rule::new(r#"href="/([^"?]+)\?([^"]*)""#, Replacement::Query)?);

        for asset in &site.assets {
            rules.push(Rule::new(
                &format!(r#"url\((['"])/{}/"#, regex::escape(asset)),
                Replacement::StyleUrl(asset.clone()),
            )?);
        }

        Ok(Self { rules })
    }

    /// Rewrite every recognised root-absolute url in `text`.
    pub fn apply(&self, text: &str, prefix: &RelativePrefix) -> Rewritten {
        let prefix = prefix.as_str();
        let mut content = text.to_string();
        let mut rewrites = 0;

        for rule in &self.rules {
            let mut hits = 0;
            let replaced = rule.pattern.replace_all(&content, |caps: &Captures<'_>| {
                hits += 1;
                rule.replacement.render(caps, prefix)
            });
            if hits > 0 {
                content = replaced.into_owned();
                rewrites += hits;
            }
        }

        Rewritten { content, rewrites }
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
