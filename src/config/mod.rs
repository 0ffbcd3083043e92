//! Configuration management for `portify.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── site       # [site]
//! ├── util       # url path extraction, config file lookup
//! └── mod.rs     # PortableConfig (this file)
//! ```
//!
//! The config file is optional. Without one every field takes its default
//! and relative paths resolve against the current directory.

mod error;
mod site;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use site::SiteSectionConfig;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "portify.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing portify.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortableConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub project_dir: PathBuf,

    /// Site tree settings
    #[serde(default)]
    pub site: SiteSectionConfig,
}

impl PortableConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. An explicit `--config`
    /// that cannot be found is an error; a missing default config is not.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME));

        let mut config = match find_config_file(&cwd, &name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.project_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if cli.config.is_some() => return Err(ConfigError::NotFound(name).into()),
            None => Self {
                project_dir: cwd.clone(),
                ..Self::default()
            },
        };

        config.apply_cli(cli, &cwd);
        config.validate()?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    ///
    /// `--root` is relative to cwd, not to the config file.
    fn apply_cli(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(root) = &cli.root {
            self.site.root = cwd.join(root);
        }
        if let Some(url) = &cli.site_url {
            // A deployment URL given on the command line supersedes a file base
            self.site.url = Some(url.clone());
            self.site.base = None;
        }
        if let Some(base) = &cli.base {
            self.site.base = Some(base.clone());
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        diag.into_result()
    }

    /// Absolute path of the rendered site directory.
    pub fn site_root(&self) -> PathBuf {
        if self.site.root.is_absolute() {
            self.site.root.clone()
        } else {
            self.project_dir.join(&self.site.root)
        }
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PortableConfig {
    let (parsed, ignored) = PortableConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site, SiteSectionConfig::default());
    }

    #[test]
    fn test_parse_site_section() {
        let config = test_parse_config(
            r#"[site]
root = "public"
url = "https://example.github.io/jaqman-chemicals/"
pages = ["about", "team"]
assets = ["assets"]
extensions = ["html", "htm"]
"#,
        );
        assert_eq!(config.site.root, PathBuf::from("public"));
        assert_eq!(config.site.pages, vec!["about", "team"]);
        assert_eq!(config.site.assets, vec!["assets"]);
        assert_eq!(config.site.extensions, vec!["html", "htm"]);
        assert_eq!(
            config.site.base_segment().as_deref(),
            Some("jaqman-chemicals")
        );
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) =
            PortableConfig::parse_with_ignored("[site]\nroot = \"_site\"\nthemes = 1\n").unwrap();
        assert_eq!(ignored, vec!["site.themes".to_string()]);
    }

    #[test]
    fn test_invalid_toml() {
        let result = PortableConfig::parse_with_ignored("[site\nroot = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_root_resolution() {
        let mut config = PortableConfig {
            project_dir: PathBuf::from("/srv/project"),
            ..Default::default()
        };
        assert_eq!(config.site_root(), PathBuf::from("/srv/project/_site"));

        config.site.root = PathBuf::from("/var/www/site");
        assert_eq!(config.site_root(), PathBuf::from("/var/www/site"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = test_parse_config("[site]\nbase = \"from-file\"\n");
        let cli = Cli::parse_from([
            "portify",
            "--root",
            "out",
            "--site-url",
            "https://example.github.io/from-url/",
        ]);
        config.apply_cli(&cli, Path::new("/work"));

        assert_eq!(config.site_root(), PathBuf::from("/work/out"));
        assert_eq!(config.site.base_segment().as_deref(), Some("from-url"));

        let cli = Cli::parse_from(["portify", "-b", "explicit"]);
        config.apply_cli(&cli, Path::new("/work"));
        assert_eq!(config.site.base_segment().as_deref(), Some("explicit"));
    }
}
