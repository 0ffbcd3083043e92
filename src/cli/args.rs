//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Rewrite root-absolute urls in a rendered site into relative ones
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Rendered site directory (default: `_site` next to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: portify.toml, searched upward, optional)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Deployment base segment stripped from internal links (e.g. `my-project`)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Override site URL for deployment.
    ///
    /// The path component is extracted as the base segment, so deploying to
    /// `https://example.github.io/my-project` strips `/my-project/` from links.
    /// An explicit `--base` takes precedence.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
