//! The portabilization command.

use anyhow::{Context, Result};

use crate::{config::PortableConfig, debug, log, portable, utils::plural_count};

/// Rewrite the configured site tree and print the final summary.
pub fn make_site_portable(config: &PortableConfig, dry: bool) -> Result<()> {
    match &config.config_path {
        Some(path) => debug!("config"; "loaded {}", path.display()),
        None => debug!("config"; "no config file, using defaults"),
    }
    match config.site.base_segment() {
        Some(base) => debug!("config"; "base segment `{}`", base),
        None => debug!("config"; "no base segment"),
    }

    let root = config.site_root();
    let summary = portable::make_portable(config, dry)
        .with_context(|| format!("failed to make `{}` portable", root.display()))?;

    let files = plural_count(summary.files, "file");
    let rewrites = plural_count(summary.rewrites, "reference");
    if dry {
        log!("dry"; "would rewrite {} in {}", rewrites, files);
    } else {
        log!("done"; "processed {} ({} rewritten)", files, rewrites);
    }

    Ok(())
}
