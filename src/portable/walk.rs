//! HTML file discovery and in-place rewriting.
//!
//! Files are processed one at a time: read fully, rewritten, written back.
//! The first read or write failure aborts the run and leaves the remaining
//! files untouched.

use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};

use super::{PortableError, RelativePrefix, RuleSet};
use crate::{config::PortableConfig, debug, log, utils::plural_count};

/// Outcome of rewriting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path relative to the site root.
    pub relative: PathBuf,
    pub prefix: RelativePrefix,
    pub rewrites: usize,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub rewrites: usize,
}

/// Collect every file under `root` whose extension is in `extensions`.
///
/// Sorted so progress output is stable between runs.
pub fn collect_html_files(
    root: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, PortableError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort(true) {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(&entry.path(), extensions) {
            files.push(entry.path());
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Rewrite one file in place (or only compute the rewrite when `dry`).
pub fn process_file(
    path: &Path,
    root: &Path,
    rules: &RuleSet,
    dry: bool,
) -> Result<FileOutcome, PortableError> {
    let prefix = RelativePrefix::for_file(root, path)?;

    let content =
        fs::read_to_string(path).map_err(|err| PortableError::Read(path.to_path_buf(), err))?;
    let rewritten = rules.apply(&content, &prefix);

    if !dry {
        fs::write(path, &rewritten.content)
            .map_err(|err| PortableError::Write(path.to_path_buf(), err))?;
    }

    Ok(FileOutcome {
        relative: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        prefix,
        rewrites: rewritten.rewrites,
    })
}

/// Rewrite every HTML file under the configured site root.
///
/// A missing root aborts before any file is touched.
pub fn make_portable(config: &PortableConfig, dry: bool) -> Result<Summary, PortableError> {
    let root = config.site_root();
    if !root.is_dir() {
        return Err(PortableError::RootNotFound(root));
    }

    let rules = RuleSet::from_config(&config.site)?;
    debug!("rewrite"; "compiled {}", plural_count(rules.len(), "rule"));
    let files = collect_html_files(&root, &config.site.extensions)?;
    log!("portable"; "found {} to process", plural_count(files.len(), "html file"));

    let mut summary = Summary::default();
    for file in &files {
        let outcome = process_file(file, &root, &rules, dry)?;
        log!(if dry { "dry" } else { "portable" }; "processed: {}", outcome.relative.display());
        debug!(
            "rewrite";
            "{} with prefix `{}`",
            plural_count(outcome.rewrites, "reference"),
            outcome.prefix
        );

        summary.files += 1;
        summary.rewrites += outcome.rewrites;
    }

    Ok(summary)
}
