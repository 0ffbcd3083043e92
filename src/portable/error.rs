//! Portabilization error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a portabilization run.
///
/// Unrecognised url shapes are never errors; they are left as they are.
#[derive(Debug, Error)]
pub enum PortableError {
    #[error("site root `{0}` does not exist")]
    RootNotFound(PathBuf),

    #[error("`{file}` is not inside site root `{root}`")]
    OutsideRoot { file: PathBuf, root: PathBuf },

    #[error("failed to list site files")]
    Walk(#[from] jwalk::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("invalid rewrite pattern")]
    Pattern(#[from] regex::Error),
}
