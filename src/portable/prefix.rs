//! Directory depth and relative prefix of a file inside the site root.

use std::fmt;
use std::path::{Component, Path};

use super::PortableError;

/// Prefix that leads from a file's directory back to the site root.
///
/// `./` for files directly in the root, otherwise `../` once per directory
/// level. Prepending it to an absolute url with its leading `/` removed
/// resolves to the same target from the file's own location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePrefix(String);

impl RelativePrefix {
    /// Prefix for a file `depth` directories below the root.
    pub fn for_depth(depth: usize) -> Self {
        if depth == 0 {
            Self("./".to_string())
        } else {
            Self("../".repeat(depth))
        }
    }

    /// Prefix for `file`, which must be a descendant of `root`.
    pub fn for_file(root: &Path, file: &Path) -> Result<Self, PortableError> {
        depth(root, file).map(Self::for_depth)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of directories between `root` and `file`, excluding the filename.
///
/// # Examples
/// ```ignore
/// depth("/site", "/site/index.html")                 -> 0
/// depth("/site", "/site/about/index.html")           -> 1
/// depth("/site", "/site/products/widget/index.html") -> 2
/// ```
pub fn depth(root: &Path, file: &Path) -> Result<usize, PortableError> {
    let outside = || PortableError::OutsideRoot {
        file: file.to_path_buf(),
        root: root.to_path_buf(),
    };

    let relative = file.strip_prefix(root).map_err(|_| outside())?;

    // Lexical check only: `..` or `.` would make the count meaningless
    let mut segments: usize = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => segments += 1,
            _ => return Err(outside()),
        }
    }

    // The root itself has no filename to discount
    segments.checked_sub(1).ok_or_else(outside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_for_depth() {
        assert_eq!(RelativePrefix::for_depth(0).as_str(), "./");
        assert_eq!(RelativePrefix::for_depth(1).as_str(), "../");
        assert_eq!(RelativePrefix::for_depth(2).as_str(), "../../");
        assert_eq!(RelativePrefix::for_depth(5).as_str(), "../".repeat(5));
    }

    #[test]
    fn test_depth() {
        let root = Path::new("/srv/_site");
        assert_eq!(depth(root, Path::new("/srv/_site/index.html")).unwrap(), 0);
        assert_eq!(
            depth(root, Path::new("/srv/_site/about/index.html")).unwrap(),
            1
        );
        assert_eq!(
            depth(root, Path::new("/srv/_site/products/widget/index.html")).unwrap(),
            2
        );
    }

    #[test]
    fn test_depth_relative_root() {
        let root = Path::new("_site");
        assert_eq!(depth(root, Path::new("_site/contact/index.html")).unwrap(), 1);
    }

    #[test]
    fn test_for_file() {
        let root = Path::new("/srv/_site");
        let prefix =
            RelativePrefix::for_file(root, Path::new("/srv/_site/products/widget/index.html"))
                .unwrap();
        assert_eq!(prefix.to_string(), "../../");
    }

    #[test]
    fn test_outside_root() {
        let root = Path::new("/srv/_site");
        for file in [
            "/srv/other/index.html",
            "/srv/_site",
            "/srv/_site/../escape.html",
        ] {
            assert!(
                matches!(
                    depth(root, Path::new(file)),
                    Err(PortableError::OutsideRoot { .. })
                ),
                "{file} should be rejected"
            );
        }
    }
}
