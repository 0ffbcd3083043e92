//! Portabilization of a rendered site tree.
//!
//! Rewrites root-absolute urls (`/static/app.js`, `/about/`, `/`) in every
//! HTML file into paths relative to that file, so the tree can be served
//! from any base path or opened straight from disk.
//!
//! - [`prefix`]: depth of a file below the root and its `./` / `../` prefix
//! - [`rules`]: ordered regex rewrite rules
//! - [`walk`]: html file discovery and in-place rewriting

mod error;
pub mod prefix;
pub mod rules;
pub mod walk;

pub use error::PortableError;
pub use prefix::RelativePrefix;
pub use rules::RuleSet;
pub use walk::make_portable;
