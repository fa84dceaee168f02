//! Site navigation descriptor for docnav.
//!
//! This crate provides:
//! - [`SiteMeta`]: the typed navigation descriptor (nav bar, sidebar tree,
//!   social links, head directives, footer)
//! - [`load`]: parse and validate a descriptor from TOML, JSON or YAML
//! - [`DocumentSet`]: the document paths present in a content tree
//! - [`validate_links`]: report internal links with no matching document
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use docnav_site::{DocumentSet, load, validate_links};
//!
//! let descriptor = load(Path::new("site.toml"))?;
//! let documents = DocumentSet::scan(Path::new("docs"));
//!
//! for broken in validate_links(&descriptor, &documents) {
//!     eprintln!("broken link: {broken}");
//! }
//! # Ok(())
//! # }
//! ```

mod descriptor;
mod documents;
mod error;
mod link;
mod loader;
mod raw;
mod sidebar;
#[cfg(test)]
mod test_log;
mod validate;

pub use descriptor::{AttrValue, HeadTag, NavItem, SiteMeta, SocialIcon, SocialLink, UnknownIcon};
pub use documents::{DocumentSet, KnownDocuments};
pub use error::DescriptorError;
pub use link::{LinkRef, LinkTarget};
pub use loader::{Format, load, load_str};
pub use sidebar::{SidebarGroup, SidebarLeaf, SidebarNode};
pub use validate::{BrokenLink, resolves, validate_links};
