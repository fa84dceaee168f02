//! Broken link detection.

use std::fmt;

use serde::Serialize;

use crate::descriptor::SiteMeta;
use crate::documents::KnownDocuments;
use crate::link::{LinkTarget, document_candidates, strip_fragment};

/// Internal link whose target is not a known document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Location of the owning node (e.g., `themeConfig.sidebar[0].items[2]`).
    pub location: String,
    /// Display label of the owning node.
    pub text: String,
    /// Link as authored.
    pub link: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\" -> {}", self.location, self.text, self.link)
    }
}

/// Check whether an authored link points at an existing document.
///
/// External and same-page links always resolve. An internal link resolves
/// when its authored path (without fragment or query) is known as written,
/// or when one of its normalized document candidates is.
#[must_use]
pub fn resolves(link: &str, known: &impl KnownDocuments) -> bool {
    match LinkTarget::classify(link) {
        LinkTarget::External | LinkTarget::SamePage => true,
        LinkTarget::Internal(path) => {
            known.contains_document(strip_fragment(link.trim()))
                || document_candidates(&path)
                    .iter()
                    .any(|candidate| known.contains_document(candidate))
        }
    }
}

/// Report every internal link in `descriptor` that is missing from `known`.
///
/// One entry per offending `link` field, in the order of
/// [`SiteMeta::links`]. External URLs are never reported.
#[must_use]
pub fn validate_links(descriptor: &SiteMeta, known: &impl KnownDocuments) -> Vec<BrokenLink> {
    let broken: Vec<BrokenLink> = descriptor
        .links()
        .into_iter()
        .filter(|link_ref| !resolves(link_ref.link, known))
        .map(|link_ref| BrokenLink {
            location: link_ref.location,
            text: link_ref.text.to_owned(),
            link: link_ref.link.to_owned(),
        })
        .collect();

    for link in &broken {
        tracing::debug!(location = %link.location, link = %link.link, "Broken link");
    }
    broken
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::documents::DocumentSet;
    use crate::loader::{Format, load_str};
    use pretty_assertions::assert_eq;

    fn descriptor(json: &str) -> SiteMeta {
        load_str(json, Format::Json).unwrap()
    }

    #[test]
    fn test_single_missing_leaf_reported() {
        let meta = descriptor(
            r#"{ "themeConfig": { "sidebar": [
                { "text": "Guide", "link": "/guide.md" },
                { "text": "Missing", "link": "/missing.md" }
            ] } }"#,
        );
        let known: HashSet<String> = HashSet::from(["/guide.md".to_owned()]);

        let broken = validate_links(&meta, &known);

        assert_eq!(
            broken,
            vec![BrokenLink {
                location: "themeConfig.sidebar[1]".to_owned(),
                text: "Missing".to_owned(),
                link: "/missing.md".to_owned(),
            }]
        );
    }

    #[test]
    fn test_all_links_known_reports_nothing() {
        let meta = descriptor(
            r#"{ "themeConfig": {
                "nav": [{ "text": "Home", "link": "/" }],
                "sidebar": [{ "text": "Usage", "items": [
                    { "text": "Start", "link": "/start/" },
                    { "text": "API", "link": "/api" }
                ] }]
            } }"#,
        );
        let known: DocumentSet = ["/index.md", "/start/index.md", "/api.md"]
            .into_iter()
            .collect();

        assert!(validate_links(&meta, &known).is_empty());
    }

    #[test]
    fn test_external_links_never_reported() {
        let meta = descriptor(
            r#"{ "themeConfig": {
                "nav": [{ "text": "Blog", "link": "https://blog.example.com" }],
                "sidebar": [{ "text": "Demo", "link": "http://stock.example.com/" }],
                "socialLinks": [{ "icon": "github", "link": "https://github.com/example" }]
            } }"#,
        );

        assert!(validate_links(&meta, &DocumentSet::new()).is_empty());
    }

    #[test]
    fn test_one_entry_per_broken_link_field() {
        let meta = descriptor(
            r#"{ "themeConfig": {
                "nav": [{ "text": "Start", "link": "/gone.md" }],
                "sidebar": [{ "text": "Group", "link": "/gone.md", "items": [
                    { "text": "Leaf", "link": "/gone.md" }
                ] }]
            } }"#,
        );

        let broken = validate_links(&meta, &DocumentSet::new());

        let locations: Vec<_> = broken.iter().map(|b| b.location.as_str()).collect();
        assert_eq!(
            locations,
            vec![
                "themeConfig.nav[0]",
                "themeConfig.sidebar[0]",
                "themeConfig.sidebar[0].items[0]",
            ]
        );
    }

    #[test]
    fn test_extensionless_link_resolves_to_markdown() {
        let known: DocumentSet = ["/开发文档/虚拟股票API接口文档.md"].into_iter().collect();
        assert!(resolves("/开发文档/虚拟股票API接口文档", &known));
        assert!(!resolves("/开发文档/不存在", &known));
    }

    #[test]
    fn test_fragment_and_encoded_links_resolve() {
        let known: DocumentSet = ["/guide/setup.md", "/快速开始.md"].into_iter().collect();
        assert!(resolves("/guide/setup.md#install", &known));
        assert!(resolves("/guide/setup.html", &known));
        assert!(resolves("/%E5%BF%AB%E9%80%9F%E5%BC%80%E5%A7%8B", &known));
        assert!(resolves("#top", &known));
    }

    #[test]
    fn test_links_matching_known_paths_verbatim_resolve() {
        let meta = descriptor(
            r#"{ "themeConfig": { "sidebar": [
                { "text": "Guide", "link": "/guide/" },
                { "text": "Page", "link": "/my%20page.md" },
                { "text": "Anchored", "link": "/my%20page.md#usage" }
            ] } }"#,
        );
        let known: HashSet<String> =
            HashSet::from(["/guide/".to_owned(), "/my%20page.md".to_owned()]);

        assert_eq!(validate_links(&meta, &known), Vec::new());
    }

    #[test]
    fn test_broken_link_display() {
        let link = BrokenLink {
            location: "themeConfig.nav[1]".to_owned(),
            text: "Guide".to_owned(),
            link: "/guide.md".to_owned(),
        };
        assert_eq!(link.to_string(), "themeConfig.nav[1]: \"Guide\" -> /guide.md");
    }
}
