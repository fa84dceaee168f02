//! Link classification and document path resolution.
//!
//! `link` fields mix external URLs and internal document paths with no
//! explicit tag. A link is external when it starts with a URI scheme
//! (`https:`, `mailto:`, ...) or is protocol-relative (`//host`);
//! everything else names a document in the content tree.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// A `link` field found while walking a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRef<'a> {
    /// Location of the owning node (e.g., `themeConfig.nav[1]`).
    pub location: String,
    /// Display label of the owning node.
    pub text: &'a str,
    /// Link as authored.
    pub link: &'a str,
}

/// Classified link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute URL pointing outside the site.
    External,
    /// Fragment or query on the current page.
    SamePage,
    /// Document path with leading slash, decoded, without fragment or query.
    Internal(String),
}

impl LinkTarget {
    /// Classify an authored link.
    #[must_use]
    pub fn classify(link: &str) -> Self {
        let link = link.trim();
        if link.starts_with("//") || has_scheme(link) {
            return Self::External;
        }

        let path = strip_fragment(link);
        if path.is_empty() {
            return Self::SamePage;
        }

        let decoded = percent_decode_str(path)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(path));
        let normalized = if decoded.starts_with('/') {
            decoded.into_owned()
        } else {
            format!("/{decoded}")
        };
        Self::Internal(normalized)
    }
}

/// Drop a trailing `#fragment` and `?query`.
pub(crate) fn strip_fragment(link: &str) -> &str {
    link.find(['#', '?']).map_or(link, |end| &link[..end])
}

/// Check for a leading URI scheme (`[A-Za-z][A-Za-z0-9+.-]*:`).
fn has_scheme(link: &str) -> bool {
    let Some(colon) = link.find(':') else {
        return false;
    };
    let scheme = &link[..colon];
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Document paths an internal link may be routed to, most specific first.
///
/// - `/guide/` -> `/guide/index.md`
/// - `/guide.md` -> `/guide.md`
/// - `/guide.html` -> `/guide.html`, `/guide.md`
/// - `/guide` -> `/guide`, `/guide.md`, `/guide/index.md`
pub(crate) fn document_candidates(path: &str) -> Vec<String> {
    if path.ends_with('/') {
        return vec![format!("{path}index.md")];
    }
    if path.ends_with(".md") {
        return vec![path.to_owned()];
    }
    if let Some(stem) = path.strip_suffix(".html") {
        return vec![path.to_owned(), format!("{stem}.md")];
    }
    vec![
        path.to_owned(),
        format!("{path}.md"),
        format!("{path}/index.md"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_external_schemes() {
        assert_eq!(
            LinkTarget::classify("https://stock.example.com/"),
            LinkTarget::External
        );
        assert_eq!(
            LinkTarget::classify("http://example.com"),
            LinkTarget::External
        );
        assert_eq!(
            LinkTarget::classify("HTTPS://EXAMPLE.COM"),
            LinkTarget::External
        );
        assert_eq!(
            LinkTarget::classify("mailto:team@example.com"),
            LinkTarget::External
        );
        assert_eq!(
            LinkTarget::classify("//cdn.example.com/x"),
            LinkTarget::External
        );
    }

    #[test]
    fn test_classify_internal_paths() {
        assert_eq!(
            LinkTarget::classify("/guide.md"),
            LinkTarget::Internal("/guide.md".to_owned())
        );
        assert_eq!(
            LinkTarget::classify("guide/intro"),
            LinkTarget::Internal("/guide/intro".to_owned())
        );
        assert_eq!(LinkTarget::classify("/"), LinkTarget::Internal("/".to_owned()));
    }

    #[test]
    fn test_classify_colon_after_slash_is_internal() {
        assert_eq!(
            LinkTarget::classify("/notes/a:b.md"),
            LinkTarget::Internal("/notes/a:b.md".to_owned())
        );
    }

    #[test]
    fn test_classify_strips_fragment_and_query() {
        assert_eq!(
            LinkTarget::classify("/api.md#install"),
            LinkTarget::Internal("/api.md".to_owned())
        );
        assert_eq!(
            LinkTarget::classify("/api?tab=2#x"),
            LinkTarget::Internal("/api".to_owned())
        );
        assert_eq!(LinkTarget::classify("#top"), LinkTarget::SamePage);
    }

    #[test]
    fn test_classify_decodes_percent_encoding() {
        assert_eq!(
            LinkTarget::classify("/%E5%BF%AB%E9%80%9F%E5%BC%80%E5%A7%8B.md"),
            LinkTarget::Internal("/快速开始.md".to_owned())
        );
        assert_eq!(
            LinkTarget::classify("/my%20page.md"),
            LinkTarget::Internal("/my page.md".to_owned())
        );
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("/a.md#b?c"), "/a.md");
        assert_eq!(strip_fragment("/a?x=1"), "/a");
        assert_eq!(strip_fragment("/guide/"), "/guide/");
    }

    #[test]
    fn test_document_candidates() {
        assert_eq!(document_candidates("/"), vec!["/index.md"]);
        assert_eq!(document_candidates("/guide/"), vec!["/guide/index.md"]);
        assert_eq!(document_candidates("/guide.md"), vec!["/guide.md"]);
        assert_eq!(
            document_candidates("/guide.html"),
            vec!["/guide.html", "/guide.md"]
        );
        assert_eq!(
            document_candidates("/guide"),
            vec!["/guide", "/guide.md", "/guide/index.md"]
        );
    }
}
