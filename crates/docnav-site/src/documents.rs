//! Known document paths.
//!
//! Link validation needs to know which documents exist in the content
//! tree. [`KnownDocuments`] abstracts that lookup; [`DocumentSet`] is the
//! standard implementation, built from a list or by walking a directory.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Lookup of document paths (e.g., `/guide/intro.md`).
pub trait KnownDocuments {
    /// Check whether a document exists at `path`.
    fn contains_document(&self, path: &str) -> bool;
}

impl KnownDocuments for HashSet<String> {
    fn contains_document(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl KnownDocuments for BTreeSet<String> {
    fn contains_document(&self, path: &str) -> bool {
        self.contains(path)
    }
}

/// Set of document paths, each with a leading slash and `/` separators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSet {
    paths: BTreeSet<String>,
}

impl DocumentSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every markdown document below `content_dir`.
    ///
    /// Hidden files and directories (leading `.`) are skipped, which keeps
    /// generator state such as `.vitepress/` out of the set. Returns an
    /// empty set if the directory doesn't exist.
    #[must_use]
    pub fn scan(content_dir: &Path) -> Self {
        let mut set = Self::new();
        if content_dir.is_dir() {
            scan_directory(content_dir, "", &mut set);
        }
        tracing::info!(
            dir = %content_dir.display(),
            documents = set.len(),
            "Scanned content directory"
        );
        set
    }

    /// Add a document path, normalizing it to start with `/`.
    pub fn insert(&mut self, path: &str) {
        if path.starts_with('/') {
            self.paths.insert(path.to_owned());
        } else {
            self.paths.insert(format!("/{path}"));
        }
    }

    /// Check whether the set contains `path` exactly.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over document paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl KnownDocuments for DocumentSet {
    fn contains_document(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl<S: AsRef<str>> FromIterator<S> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path.as_ref());
        }
        set
    }
}

/// Walk `dir` and add its markdown files under `prefix`.
fn scan_directory(dir: &Path, prefix: &str, set: &mut DocumentSet) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let rel = format!("{prefix}/{name}");
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&entry.path(), &rel, set);
        } else if Path::new(&name).extension().is_some_and(|e| e == "md") {
            set.paths.insert(rel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_normalizes_leading_slash() {
        let mut set = DocumentSet::new();
        set.insert("guide.md");
        set.insert("/api/index.md");

        assert!(set.contains("/guide.md"));
        assert!(set.contains("/api/index.md"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_iter() {
        let set: DocumentSet = ["/a.md", "b/c.md"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["/a.md", "/b/c.md"]);
    }

    #[test]
    fn test_scan_nested_structure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("index.md"), "# Home").unwrap();

        let guide = root.join("开发文档").join("快速开始");
        fs::create_dir_all(&guide).unwrap();
        fs::write(guide.join("快速开始.md"), "# Start").unwrap();
        fs::write(guide.join("notes.txt"), "not a doc").unwrap();

        let set = DocumentSet::scan(root);

        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["/index.md", "/开发文档/快速开始/快速开始.md"]
        );
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let vitepress = root.join(".vitepress");
        fs::create_dir(&vitepress).unwrap();
        fs::write(vitepress.join("theme.md"), "# Theme").unwrap();
        fs::write(root.join(".draft.md"), "# Draft").unwrap();
        fs::write(root.join("visible.md"), "# Visible").unwrap();

        let set = DocumentSet::scan(root);

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["/visible.md"]);
    }

    #[test]
    fn test_scan_logged_at_info() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("index.md"), "# Home").unwrap();

        let logged = crate::test_log::capture_info(|| {
            DocumentSet::scan(temp_dir.path());
        });

        assert!(logged.contains("Scanned content directory"), "{logged}");
        assert!(logged.contains("documents=1"), "{logged}");
    }

    #[test]
    fn test_scan_missing_dir() {
        let set = DocumentSet::scan(Path::new("/nonexistent/docs"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_hash_set_is_known_documents() {
        let set: HashSet<String> = HashSet::from(["/guide.md".to_owned()]);
        assert!(set.contains_document("/guide.md"));
        assert!(!set.contains_document("/missing.md"));
    }
}
