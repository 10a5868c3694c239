use std::path::Path;

use indexmap::{IndexMap, IndexSet};

/// Rendered output of every template, keyed by relative output path.
///
/// Paths use `/` as separator regardless of platform. Insertion order is
/// preserved so that materialization and the progress transcript are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFileSet {
    files: IndexMap<String, String>,
}

impl RenderedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rendered file, returning the previous content if the path
    /// was already present.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), content.into())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Distinct parent directories implied by the file paths, in order of
    /// first appearance. Root-level files contribute `""`.
    pub fn directories(&self) -> Vec<&str> {
        let dirs: IndexSet<&str> = self.paths().map(parent_dir).collect();
        dirs.into_iter().collect()
    }
}

fn parent_dir(path: &str) -> &str {
    match Path::new(path).parent().and_then(|p| p.to_str()) {
        Some(parent) => parent,
        None => "",
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for RenderedFileSet {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (path, content) in iter {
            set.insert(path, content);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = RenderedFileSet::new();
        assert!(set.is_empty());

        assert_eq!(set.insert("a.txt", "first"), None);
        assert_eq!(set.insert("a.txt", "second"), Some("first".to_string()));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a.txt"), Some("second"));
        assert!(set.contains("a.txt"));
        assert!(!set.contains("b.txt"));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let set: RenderedFileSet = [("z.txt", ""), ("a.txt", ""), ("m/n.txt", "")]
            .into_iter()
            .collect();

        let paths: Vec<_> = set.paths().collect();
        assert_eq!(paths, vec!["z.txt", "a.txt", "m/n.txt"]);
    }

    #[test]
    fn test_directories_are_distinct() {
        let set: RenderedFileSet = [
            ("cmd/api/main.go", ""),
            ("server/server.go", ""),
            ("server/routes.go", ""),
            ("go.mod", ""),
            (".env", ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.directories(), vec!["cmd/api", "server", ""]);
    }

    #[test]
    fn test_directories_empty_set() {
        assert!(RenderedFileSet::new().directories().is_empty());
    }
}
