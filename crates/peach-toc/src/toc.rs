//! Per-language table of contents.
//!
//! A [`Toc`] is a strict two-level hierarchy: directory nodes, each backed
//! by its first document, holding file nodes. Standalone pages live in a
//! separate flat list and take no part in path lookup or search.

use std::path::{Path, PathBuf};

use crate::node::Node;

/// Outcome of resolving a path within one [`Toc`].
#[derive(Debug)]
pub enum Lookup<'a> {
    /// The path resolves to a node with content in this language.
    Found(&'a Node),
    /// The path names a file node whose document is missing in this
    /// language; the default language should be tried.
    Untranslated,
    /// The path does not name any node.
    NotFound,
}

/// Table of contents for one language.
#[derive(Debug)]
pub struct Toc {
    lang: String,
    root: PathBuf,
    nodes: Vec<Node>,
    pages: Vec<Node>,
}

impl Toc {
    /// Create an empty table of contents.
    #[must_use]
    pub fn new(lang: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            lang: lang.into(),
            root: root.into(),
            nodes: Vec::new(),
            pages: Vec::new(),
        }
    }

    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub(crate) fn push_page(&mut self, page: Node) {
        self.pages.push(page);
    }

    /// Language code of this table of contents.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Documentation root all node paths are resolved under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Standalone pages in index order.
    #[must_use]
    pub fn pages(&self) -> &[Node] {
        &self.pages
    }

    /// Number of directory and file nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(|n| 1 + n.children().len()).sum()
    }

    /// Find a standalone page by name.
    #[must_use]
    pub fn page(&self, name: &str) -> Option<&Node> {
        self.pages.iter().find(|p| p.name() == name)
    }

    /// Resolve a slash-separated path.
    ///
    /// - `""` resolves to the first directory node unless it is plain
    /// - `"dir"` resolves to a directory node
    /// - `"dir/file"` resolves to a file node, or [`Lookup::Untranslated`]
    ///   when its document is missing on disk
    ///
    /// A single leading slash is ignored. Segments match exactly and
    /// case-sensitively; segments after the second are ignored.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        let path = path.strip_prefix('/').unwrap_or(path);

        if path.is_empty() {
            return match self.nodes.first() {
                Some(node) if !node.is_plain() => Lookup::Found(node),
                _ => Lookup::NotFound,
            };
        }

        let mut segments = path.split('/');
        let dir_name = segments.next().unwrap_or_default();
        let Some(dir) = self.nodes.iter().find(|n| n.name() == dir_name) else {
            return Lookup::NotFound;
        };

        let Some(file_name) = segments.next() else {
            return Lookup::Found(dir);
        };

        match dir.children().iter().find(|n| n.name() == file_name) {
            Some(file) if file.exists() => Lookup::Found(file),
            Some(_) => Lookup::Untranslated,
            None => Lookup::NotFound,
        }
    }
}
