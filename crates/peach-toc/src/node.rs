//! TOC nodes and lazy content resolution.
//!
//! A [`Node`] is backed by one markdown file. Its rendered HTML, search text
//! and front matter title are resolved by a shared [`ContentResolver`]:
//!
//! - with `cache_content` enabled the file is read once, at load time, and
//!   every [`Node::content`] call returns the cached result
//! - with `cache_content` disabled every [`Node::content`] call re-reads the
//!   file so edits show up without a reload; a failed re-read is logged and
//!   the last good content is returned

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use peach_renderer::ContentRenderer;

use crate::TocError;
use crate::front_matter::parse_front_matter;

/// Renders document files into node content.
///
/// Shared by every node of a load; carries the renderer and the caching mode.
pub struct ContentResolver {
    renderer: Arc<dyn ContentRenderer>,
    cache_content: bool,
}

impl ContentResolver {
    /// Create a resolver.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Markdown renderer for bodies and search text
    /// * `cache_content` - Keep content from load time (`true`) or re-read
    ///   the file on every access (`false`)
    #[must_use]
    pub fn new(renderer: Arc<dyn ContentRenderer>, cache_content: bool) -> Self {
        Self {
            renderer,
            cache_content,
        }
    }

    /// Whether content is cached after the first read.
    #[must_use]
    pub fn cache_content(&self) -> bool {
        self.cache_content
    }

    fn resolve(&self, data: &str) -> Resolved {
        let front_matter = parse_front_matter(data);
        let body = front_matter.body;
        let title = front_matter.name.map(str::to_owned);

        if body.trim().is_empty() {
            return Resolved {
                title,
                plain: true,
                ..Resolved::default()
            };
        }

        Resolved {
            title,
            html: Some(Arc::from(self.renderer.render_body(body))),
            text: Arc::from(self.renderer.render_plain_text(body).to_lowercase()),
            plain: false,
        }
    }
}

impl fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentResolver")
            .field("cache_content", &self.cache_content)
            .finish_non_exhaustive()
    }
}

/// Content resolved from a node's backing file.
#[derive(Clone, Debug, Default)]
struct Resolved {
    /// Title from front matter.
    title: Option<String>,
    /// Rendered HTML. `None` for plain or unread documents.
    html: Option<Arc<str>>,
    /// Lowercased plain text for search.
    text: Arc<str>,
    /// Body is empty after front matter.
    plain: bool,
}

/// A directory, file or standalone page entry of a [`Toc`](crate::Toc).
///
/// Directory nodes are backed by their first listed file and hold the rest
/// as children. File nodes and pages have no children.
pub struct Node {
    name: String,
    path: PathBuf,
    children: Vec<Node>,
    resolver: Arc<ContentResolver>,
    resolved: RwLock<Resolved>,
}

impl Node {
    /// Create an unresolved node.
    pub(crate) fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        resolver: Arc<ContentResolver>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children: Vec::new(),
            resolver,
            resolved: RwLock::new(Resolved::default()),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Path segment identifying this node among its siblings.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title: the front matter `name`, or the node name.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn title(&self) -> String {
        self.resolved
            .read()
            .unwrap()
            .title
            .clone()
            .unwrap_or_else(|| self.name.clone())
    }

    /// Backing markdown file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Child file nodes, in index order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Whether the document body is empty.
    ///
    /// Plain nodes only group their children and have no content of their own.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.resolved.read().unwrap().plain
    }

    /// Rendered HTML of the document body.
    ///
    /// Returns `None` for plain nodes and for nodes whose file could not be
    /// read. Without content caching the file is re-read first; a failed
    /// re-read is logged and the previous content is returned.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn content(&self) -> Option<Arc<str>> {
        if !self.resolver.cache_content
            && let Err(e) = self.reload_content()
        {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to reload content");
        }

        self.resolved.read().unwrap().html.clone()
    }

    /// Lowercased plain text of the document body, empty for plain nodes.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub(crate) fn text(&self) -> Arc<str> {
        Arc::clone(&self.resolved.read().unwrap().text)
    }

    /// Read the backing file and replace the resolved content.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`. On error the
    /// previous content is kept.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Read` if the file cannot be read.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn reload_content(&self) -> Result<(), TocError> {
        let data = std::fs::read(&self.path).map_err(|source| TocError::Read {
            path: self.path.clone(),
            source,
        })?;

        let resolved = self.resolver.resolve(&String::from_utf8_lossy(&data));
        *self.resolved.write().unwrap() = resolved;
        Ok(())
    }

    /// Resolve content at load time.
    ///
    /// A missing file is not an error: the node stays as an untranslated
    /// entry so lookups can fall back to the default language.
    pub(crate) fn load(&self) -> Result<(), TocError> {
        match self.reload_content() {
            Err(TocError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %self.path.display(), "Document missing, skipping content");
                Ok(())
            }
            result => result,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
