//! Builds one [`Toc`] per language from the index file.

use std::path::Path;
use std::sync::Arc;

use peach_renderer::ContentRenderer;

use crate::TocError;
use crate::index::TocIndex;
use crate::node::{ContentResolver, Node};
use crate::registry::Registry;
use crate::toc::Toc;

/// Loads documentation trees for a fixed list of languages.
#[derive(Debug)]
pub struct TocLoader {
    langs: Vec<String>,
    resolver: Arc<ContentResolver>,
}

impl TocLoader {
    /// Create a loader.
    ///
    /// # Arguments
    ///
    /// * `langs` - Language codes; the first is the default language
    /// * `renderer` - Markdown renderer shared by every node
    /// * `cache_content` - Render documents once at load time (`true`) or on
    ///   every access (`false`)
    #[must_use]
    pub fn new(langs: Vec<String>, renderer: Arc<dyn ContentRenderer>, cache_content: bool) -> Self {
        Self {
            langs,
            resolver: Arc::new(ContentResolver::new(renderer, cache_content)),
        }
    }

    /// Configured language codes.
    #[must_use]
    pub fn langs(&self) -> &[String] {
        &self.langs
    }

    /// Read `TOC.toml` under `root` and load every language's tree.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Index` if the index is missing, unreadable or
    /// malformed, and
    /// `TocError::Read` if a document exists but cannot be read. Missing
    /// documents are not errors.
    pub fn load(&self, root: &Path) -> Result<Registry, TocError> {
        let index = TocIndex::load(root)?;

        let tocs = self
            .langs
            .iter()
            .map(|lang| {
                let toc = self.build(root, lang, &index)?;
                Ok((lang.clone(), Arc::new(toc)))
            })
            .collect::<Result<_, TocError>>()?;

        log_tree(&index);

        Ok(Registry::new(self.langs.clone(), tocs))
    }

    fn build(&self, root: &Path, lang: &str, index: &TocIndex) -> Result<Toc, TocError> {
        let lang_root = root.join(lang);
        let mut toc = Toc::new(lang, root);

        for entry in &index.dirs {
            let Some((first, rest)) = entry.files.split_first() else {
                continue;
            };

            let dir_root = lang_root.join(&entry.name);
            let mut dir = self.node(&entry.name, &dir_root, first)?;
            for file in rest {
                dir.push_child(self.node(file, &dir_root, file)?);
            }
            toc.push_node(dir);
        }

        for page in &index.pages {
            toc.push_page(self.node(page, &lang_root, page)?);
        }

        Ok(toc)
    }

    /// Create and load a node for `<dir>/<file>.md`.
    fn node(&self, name: &str, dir: &Path, file: &str) -> Result<Node, TocError> {
        let node = Node::new(
            name,
            dir.join(format!("{file}.md")),
            Arc::clone(&self.resolver),
        );
        node.load()?;
        Ok(node)
    }
}

fn log_tree(index: &TocIndex) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for entry in index.dirs.iter().filter(|e| !e.files.is_empty()) {
        tracing::debug!("{}/", entry.name);
        for file in &entry.files[1..] {
            tracing::debug!("{}|__ {file}", " ".repeat(entry.name.len()));
        }
    }
    for page in &index.pages {
        tracing::debug!("{page}");
    }
}
