//! Immutable per-language snapshot of all loaded trees.

use std::collections::HashMap;
use std::sync::Arc;

use crate::node::Node;
use crate::search::SearchResult;
use crate::toc::{Lookup, Toc};

/// A resolved document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doc {
    /// Display title.
    pub title: String,
    /// Rendered HTML, `None` if the document has no content.
    pub content: Option<Arc<str>>,
    /// Served from the default language because the requested one lacks it.
    pub is_fallback: bool,
}

impl Doc {
    fn from_node(node: &Node, is_fallback: bool) -> Self {
        // Content first: without caching it re-reads the file and may update
        // the title.
        let content = node.content();
        Self {
            title: node.title(),
            content,
            is_fallback,
        }
    }
}

/// Language code to [`Toc`] mapping.
///
/// Built by [`TocLoader`](crate::TocLoader) and never mutated; a reload
/// produces a new registry.
#[derive(Debug, Default)]
pub struct Registry {
    langs: Vec<String>,
    tocs: HashMap<String, Arc<Toc>>,
}

impl Registry {
    /// Create a registry. The first language is the default.
    #[must_use]
    pub fn new(langs: Vec<String>, tocs: HashMap<String, Arc<Toc>>) -> Self {
        Self { langs, tocs }
    }

    /// Registry with no languages, served before the first reload.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Configured languages, default first.
    #[must_use]
    pub fn langs(&self) -> &[String] {
        &self.langs
    }

    /// The first configured language.
    #[must_use]
    pub fn default_lang(&self) -> Option<&str> {
        self.langs.first().map(String::as_str)
    }

    /// Tree for `lang`.
    #[must_use]
    pub fn toc(&self, lang: &str) -> Option<&Arc<Toc>> {
        self.tocs.get(lang)
    }

    /// Directory and file nodes across all languages.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tocs.values().map(|t| t.node_count()).sum()
    }

    /// Resolve `path` in `lang`.
    ///
    /// A `dir/file` document missing in `lang` is looked up once in the
    /// default language and marked as a fallback. Returns `None` for unknown
    /// languages and paths, and for plain root documents.
    #[must_use]
    pub fn get_doc(&self, lang: &str, path: &str) -> Option<Doc> {
        match self.toc(lang)?.lookup(path) {
            Lookup::Found(node) => Some(Doc::from_node(node, false)),
            Lookup::NotFound => None,
            Lookup::Untranslated => {
                let default = self.default_lang().filter(|d| *d != lang)?;
                match self.toc(default)?.lookup(path) {
                    Lookup::Found(node) => Some(Doc::from_node(node, true)),
                    Lookup::Untranslated | Lookup::NotFound => None,
                }
            }
        }
    }

    /// Search `lang` for `query`. Unknown languages yield no results.
    #[must_use]
    pub fn search(&self, lang: &str, query: &str) -> Vec<SearchResult> {
        self.toc(lang).map(|t| t.search(query)).unwrap_or_default()
    }

    /// Standalone page `name` in `lang`, without language fallback.
    ///
    /// Returns `None` if the page is unknown, missing on disk or plain.
    #[must_use]
    pub fn get_page(&self, lang: &str, name: &str) -> Option<Doc> {
        let page = self.toc(lang)?.page(name)?;
        if !page.exists() || page.is_plain() {
            return None;
        }
        Some(Doc::from_node(page, false))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::TocLoader;
    use crate::index::INDEX_FILENAME;
    use crate::testing::{StubRenderer, write_doc};

    const INDEX: &str = r#"
guide-key = "guide"

[guide]
first = "intro"
second = "setup"

[pages]
faq = "faq"
about = "about"
"#;

    /// Two languages; `fr` lacks `guide/setup`.
    fn registry(root: &std::path::Path) -> Registry {
        write_doc(root, INDEX_FILENAME, INDEX);
        write_doc(root, "en/guide/intro.md", "---\nname: Guide\n---\nWelcome");
        write_doc(root, "en/guide/setup.md", "---\nname: Setup\n---\nInstall Peach");
        write_doc(root, "en/faq.md", "Questions");
        write_doc(root, "en/about.md", "---\nname: About\n---\n");
        write_doc(root, "fr/guide/intro.md", "---\nname: Guide FR\n---\nBienvenue");

        TocLoader::new(
            vec!["en".to_owned(), "fr".to_owned()],
            Arc::new(StubRenderer),
            true,
        )
        .load(root)
        .unwrap()
    }

    fn doc(title: &str, content: &str, is_fallback: bool) -> Doc {
        Doc {
            title: title.to_owned(),
            content: Some(Arc::from(content)),
            is_fallback,
        }
    }

    #[test]
    fn test_get_doc_root_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(
            registry.get_doc("en", ""),
            Some(doc("Guide", "<p>Welcome</p>", false))
        );
        assert_eq!(
            registry.get_doc("fr", "/guide"),
            Some(doc("Guide FR", "<p>Bienvenue</p>", false))
        );
    }

    #[test]
    fn test_get_doc_file() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(
            registry.get_doc("en", "guide/setup"),
            Some(doc("Setup", "<p>Install Peach</p>", false))
        );
    }

    #[test]
    fn test_get_doc_falls_back_to_default_language() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(
            registry.get_doc("fr", "guide/setup"),
            Some(doc("Setup", "<p>Install Peach</p>", true))
        );
    }

    #[test]
    fn test_fallback_is_a_single_hop() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());
        std::fs::remove_file(dir.path().join("en/guide/setup.md")).unwrap();

        assert_eq!(registry.get_doc("fr", "guide/setup"), None);
        assert_eq!(registry.get_doc("en", "guide/setup"), None);
    }

    #[test]
    fn test_get_doc_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(registry.get_doc("en", "guide/nope"), None);
        assert_eq!(registry.get_doc("en", "nope"), None);
        assert_eq!(registry.get_doc("de", "guide"), None);
    }

    #[test]
    fn test_search_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        let results = registry.search("en", "peach");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "guide/setup");
        assert_eq!(results[0].title, "Setup");

        assert!(registry.search("fr", "peach").is_empty());
        assert!(registry.search("de", "peach").is_empty());
        assert!(registry.search("en", "").is_empty());
    }

    #[test]
    fn test_get_page() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(
            registry.get_page("en", "faq"),
            Some(doc("faq", "<p>Questions</p>", false))
        );
        // Plain page.
        assert_eq!(registry.get_page("en", "about"), None);
        // Missing on disk, no fallback for pages.
        assert_eq!(registry.get_page("fr", "faq"), None);
        assert_eq!(registry.get_page("en", "nope"), None);
    }

    #[test]
    fn test_accessors() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path());

        assert_eq!(registry.default_lang(), Some("en"));
        assert_eq!(registry.node_count(), 4);
        assert!(registry.toc("fr").is_some());

        let empty = Registry::empty();
        assert_eq!(empty.default_lang(), None);
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.get_doc("en", ""), None);
    }
}
