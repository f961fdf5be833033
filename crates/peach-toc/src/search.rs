//! Case-insensitive substring search over a [`Toc`].
//!
//! Directory nodes are scanned before file nodes, so every directory match
//! precedes every file match. Results are not ranked.

use serde::Serialize;

use crate::toc::Toc;

/// Characters of context kept before a match.
const CONTEXT_BEFORE: usize = 20;
/// Characters of context kept after a match.
const CONTEXT_AFTER: usize = 230;

/// A node whose text contains the query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Node title.
    pub title: String,
    /// `dir` for directory nodes, `dir/file` for file nodes.
    pub path: String,
    /// Lowercased text around the first match.
    pub snippet: String,
}

impl Toc {
    /// Find nodes whose plain text contains `query`, ignoring case.
    ///
    /// Returns an empty list for an empty query. Only the first match of
    /// each node is reported.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let mut results = Vec::with_capacity(5);

        for dir in self.nodes() {
            if let Some(snippet) = find_snippet(&dir.text(), &query) {
                results.push(SearchResult {
                    title: dir.title(),
                    path: dir.name().to_owned(),
                    snippet,
                });
            }
        }

        for dir in self.nodes() {
            for file in dir.children() {
                if let Some(snippet) = find_snippet(&file.text(), &query) {
                    results.push(SearchResult {
                        title: file.title(),
                        path: format!("{}/{}", dir.name(), file.name()),
                        snippet,
                    });
                }
            }
        }

        results
    }
}

/// Snippet around the first occurrence of `query` in `text`, if any.
fn find_snippet(text: &str, query: &str) -> Option<String> {
    let start = text.find(query)?;
    let (from, to) = snippet_range(text, start, start + query.len());
    Some(text[from..to].to_owned())
}

/// Widen the match `[start, end)` by the context window.
///
/// Offsets are byte offsets on character boundaries; the window is measured
/// in characters, clamped to the text.
fn snippet_range(text: &str, start: usize, end: usize) -> (usize, usize) {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_BEFORE - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_AFTER)
        .map_or(text.len(), |(i, _)| end + i);
    (from, to)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::Node;
    use crate::testing::{resolver, write_doc};

    type DirLayout<'a> = (&'a str, &'a str, &'a [(&'a str, &'a str)]);

    fn dir_layout<'a>(
        name: &'a str,
        text: &'a str,
        files: &'a [(&'a str, &'a str)],
    ) -> DirLayout<'a> {
        (name, text, files)
    }

    /// Build a toc with one directory per `(dir, dir_text, [(file, file_text)])`.
    fn build(root: &Path, layout: &[DirLayout<'_>]) -> Toc {
        let resolver = resolver(true);
        let mut toc = Toc::new("en", root);
        for (dir_name, dir_text, files) in layout {
            let dir_path = root.join(format!("en/{dir_name}/index.md"));
            write_doc(root, &format!("en/{dir_name}/index.md"), dir_text);
            let mut dir = Node::new(*dir_name, dir_path, Arc::clone(&resolver));
            for (file_name, file_text) in *files {
                let rel = format!("en/{dir_name}/{file_name}.md");
                write_doc(root, &rel, file_text);
                let file = Node::new(*file_name, root.join(rel), Arc::clone(&resolver));
                file.load().unwrap();
                dir.push_child(file);
            }
            dir.load().unwrap();
            toc.push_node(dir);
        }
        toc
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(dir.path(), &[dir_layout("guide", "anything", &[])]);

        assert!(toc.search("").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(dir.path(), &[dir_layout("guide", "Install Peach", &[])]);

        let results = toc.search("PEACH");

        assert_eq!(
            results,
            vec![SearchResult {
                title: "guide".to_owned(),
                path: "guide".to_owned(),
                snippet: "install peach".to_owned(),
            }]
        );
    }

    #[test]
    fn test_directory_matches_precede_file_matches() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(
            dir.path(),
            &[
                dir_layout("alpha", "nothing here", &[("one", "keyword first")]),
                dir_layout(
                    "beta",
                    "text before the keyword",
                    &[("two", "---\nname: Two\n---\nkeyword")],
                ),
            ],
        );

        let paths: Vec<_> = toc
            .search("keyword")
            .into_iter()
            .map(|r| (r.path, r.title))
            .collect();

        assert_eq!(
            paths,
            vec![
                ("beta".to_owned(), "beta".to_owned()),
                ("alpha/one".to_owned(), "one".to_owned()),
                ("beta/two".to_owned(), "Two".to_owned()),
            ]
        );
    }

    #[test]
    fn test_one_result_per_node() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(dir.path(), &[dir_layout("guide", "peach peach peach", &[])]);

        assert_eq!(toc.search("peach").len(), 1);
    }

    #[test]
    fn test_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(dir.path(), &[dir_layout("guide", "apples", &[("f", "pears")])]);

        assert!(toc.search("plum").is_empty());
    }

    #[test]
    fn test_plain_nodes_never_match() {
        let dir = tempfile::tempdir().unwrap();
        let toc = build(dir.path(), &[dir_layout("guide", "---\nname: guide\n---\n", &[])]);

        assert!(toc.search("guide").is_empty());
    }

    #[test]
    fn test_snippet_window_is_clamped() {
        let text = "short text";
        assert_eq!(snippet_range(text, 6, 10), (0, 10));
    }

    #[test]
    fn test_snippet_window_bounds() {
        let text = format!("{}match{}", "a".repeat(50), "b".repeat(300));
        let start = 50;
        let end = start + "match".len();

        let (from, to) = snippet_range(&text, start, end);

        assert_eq!(from, start - 20);
        assert_eq!(to, end + 230);
    }

    #[test]
    fn test_snippet_window_exact_boundaries() {
        // Exactly 20 characters before and 230 after.
        let text = format!("{}xy{}", "a".repeat(20), "b".repeat(230));
        assert_eq!(snippet_range(&text, 20, 22), (0, text.len()));
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let text = format!("{}match{}", "é".repeat(30), "ü".repeat(240));
        let start = text.find("match").unwrap();
        let end = start + "match".len();

        let snippet = find_snippet(&text, "match").unwrap();

        assert_eq!(snippet.chars().count(), 20 + 5 + 230);
        assert!(snippet.starts_with(&"é".repeat(20)));
        assert_eq!(snippet_range(&text, start, end).1 - end, 230 * 'ü'.len_utf8());
    }

    #[test]
    fn test_search_result_snippet_from_node() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!("{} needle {}", "x".repeat(40), "y".repeat(400));
        let toc = build(dir.path(), &[dir_layout("guide", &body, &[])]);

        let results = toc.search("needle");

        assert_eq!(results.len(), 1);
        let expected = format!("{} needle {}", "x".repeat(19), "y".repeat(229));
        assert_eq!(results[0].snippet, expected);
    }
}
