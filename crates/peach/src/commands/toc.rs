//! `peach toc` command implementation.

use clap::Args;
use peach_toc::{Node, Toc};

use super::{GlobalArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Only print this language (default: all configured languages).
    #[arg(short, long)]
    lang: Option<String>,
}

impl TocArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = Session::open(global)?;
        let registry = session.docs.registry();

        for lang in session.langs(self.lang.as_deref())? {
            let Some(toc) = registry.toc(&lang) else {
                continue;
            };
            output.heading(&lang);
            for line in tree_lines(toc) {
                output.result(&line);
            }
        }

        Ok(())
    }
}

/// Directory nodes, their files indented below, then pages.
fn tree_lines(toc: &Toc) -> Vec<String> {
    let mut lines = Vec::with_capacity(toc.node_count() + toc.pages().len());

    for dir in toc.nodes() {
        lines.push(format!("{}/{}", label(dir), missing_marker(dir)));
        for file in dir.children() {
            lines.push(format!(
                "{}|__ {}{}",
                " ".repeat(dir.name().len()),
                label(file),
                missing_marker(file)
            ));
        }
    }

    for page in toc.pages() {
        lines.push(format!("[page] {}{}", label(page), missing_marker(page)));
    }

    lines
}

fn label(node: &Node) -> String {
    let title = node.title();
    if title == node.name() {
        title
    } else {
        format!("{} ({title})", node.name())
    }
}

fn missing_marker(node: &Node) -> &'static str {
    if node.exists() { "" } else { " [missing]" }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    use peach_renderer::CmarkRenderer;
    use peach_toc::{INDEX_FILENAME, TocLoader};
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_tree_lines() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            INDEX_FILENAME,
            "g = \"guide\"\n[guide]\na = \"intro\"\nb = \"setup\"\nc = \"faq\"\n[pages]\nabout = \"about\"\n",
        );
        write(root, "en/guide/intro.md", "---\nname: Guide\n---\nHello");
        write(root, "en/guide/setup.md", "Steps");
        write(root, "en/about.md", "About us");

        let registry = TocLoader::new(vec!["en".to_owned()], Arc::new(CmarkRenderer::new()), true)
            .load(root)
            .unwrap();

        assert_eq!(
            tree_lines(registry.toc("en").unwrap()),
            vec![
                "guide (Guide)/".to_owned(),
                "     |__ setup".to_owned(),
                "     |__ faq [missing]".to_owned(),
                "[page] about".to_owned(),
            ]
        );
    }
}
