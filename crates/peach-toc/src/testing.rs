//! Test helpers: a deterministic renderer and document fixtures.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use peach_renderer::ContentRenderer;

use crate::node::ContentResolver;

/// Renderer that wraps the trimmed body in `<p>` and returns it as text.
pub(crate) struct StubRenderer;

impl ContentRenderer for StubRenderer {
    fn render_body(&self, markdown: &str) -> String {
        format!("<p>{}</p>", markdown.trim())
    }

    fn render_plain_text(&self, markdown: &str) -> String {
        markdown.trim().to_owned()
    }
}

pub(crate) fn resolver(cache_content: bool) -> Arc<ContentResolver> {
    Arc::new(ContentResolver::new(Arc::new(StubRenderer), cache_content))
}

/// Write `content` to `root/rel`, creating parent directories.
pub(crate) fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
