//! `peach check` command implementation.

use peach_toc::Toc;

use super::{GlobalArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Load every language once and report untranslated documents.
pub(crate) fn execute(global: &GlobalArgs) -> Result<(), CliError> {
    let output = Output::new();
    let session = Session::open(global)?;
    let registry = session.docs.registry();

    output.info(&format!(
        "Source: {}",
        session.config.docs_resolved.source.local_root().display()
    ));

    for lang in registry.langs() {
        let Some(toc) = registry.toc(lang) else {
            continue;
        };
        let missing = missing_documents(toc);
        if missing.is_empty() {
            output.info(&format!("{lang}: {} nodes", toc.node_count()));
        } else {
            output.warning(&format!(
                "{lang}: {} nodes, {} missing",
                toc.node_count(),
                missing.len()
            ));
            for path in missing {
                output.warning(&format!("  {path}"));
            }
        }
    }

    output.success(&format!(
        "Loaded {} nodes in {} language(s)",
        registry.node_count(),
        registry.langs().len()
    ));
    Ok(())
}

/// `dir`, `dir/file` and page names whose document is missing on disk.
fn missing_documents(toc: &Toc) -> Vec<String> {
    let mut missing = Vec::new();
    for dir in toc.nodes() {
        if !dir.exists() {
            missing.push(dir.name().to_owned());
        }
        for file in dir.children().iter().filter(|f| !f.exists()) {
            missing.push(format!("{}/{}", dir.name(), file.name()));
        }
    }
    for page in toc.pages().iter().filter(|p| !p.exists()) {
        missing.push(page.name().to_owned());
    }
    missing
}
