//! `peach pages` command implementation.

use clap::Args;

use super::{GlobalArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Print this page instead of listing all pages.
    name: Option<String>,

    /// Language to use (default: the first configured language).
    #[arg(short, long)]
    lang: Option<String>,
}

impl PagesArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = Session::open(global)?;
        let lang = session.lang(self.lang.as_deref())?;

        if let Some(name) = &self.name {
            let page = session
                .docs
                .get_page(&lang, name)
                .ok_or_else(|| CliError::NotFound(format!("No page '{name}' ({lang})")))?;
            output.heading(&page.title);
            if let Some(html) = page.content {
                output.result(&html);
            }
            return Ok(());
        }

        let registry = session.docs.registry();
        let pages = registry.toc(&lang).map(|t| t.pages()).unwrap_or_default();
        if pages.is_empty() {
            output.info("No pages");
            return Ok(());
        }

        for page in pages {
            if page.exists() {
                output.result(&format!("{}\t{}", page.name(), page.title()));
            } else {
                output.detail(&format!("{}\t[missing]", page.name()));
            }
        }

        Ok(())
    }
}
