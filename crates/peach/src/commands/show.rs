//! `peach show` command implementation.

use clap::Args;

use super::{GlobalArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Document path: empty for the first document, `dir` or `dir/file`.
    #[arg(default_value = "")]
    path: String,

    /// Language to show (default: the first configured language).
    #[arg(short, long)]
    lang: Option<String>,
}

impl ShowArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = Session::open(global)?;
        let lang = session.lang(self.lang.as_deref())?;

        let doc = session
            .docs
            .get_doc(&lang, &self.path)
            .ok_or_else(|| CliError::NotFound(format!("No document at '{}' ({lang})", self.path)))?;

        if doc.is_fallback {
            output.warning(&format!(
                "Not translated to {lang}, showing {}",
                session.config.docs_resolved.default_lang()
            ));
        }

        output.heading(&doc.title);
        match doc.content {
            Some(html) => output.result(&html),
            None => output.detail("(no content)"),
        }

        Ok(())
    }
}
