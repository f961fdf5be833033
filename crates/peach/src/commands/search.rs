//! `peach search` command implementation.

use clap::Args;
use peach_toc::SearchResult;

use super::{GlobalArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Text to search for (case-insensitive).
    query: String,

    /// Language to search (default: the first configured language).
    #[arg(short, long)]
    lang: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = Session::open(global)?;
        let lang = session.lang(self.lang.as_deref())?;

        let results = session.docs.search(&lang, &self.query);

        if self.json {
            output.result(&to_json(&results)?);
            return Ok(());
        }

        if results.is_empty() {
            output.info(&format!("No results for '{}'", self.query));
            return Ok(());
        }

        for result in &results {
            output.heading(&format!("{} ({})", result.title, result.path));
            output.detail(&format!("  ...{}...", result.snippet.replace('\n', " ")));
        }
        output.info(&format!("{} result(s)", results.len()));

        Ok(())
    }
}

fn to_json(results: &[SearchResult]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_to_json() {
        let results = vec![SearchResult {
            title: "Setup".to_owned(),
            path: "guide/setup".to_owned(),
            snippet: "run the installer".to_owned(),
        }];

        let json: serde_json::Value = serde_json::from_str(&to_json(&results).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "title": "Setup",
                "path": "guide/setup",
                "snippet": "run the installer",
            }])
        );
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
