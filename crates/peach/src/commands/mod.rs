//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod pages;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod toc;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use peach_config::{CliSettings, Config, DocsSource};
use peach_renderer::CmarkRenderer;
use peach_source::{GitSource, LocalSource, SourceProvider};
use peach_toc::{Docs, TocLoader};

use crate::error::CliError;

pub(crate) use pages::PagesArgs;
pub(crate) use search::SearchArgs;
pub(crate) use show::ShowArgs;
pub(crate) use toc::TocArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover peach.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config, forces a local source).
    #[arg(short, long, global = true)]
    source_dir: Option<PathBuf>,

    /// Development mode: re-read documents on every access.
    #[arg(long, global = true)]
    dev: bool,

    /// Enable verbose output (show sync and timing logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Loaded configuration and documents.
pub(crate) struct Session {
    pub config: Config,
    pub docs: Docs,
}

impl Session {
    /// Load configuration, sync the source and load every language.
    pub(crate) fn open(global: &GlobalArgs) -> Result<Self, CliError> {
        let cli_settings = CliSettings {
            source_dir: global.source_dir.clone(),
            cache_content: global.dev.then_some(false),
        };
        let config = Config::load(global.config.as_deref(), Some(&cli_settings))?;

        let resolved = &config.docs_resolved;
        let loader = TocLoader::new(
            resolved.langs.clone(),
            Arc::new(CmarkRenderer::new()),
            resolved.cache_content,
        );
        let docs = Docs::new(source_provider(&resolved.source), loader);
        docs.reload()?;

        Ok(Self { config, docs })
    }

    /// Language to query: `requested` if configured, else the default.
    pub(crate) fn lang(&self, requested: Option<&str>) -> Result<String, CliError> {
        resolve_lang(&self.config.docs_resolved.langs, requested)
    }

    /// Languages to list: `requested` alone, or all configured languages.
    pub(crate) fn langs(&self, requested: Option<&str>) -> Result<Vec<String>, CliError> {
        match requested {
            Some(_) => Ok(vec![self.lang(requested)?]),
            None => Ok(self.config.docs_resolved.langs.clone()),
        }
    }
}

/// Build the provider for a configured source.
pub(crate) fn source_provider(source: &DocsSource) -> Box<dyn SourceProvider> {
    match source {
        DocsSource::Local { dir } => Box::new(LocalSource::new(dir.clone())),
        DocsSource::Remote { url, cache_dir } => {
            Box::new(GitSource::new(url.clone(), cache_dir.clone()))
        }
    }
}

fn resolve_lang(langs: &[String], requested: Option<&str>) -> Result<String, CliError> {
    match requested {
        Some(lang) if langs.iter().any(|l| l == lang) => Ok(lang.to_owned()),
        Some(lang) => Err(CliError::Validation(format!(
            "Unknown language '{lang}' (configured: {})",
            langs.join(", ")
        ))),
        None => langs
            .first()
            .cloned()
            .ok_or_else(|| CliError::Validation("No languages configured".to_owned())),
    }
}
