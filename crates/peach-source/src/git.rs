//! Git-backed document source.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::{SourceProvider, SyncError};

/// Documents cloned from a git repository into a fixed cache directory.
///
/// The first sync runs `git clone <url> <cache_dir>`. Later syncs find the
/// directory present and run `git pull` inside it.
#[derive(Debug, Clone)]
pub struct GitSource {
    url: String,
    cache_dir: PathBuf,
    program: String,
}

impl GitSource {
    /// Create a source cloning `url` into `cache_dir`.
    #[must_use]
    pub fn new(url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            cache_dir: cache_dir.into(),
            program: "git".to_owned(),
        }
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Remote repository URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run git with `args` and return its stdout.
    fn run(
        &self,
        action: &'static str,
        args: &[&str],
        dir: Option<&Path>,
    ) -> Result<String, SyncError> {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| SyncError::Spawn {
            command: format!("{} {}", self.program, args.join(" ")),
            source,
        })?;

        if !output.status.success() {
            return Err(SyncError::Failed {
                action,
                url: self.url.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

impl SourceProvider for GitSource {
    fn ensure_local(&self) -> Result<PathBuf, SyncError> {
        let start = Instant::now();
        let cache_dir = std::path::absolute(&self.cache_dir).map_err(SyncError::Path)?;

        let (action, stdout) = if cache_dir.is_dir() {
            ("update", self.run("update", &["pull"], Some(&cache_dir))?)
        } else {
            let target = cache_dir.to_string_lossy();
            ("clone", self.run("clone", &["clone", &self.url, &target], None)?)
        };

        tracing::info!(
            action,
            url = %self.url,
            path = %cache_dir.display(),
            output = %stdout,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Docs synced from remote source"
        );

        Ok(cache_dir)
    }
}
