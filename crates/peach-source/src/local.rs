use std::path::{Path, PathBuf};

use crate::{SourceProvider, SyncError};

/// Documents stored in a local directory.
///
/// Nothing is fetched; the directory is returned as configured. Whether it
/// exists is checked by the caller.
#[derive(Debug, Clone)]
pub struct LocalSource {
    dir: PathBuf,
}

impl LocalSource {
    /// Create a source for `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Configured documentation root.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SourceProvider for LocalSource {
    fn ensure_local(&self) -> Result<PathBuf, SyncError> {
        Ok(self.dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_configured_dir() {
        let source = LocalSource::new("/srv/docs");
        assert_eq!(source.ensure_local().unwrap(), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_does_not_require_existing_dir() {
        let source = LocalSource::new("/nonexistent/peach/docs");
        assert!(source.ensure_local().is_ok());
    }
}
