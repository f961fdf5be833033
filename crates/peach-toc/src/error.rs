use std::path::PathBuf;

use peach_source::SyncError;

/// Error returned when documents cannot be loaded or reloaded.
///
/// Lookup misses are not errors; they are reported as `None` or an empty
/// result list.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// A document or the index file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The index file is missing or malformed.
    #[error("Invalid TOC index {}: {message}", path.display())]
    Index {
        /// Index file path.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
    /// The remote document source could not be synchronized.
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// The local documentation root does not exist after syncing.
    #[error("Documentation not found: {}", .0.display())]
    SourceMissing(PathBuf),
}

impl TocError {
    pub(crate) fn index(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Index {
            path: path.into(),
            message: message.into(),
        }
    }
}
