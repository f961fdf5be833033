//! Document source providers for Peach.
//!
//! A [`SourceProvider`] makes the documentation tree available on the local
//! filesystem and reports where it lives:
//!
//! - [`LocalSource`]: documents already live in a local directory
//! - [`GitSource`]: documents live in a git repository that is cloned into a
//!   cache directory on first use and pulled on every later sync
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), peach_source::SyncError> {
//! use peach_source::{GitSource, SourceProvider};
//!
//! let source = GitSource::new("https://github.com/example/docs.git", "data/docs");
//! let root = source.ensure_local()?;
//! println!("documents at {}", root.display());
//! # Ok(())
//! # }
//! ```

mod git;
mod local;

use std::path::PathBuf;

pub use git::GitSource;
pub use local::LocalSource;

/// Error returned when a remote document source cannot be synchronized.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The sync command could not be started.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        /// Command line that was attempted.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// The sync command ran and exited unsuccessfully.
    #[error("Failed to {action} docs from remote source ({url}): {stderr}")]
    Failed {
        /// What was attempted ("clone" or "update").
        action: &'static str,
        /// Remote source URL.
        url: String,
        /// Diagnostic output of the command.
        stderr: String,
    },
    /// The cache directory path could not be resolved.
    #[error("Invalid cache directory: {0}")]
    Path(#[source] std::io::Error),
}

/// Makes documents available locally.
pub trait SourceProvider: Send + Sync {
    /// Ensure the documents exist locally and return their root directory.
    ///
    /// Implementations that fetch over the network block until the fetch
    /// completes or fails.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if the documents cannot be fetched or updated.
    fn ensure_local(&self) -> Result<PathBuf, SyncError>;
}
