//! Reloadable documentation registry.
//!
//! [`Docs`] owns the current [`Registry`] snapshot and replaces it on
//! [`Docs::reload`].
//!
//! # Thread Safety
//!
//! - Readers clone the current `Arc<Registry>` under a brief read lock and
//!   query the snapshot without holding any lock
//! - Reloads are serialized by a `Mutex<()>` held for the whole
//!   sync, load and swap sequence
//! - A failed reload leaves the previous snapshot in place

use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use peach_source::SourceProvider;

use crate::TocError;
use crate::loader::TocLoader;
use crate::registry::{Doc, Registry};
use crate::search::SearchResult;

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Documentation trees for every configured language, reloadable at runtime.
pub struct Docs {
    source: Box<dyn SourceProvider>,
    loader: TocLoader,
    /// Mutex for serializing reload operations.
    reload_lock: Mutex<()>,
    /// Current registry snapshot (atomically swappable).
    current: RwLock<Arc<Registry>>,
}

impl Docs {
    /// Create an empty instance. Call [`Docs::reload`] to load documents.
    ///
    /// # Arguments
    ///
    /// * `source` - Provides the local documentation root
    /// * `loader` - Builds trees from that root
    #[must_use]
    pub fn new(source: Box<dyn SourceProvider>, loader: TocLoader) -> Self {
        Self {
            source,
            loader,
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(Registry::empty())),
        }
    }

    /// Current registry snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Resolve `path` in `lang`. See [`Registry::get_doc`].
    #[must_use]
    pub fn get_doc(&self, lang: &str, path: &str) -> Option<Doc> {
        self.registry().get_doc(lang, path)
    }

    /// Search `lang` for `query`. See [`Registry::search`].
    #[must_use]
    pub fn search(&self, lang: &str, query: &str) -> Vec<SearchResult> {
        self.registry().search(lang, query)
    }

    /// Standalone page `name` in `lang`. See [`Registry::get_page`].
    #[must_use]
    pub fn get_page(&self, lang: &str, name: &str) -> Option<Doc> {
        self.registry().get_page(lang, name)
    }

    /// Sync the source, rebuild every tree and swap in the new registry.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Sync` if the source cannot be synced,
    /// `TocError::SourceMissing` if the documentation root is not a
    /// directory, or any load error. The previous registry stays current.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload(&self) -> Result<(), TocError> {
        let start = Instant::now();
        let _guard = self.reload_lock.lock().unwrap();

        let root = self.source.ensure_local()?;
        if !root.is_dir() {
            return Err(TocError::SourceMissing(root));
        }

        let registry = Arc::new(self.loader.load(&root)?);
        let node_count = registry.node_count();
        *self.current.write().unwrap() = registry;

        tracing::info!(
            root = %root.display(),
            langs = self.loader.langs().len(),
            node_count,
            elapsed_ms = elapsed_ms(start),
            "Docs reloaded"
        );
        Ok(())
    }
}
