//! Multi-language table of contents, lookup and search for Peach.
//!
//! This crate provides:
//! - [`Docs`]: reloadable documentation for every configured language
//! - [`Registry`]: immutable snapshot of per-language [`Toc`] trees
//! - [`TocLoader`]: builds trees from a `TOC.toml` index
//!
//! Each language's documents live under `<root>/<lang>/`. A missing
//! translation of a `dir/file` document is served from the default (first)
//! language and flagged as a fallback.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), peach_toc::TocError> {
//! use std::sync::Arc;
//! use peach_renderer::CmarkRenderer;
//! use peach_source::LocalSource;
//! use peach_toc::{Docs, TocLoader};
//!
//! let loader = TocLoader::new(
//!     vec!["en-US".to_owned(), "zh-CN".to_owned()],
//!     Arc::new(CmarkRenderer::new()),
//!     true,
//! );
//! let docs = Docs::new(Box::new(LocalSource::new("docs")), loader);
//! docs.reload()?;
//!
//! if let Some(doc) = docs.get_doc("zh-CN", "guide/setup") {
//!     println!("{} (fallback: {})", doc.title, doc.is_fallback);
//! }
//! for result in docs.search("en-US", "install") {
//!     println!("{}: {}", result.path, result.snippet);
//! }
//! # Ok(())
//! # }
//! ```

mod docs;
mod error;
mod front_matter;
mod index;
mod loader;
mod node;
mod registry;
mod search;
mod toc;

#[cfg(test)]
mod testing;

pub use docs::Docs;
pub use error::TocError;
pub use index::{DirEntry, INDEX_FILENAME, TocIndex};
pub use loader::TocLoader;
pub use node::{ContentResolver, Node};
pub use registry::{Doc, Registry};
pub use search::SearchResult;
pub use toc::{Lookup, Toc};
