//! Markdown rendering backends for Peach.
//!
//! The TOC core never talks to a markdown library directly. It renders
//! document bodies through the [`ContentRenderer`] trait, which has two
//! operations:
//!
//! - [`ContentRenderer::render_body`]: markdown to displayable HTML
//! - [`ContentRenderer::render_plain_text`]: markdown to unformatted text,
//!   used as the search projection of a document
//!
//! [`CmarkRenderer`] implements both on top of `pulldown-cmark`.
//!
//! # Example
//!
//! ```
//! use peach_renderer::{CmarkRenderer, ContentRenderer};
//!
//! let renderer = CmarkRenderer::new();
//! let html = renderer.render_body("# Hello\n\n**Bold** text");
//! assert!(html.contains("<strong>Bold</strong>"));
//!
//! let text = renderer.render_plain_text("# Hello\n\n**Bold** text");
//! assert_eq!(text, "Hello\nBold text\n");
//! ```

mod cmark;
mod text;

pub use cmark::CmarkRenderer;

/// Capability to turn a markdown document body into output.
///
/// Implementations must be pure functions of their input: rendering the
/// same body twice yields the same output. Nodes rely on this when content
/// is recomputed concurrently.
pub trait ContentRenderer: Send + Sync {
    /// Render a markdown body to HTML.
    fn render_body(&self, markdown: &str) -> String;

    /// Render a markdown body to plain text without any markup.
    fn render_plain_text(&self, markdown: &str) -> String;
}
