//! `pulldown-cmark` backed renderer.

use pulldown_cmark::{Options, Parser, html};

use crate::ContentRenderer;
use crate::text::push_text;

/// Markdown renderer using `pulldown-cmark` for both HTML and plain text.
#[derive(Debug, Clone)]
pub struct CmarkRenderer {
    gfm: bool,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self { gfm: true }
    }
}

impl CmarkRenderer {
    /// Create a renderer with GitHub Flavored Markdown enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    fn parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }
}

impl ContentRenderer for CmarkRenderer {
    fn render_body(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, self.parser(markdown));
        out
    }

    fn render_plain_text(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len());
        push_text(&mut out, self.parser(markdown));
        out
    }
}
