//! Plain-text projection of markdown events.
//!
//! Keeps the visible words of a document and drops all markup: link targets,
//! image URLs and raw HTML disappear, block elements end with a newline.

use pulldown_cmark::{Event, TagEnd};

/// Append the plain text of `events` to `out`.
pub(crate) fn push_text<'a>(out: &mut String, events: impl Iterator<Item = Event<'a>>) {
    for event in events {
        match event {
            Event::Text(text)
            | Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak | Event::Rule => out.push('\n'),
            Event::End(TagEnd::TableCell) => out.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableHead
                | TagEnd::TableRow
                | TagEnd::BlockQuote(_)
                | TagEnd::FootnoteDefinition,
            ) => end_block(out),
            _ => {}
        }
    }
}

/// Terminate the current block with exactly one newline.
fn end_block(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    use super::*;

    fn text(markdown: &str) -> String {
        let mut out = String::new();
        push_text(&mut out, Parser::new_ext(markdown, Options::ENABLE_TABLES));
        out
    }

    #[test]
    fn test_paragraphs_end_with_newline() {
        assert_eq!(text("One.\n\nTwo."), "One.\nTwo.\n");
    }

    #[test]
    fn test_soft_break_becomes_space() {
        assert_eq!(text("line one\nline two"), "line one line two\n");
    }

    #[test]
    fn test_list_items() {
        assert_eq!(text("- alpha\n- beta\n"), "alpha\nbeta\n");
    }

    #[test]
    fn test_code_block_keeps_content() {
        assert_eq!(text("```\nlet x = 1;\n```\n"), "let x = 1;\n");
    }

    #[test]
    fn test_link_keeps_label_only() {
        assert_eq!(text("[Peach](https://example.com)"), "Peach\n");
    }

    #[test]
    fn test_raw_html_is_dropped() {
        assert_eq!(text("<div>hidden</div>\n\nshown"), "shown\n");
    }

    #[test]
    fn test_table_cells_are_space_separated() {
        assert_eq!(text("| a | b |\n|---|---|\n| 1 | 2 |\n"), "a b\n1 2\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text(""), "");
    }
}
