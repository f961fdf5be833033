//! Document front matter.
//!
//! A document may start with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! name: Installation Guide
//! ---
//!
//! # Installing
//! ```
//!
//! Only the `name` key is recognized; it overrides the node title.

/// Front matter delimiter.
const MARKER: &str = "---";

/// Result of splitting a document into front matter and body.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FrontMatter<'a> {
    /// Value of the `name` key, trimmed. `None` when absent or empty.
    pub name: Option<&'a str>,
    /// Document body after the closing marker.
    pub body: &'a str,
}

/// Split `data` into front matter and body.
///
/// The document is trimmed first. Without an opening marker the whole
/// trimmed document is the body. An opening marker with no closing marker
/// yields an empty body.
pub(crate) fn parse_front_matter(data: &str) -> FrontMatter<'_> {
    let data = data.trim();
    let Some(rest) = data.strip_prefix(MARKER) else {
        return FrontMatter {
            name: None,
            body: data,
        };
    };

    let Some(end) = rest.find(MARKER) else {
        return FrontMatter {
            name: None,
            body: "",
        };
    };

    let mut name = None;
    for line in rest[..end].trim().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.trim() == "name" {
            name = Some(value.trim());
        }
    }

    FrontMatter {
        name: name.filter(|n| !n.is_empty()),
        body: &rest[end + MARKER.len()..],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_front_matter_keeps_trimmed_document() {
        let fm = parse_front_matter("\n\n# Title\n\nBody\n\n");
        assert_eq!(
            fm,
            FrontMatter {
                name: None,
                body: "# Title\n\nBody",
            }
        );
    }

    #[test]
    fn test_name_overrides_title() {
        let fm = parse_front_matter("---\nname:  Getting Started  \n---\n\nHello");
        assert_eq!(fm.name, Some("Getting Started"));
        assert_eq!(fm.body, "\n\nHello");
    }

    #[test]
    fn test_leading_whitespace_before_marker() {
        let fm = parse_front_matter("   \n---\nname: Intro\n---\nBody");
        assert_eq!(fm.name, Some("Intro"));
        assert_eq!(fm.body, "\nBody");
    }

    #[test]
    fn test_value_split_on_first_colon() {
        let fm = parse_front_matter("---\nname: Setup: Linux\n---\nBody");
        assert_eq!(fm.name, Some("Setup: Linux"));
    }

    #[test]
    fn test_unknown_keys_and_malformed_lines_ignored() {
        let fm = parse_front_matter("---\nauthor: someone\njust words\nname: Real\n---\nBody");
        assert_eq!(fm.name, Some("Real"));
        assert_eq!(fm.body, "\nBody");
    }

    #[test]
    fn test_front_matter_without_name() {
        let fm = parse_front_matter("---\nauthor: someone\n---\nBody");
        assert_eq!(fm.name, None);
        assert_eq!(fm.body, "\nBody");
    }

    #[test]
    fn test_empty_name_is_ignored() {
        let fm = parse_front_matter("---\nname:   \n---\nBody");
        assert_eq!(fm.name, None);
    }

    #[test]
    fn test_last_name_wins() {
        let fm = parse_front_matter("---\nname: First\nname: Second\n---\nBody");
        assert_eq!(fm.name, Some("Second"));
    }

    #[test]
    fn test_unclosed_front_matter_discards_body() {
        // Known edge case: an opening marker without a closing one drops the
        // whole document.
        let fm = parse_front_matter("---\nname: Lost\n\n# Heading\n\nText that is never shown.");
        assert_eq!(
            fm,
            FrontMatter {
                name: None,
                body: "",
            }
        );
    }

    #[test]
    fn test_front_matter_only_has_empty_body() {
        let fm = parse_front_matter("---\nname: Section\n---\n");
        assert_eq!(fm.name, Some("Section"));
        assert_eq!(fm.body.trim(), "");
    }

    #[test]
    fn test_document_shorter_than_marker() {
        assert_eq!(parse_front_matter("--").body, "--");
        assert_eq!(parse_front_matter("").body, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let fm = parse_front_matter("---\r\nname: Windows\r\n---\r\nBody");
        assert_eq!(fm.name, Some("Windows"));
        assert_eq!(fm.body, "\r\nBody");
    }
}
