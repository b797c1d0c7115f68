//! mdsite-core - Markdown to HTML conversion
//!
//! This crate turns a small Markdown dialect into an HTML node tree and
//! serializes it. It is used by `mdsite` to render pages; it performs no I/O
//! and keeps no state between calls.
//!
//! # Architecture
//!
//! ```text
//!                  ┌────────┐  spans  ┌──────────┐
//! Markdown ──lines─▶ blocks ├─────────▶ Node tree │ ──▶ HTML String
//!                  └────────┘         └──────────┘
//! ```
//!
//! Supported syntax: `#`..`######` headings, ```` ``` ```` fenced code on a
//! single line, `>` quotes, `* `/`- ` and single-digit `N.` list items,
//! `**bold**`, `*italic*`, `` `code` ``, `![alt](url)` and `[text](url)`.
//! Text content is not HTML-escaped.
//!
//! # Example
//!
//! ```rust
//! let html = mdsite_core::render("# Hi\n\nThis is **bold**.").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>This is <b>bold</b>.</p></div>");
//!
//! let title = mdsite_core::extract_title("# My Page\nbody").unwrap();
//! assert_eq!(title, "My Page");
//! ```

mod block;
mod convert;
mod document;
mod error;
mod inline;
mod node;
mod span;

pub use block::{classify, split_into_blocks, BlockKind, MAX_HEADING_LEVEL};
pub use convert::{span_to_node, spans_to_nodes};
pub use document::{extract_title, markdown_to_tree};
pub use error::{
    AttributeError, CoreError, MarkdownStructureError, MarkdownSyntaxError, Result,
    StructureError,
};
pub use inline::{
    extract_images, extract_links, split_by_delimiter, split_by_images, split_by_links,
    text_to_spans,
};
pub use node::{is_void, render_attributes, Attributes, Node};
pub use span::{SpanKind, TextSpan};

/// Convert a Markdown document to an HTML string
pub fn render(markdown: &str) -> Result<String> {
    markdown_to_tree(markdown)?.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_end_to_end() {
        assert_eq!(
            render("# Hi\n\nThis is **bold**.").unwrap(),
            "<div><h1>Hi</h1><p>This is <b>bold</b>.</p></div>"
        );
    }

    #[test]
    fn test_render_plain_text() {
        assert_eq!(
            render("   just some words   ").unwrap(),
            "<div><p>just some words</p></div>"
        );
    }

    #[test]
    fn test_render_full_page() {
        let markdown = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> All that is gold does not glitter

## Reasons I like Tolkien

* You can spend years studying the legendarium
- Dragons

1. Gandalf
2. Bilbo

Want to get in touch? [Contact me here](/contact).

```func main(){}```";

        let expected = concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></p>",
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote> All that is gold does not glitter</blockquote>",
            "<h2>Reasons I like Tolkien</h2>",
            "<ul><li>You can spend years studying the legendarium</li><li>Dragons</li></ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li></ol>",
            "<p>Want to get in touch? <a href=\"/contact\">Contact me here</a>.</p>",
            "<pre><code>func main(){}</code></pre>",
            "</div>",
        );

        assert_eq!(render(markdown).unwrap(), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render(""),
            Err(CoreError::Document(MarkdownStructureError::EmptyDocument))
        );
    }

    #[test]
    fn test_render_unbalanced() {
        assert!(matches!(
            render("a **b"),
            Err(CoreError::Syntax(MarkdownSyntaxError::UnbalancedDelimiter { .. }))
        ));
    }

    #[test]
    fn test_render_empty_heading_fails() {
        assert_eq!(
            render("#"),
            Err(CoreError::Structure(StructureError::EmptyValue))
        );
    }
}
