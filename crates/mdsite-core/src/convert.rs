//! Convert inline spans to HTML nodes

use crate::error::MarkdownSyntaxError;
use crate::node::Node;
use crate::span::{SpanKind, TextSpan};

/// Lower a single span to a leaf node
pub fn span_to_node(span: &TextSpan) -> Result<Node, MarkdownSyntaxError> {
    let text = span.text.as_str();

    let node = match span.kind {
        SpanKind::Plain => Node::text(text),
        SpanKind::Bold => Node::leaf("b", text),
        SpanKind::Italic => Node::leaf("i", text),
        SpanKind::Code => Node::leaf("code", text),
        SpanKind::Link => Node::leaf_with_attrs("a", text, vec![("href", require_url(span)?)]),
        SpanKind::Image => Node::leaf_with_attrs(
            "img",
            "",
            vec![("src", require_url(span)?), ("alt", text)],
        ),
    };

    Ok(node)
}

/// Lower a sequence of spans, preserving order
pub fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<Node>, MarkdownSyntaxError> {
    spans.iter().map(span_to_node).collect()
}

fn require_url(span: &TextSpan) -> Result<&str, MarkdownSyntaxError> {
    span.url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or(MarkdownSyntaxError::MissingUrl(span.kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        let node = span_to_node(&TextSpan::plain("hello")).unwrap();
        assert_eq!(node, Node::text("hello"));
    }

    #[test]
    fn test_bold() {
        let node = span_to_node(&TextSpan::new("This is a text node", SpanKind::Bold)).unwrap();
        assert_eq!(node.to_html().unwrap(), "<b>This is a text node</b>");
    }

    #[test]
    fn test_italic_and_code() {
        let italic = span_to_node(&TextSpan::new("it", SpanKind::Italic)).unwrap();
        let code = span_to_node(&TextSpan::new("x = 1", SpanKind::Code)).unwrap();
        assert_eq!(italic, Node::leaf("i", "it"));
        assert_eq!(code, Node::leaf("code", "x = 1"));
    }

    #[test]
    fn test_link() {
        let node = span_to_node(&TextSpan::link("Google", "https://google.com")).unwrap();
        assert_eq!(node.attr("href"), Some("https://google.com"));
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://google.com\">Google</a>"
        );
    }

    #[test]
    fn test_image() {
        let node = span_to_node(&TextSpan::image("a cat", "cat.png")).unwrap();
        assert_eq!(
            node,
            Node::leaf_with_attrs("img", "", vec![("src", "cat.png"), ("alt", "a cat")])
        );
        assert_eq!(node.to_html().unwrap(), "<img src=\"cat.png\" alt=\"a cat\">");
    }

    #[test]
    fn test_link_without_url() {
        let span = TextSpan::new("dangling", SpanKind::Link);
        assert_eq!(
            span_to_node(&span),
            Err(MarkdownSyntaxError::MissingUrl(SpanKind::Link))
        );
    }

    #[test]
    fn test_spans_to_nodes() {
        let spans = vec![
            TextSpan::plain("a "),
            TextSpan::new("b", SpanKind::Bold),
        ];
        let nodes = spans_to_nodes(&spans).unwrap();
        assert_eq!(nodes, vec![Node::text("a "), Node::leaf("b", "b")]);
    }
}
