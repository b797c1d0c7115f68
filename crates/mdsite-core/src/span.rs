//! Typed inline text spans
//!
//! A span is the unit the inline parser works on: a run of text plus the
//! markup it was recognized as. Link and image spans also carry their url.

use std::fmt;
use std::str::FromStr;

use crate::error::MarkdownSyntaxError;

/// The markup an inline span was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain text, still subject to splitting
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    pub fn name(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanKind {
    type Err = MarkdownSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            _ => Err(MarkdownSyntaxError::UnknownSpanKind(s.to_string())),
        }
    }
}

/// A typed, contiguous run of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a span without a url
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold);
        let same = TextSpan::new("This is a text node", SpanKind::Bold);
        assert_eq!(span, same);
    }

    #[test]
    fn test_not_eq_on_text() {
        let span = TextSpan::new("This is a text node", SpanKind::Bold);
        let other = TextSpan::new("This is a different text node", SpanKind::Bold);
        assert_ne!(span, other);
    }

    #[test]
    fn test_not_eq_on_url() {
        let a = TextSpan::link("home", "/");
        let b = TextSpan::link("home", "/index.html");
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("bold".parse::<SpanKind>().unwrap(), SpanKind::Bold);
        assert_eq!("TEXT".parse::<SpanKind>().unwrap(), SpanKind::Plain);
        assert_eq!("image".parse::<SpanKind>().unwrap(), SpanKind::Image);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "something".parse::<SpanKind>().unwrap_err();
        assert_eq!(
            err,
            MarkdownSyntaxError::UnknownSpanKind("something".to_string())
        );
    }
}
