//! Inline span parsing
//!
//! Text is split into typed spans by a fixed chain of passes. Each pass only
//! looks at `Plain` spans, so markup already recognized by an earlier pass
//! (for example the contents of a code span) is never re-interpreted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MarkdownSyntaxError;
use crate::span::{SpanKind, TextSpan};

/// `![alt](url)`
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

/// `[text](url)` anchored at a `[`. The regex crate has no lookbehind, so
/// the "not after `!`" rule is checked per start position in `find_link`.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

type SplitResult = Result<Vec<TextSpan>, MarkdownSyntaxError>;

/// Split plain spans on a paired delimiter.
///
/// Text between each pair of delimiters becomes a span of `kind`; text
/// outside stays plain. An odd number of delimiters in a span is an error.
pub fn split_by_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> SplitResult {
    if delimiter.is_empty() {
        return Err(MarkdownSyntaxError::EmptyDelimiter);
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let count = span.text.matches(delimiter).count();
        if count == 0 {
            result.push(span);
            continue;
        }
        if count % 2 != 0 {
            return Err(unbalanced(delimiter, &span.text));
        }

        let mut rest = span.text.as_str();
        while let Some((before, tail)) = rest.split_once(delimiter) {
            let Some((inner, after)) = tail.split_once(delimiter) else {
                return Err(unbalanced(delimiter, &span.text));
            };
            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(TextSpan::new(inner, kind));
            rest = after;
        }
        if !rest.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }

    Ok(result)
}

fn unbalanced(delimiter: &str, text: &str) -> MarkdownSyntaxError {
    MarkdownSyntaxError::UnbalancedDelimiter {
        delimiter: delimiter.to_string(),
        text: text.to_string(),
    }
}

/// Find every `![alt](url)` in `text`
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Find every `[label](url)` in `text` that is not part of an image
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut rest = text;
    while let Some(found) = find_link(rest) {
        links.push((found.label.to_string(), found.url.to_string()));
        rest = &rest[found.end..];
    }
    links
}

/// A match located in a span: byte range plus label and url
struct Found<'t> {
    start: usize,
    end: usize,
    label: &'t str,
    url: &'t str,
}

fn find_image(text: &str) -> Option<Found<'_>> {
    let caps = IMAGE_RE.captures(text)?;
    let whole = caps.get(0)?;
    Some(Found {
        start: whole.start(),
        end: whole.end(),
        label: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

/// First link whose `[` is not directly preceded by `!`. A start that does
/// not complete a link is abandoned for the next `[`, not skipped past.
fn find_link(text: &str) -> Option<Found<'_>> {
    text.match_indices('[')
        .filter(|&(start, _)| !text[..start].ends_with('!'))
        .find_map(|(start, _)| {
            let caps = LINK_RE.captures(&text[start..])?;
            let whole = caps.get(0)?;
            Some(Found {
                start,
                end: start + whole.end(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
}

/// Shared driver for image and link splitting
fn split_by_pattern<F, M>(spans: Vec<TextSpan>, find: F, make: M) -> Vec<TextSpan>
where
    F: for<'t> Fn(&'t str) -> Option<Found<'t>>,
    M: Fn(&str, &str) -> TextSpan,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        while let Some(found) = find(rest) {
            let before = &rest[..found.start];
            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(make(found.label, found.url));
            rest = &rest[found.end..];
        }
        if !rest.is_empty() || span.text.is_empty() {
            result.push(TextSpan::plain(rest));
        }
    }

    result
}

/// Split `![alt](url)` out of plain spans
pub fn split_by_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, find_image, |alt, url| TextSpan::image(alt, url))
}

/// Split `[label](url)` out of plain spans
pub fn split_by_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_by_pattern(spans, find_link, |label, url| TextSpan::link(label, url))
}

/// Parse a run of inline Markdown into typed spans.
///
/// Passes run in a fixed order: `**` before `*` (the single marker is a
/// prefix of the double one), and images before links (`![..]` contains a
/// valid `[..]`).
pub fn text_to_spans(text: &str) -> SplitResult {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_by_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_by_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_by_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_by_images(spans);
    Ok(split_by_links(spans))
}
