//! Block splitting and classification
//!
//! Every non-blank line is one block. Consecutive lines are not merged into
//! multi-line paragraphs.

/// Highest heading level; deeper `#` runs are clamped to it
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Code fence marker
pub const FENCE: &str = "```";

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedListItem,
    OrderedListItem,
}

/// Split a document into trimmed, non-empty lines
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    document
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Classify a block. Rules are checked in order and the first match wins.
pub fn classify(block: &str) -> BlockKind {
    let bytes = block.as_bytes();

    if block.starts_with('#') {
        return BlockKind::Heading(heading_level(block));
    }

    if block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockKind::Code;
    }

    if block.starts_with('>') {
        return BlockKind::Quote;
    }

    if block.starts_with("* ") || block.starts_with("- ") {
        return BlockKind::UnorderedListItem;
    }

    // Only single-digit ordinals are recognized
    if bytes.len() >= 2 && bytes[0].is_ascii_digit() && bytes[1] == b'.' {
        return BlockKind::OrderedListItem;
    }

    BlockKind::Paragraph
}

/// Count leading `#` up to the first space, clamped to [`MAX_HEADING_LEVEL`]
fn heading_level(block: &str) -> u8 {
    let marker = block.split(' ').next().unwrap_or_default();
    let hashes = marker.bytes().take_while(|&b| b == b'#').count();
    hashes.min(MAX_HEADING_LEVEL as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_into_blocks() {
        let markdown = "
        This is **bolded** paragraph

        This is another paragraph with *italic* text and `code` here
        This is the same paragraph on a new line


        * This is a list
        * with items
        ";
        assert_eq!(
            split_into_blocks(markdown),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with *italic* text and `code` here",
                "This is the same paragraph on a new line",
                "* This is a list",
                "* with items",
            ]
        );
    }

    #[test]
    fn test_split_crlf_and_blank() {
        assert_eq!(split_into_blocks("a\r\n\r\n  b  \r\n"), vec!["a", "b"]);
        assert!(split_into_blocks("  \n\t\n").is_empty());
        assert!(split_into_blocks("").is_empty());
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify("# Title"), BlockKind::Heading(1));
        assert_eq!(classify("#### Heading!"), BlockKind::Heading(4));
        assert_eq!(classify("###### x"), BlockKind::Heading(6));
        assert_eq!(classify("####### x"), BlockKind::Heading(6));
    }

    #[test]
    fn test_heading_without_space() {
        assert_eq!(classify("##x"), BlockKind::Heading(2));
    }

    #[test]
    fn test_code() {
        assert_eq!(classify("```code block```"), BlockKind::Code);
        assert_eq!(classify("``````"), BlockKind::Code);
    }

    #[test]
    fn test_code_invalid() {
        assert_eq!(classify("```not a code block"), BlockKind::Paragraph);
        assert_eq!(classify("````"), BlockKind::Paragraph);
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify(">This is a quote"), BlockKind::Quote);
    }

    #[test]
    fn test_unordered() {
        assert_eq!(classify("* item"), BlockKind::UnorderedListItem);
        assert_eq!(classify("- item"), BlockKind::UnorderedListItem);
        assert_eq!(classify("*emphasis*"), BlockKind::Paragraph);
    }

    #[test]
    fn test_ordered() {
        assert_eq!(classify("1. first"), BlockKind::OrderedListItem);
        assert_eq!(classify("9. ninth"), BlockKind::OrderedListItem);
        // Two-digit ordinals are not recognized
        assert_eq!(classify("10. tenth"), BlockKind::Paragraph);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(classify("Just words."), BlockKind::Paragraph);
    }
}
