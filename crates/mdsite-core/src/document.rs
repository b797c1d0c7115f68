//! Assemble a Markdown document into an HTML node tree
//!
//! Blocks are classified one at a time. List items are merged into the list
//! container immediately before them, so consecutive items share one
//! `<ul>`/`<ol>`.

use crate::block::{classify, split_into_blocks, BlockKind, FENCE};
use crate::convert::spans_to_nodes;
use crate::error::{MarkdownStructureError, Result};
use crate::inline::text_to_spans;
use crate::node::Node;

/// Root container tag
const ROOT_TAG: &str = "div";

/// Parse a document into a `<div>` root holding one node per block
pub fn markdown_to_tree(document: &str) -> Result<Node> {
    let mut children: Vec<Node> = Vec::new();

    for block in split_into_blocks(document) {
        match classify(block) {
            BlockKind::Heading(level) => {
                let tag = format!("h{}", level);
                children.push(Node::container(&tag, inline_nodes(heading_text(block, level))?));
            }
            BlockKind::Code => {
                let inner = &block[FENCE.len()..block.len() - FENCE.len()];
                let code = Node::container("code", inline_nodes(inner)?);
                children.push(Node::container("pre", vec![code]));
            }
            BlockKind::Quote => {
                children.push(Node::container("blockquote", inline_nodes(&block[1..])?));
            }
            BlockKind::UnorderedListItem => {
                let item = Node::container("li", inline_nodes(&block[2..])?);
                push_list_item(&mut children, "ul", item);
            }
            BlockKind::OrderedListItem => {
                let item = Node::container("li", inline_nodes(ordered_item_text(block))?);
                push_list_item(&mut children, "ol", item);
            }
            BlockKind::Paragraph => {
                children.push(Node::container("p", inline_nodes(block)?));
            }
        }
    }

    if children.is_empty() {
        return Err(MarkdownStructureError::EmptyDocument.into());
    }

    Ok(Node::container(ROOT_TAG, children))
}

/// Get the page title from a leading `# ` heading
pub fn extract_title(document: &str) -> Result<String> {
    split_into_blocks(document)
        .first()
        .and_then(|block| block.strip_prefix("# "))
        .map(str::to_string)
        .ok_or_else(|| MarkdownStructureError::MissingTitle.into())
}

fn inline_nodes(text: &str) -> Result<Vec<Node>> {
    let spans = text_to_spans(text)?;
    Ok(spans_to_nodes(&spans)?)
}

/// Strip `level` hashes and one following space
fn heading_text(block: &str, level: u8) -> &str {
    let rest = &block[level as usize..];
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Strip the `N.` marker and one following space
fn ordered_item_text(block: &str) -> &str {
    let rest = &block[2..];
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Append a list item, merging into the previous list if it has the same tag
fn push_list_item(children: &mut Vec<Node>, list_tag: &str, item: Node) {
    if let Some(Node::Container { tag, children: items, .. }) = children.last_mut() {
        if tag == list_tag {
            items.push(item);
            return;
        }
    }

    children.push(Node::container(list_tag, vec![item]));
}
