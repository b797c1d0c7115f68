//! HTML node tree produced from Markdown.
//!
//! A node is either a leaf holding literal text or a container holding
//! ordered children. Both may carry attributes, kept in insertion order so
//! the rendered HTML is deterministic.

use indexmap::IndexMap;

use crate::error::{AttributeError, Result, StructureError};

/// Ordered attribute map
pub type Attributes = IndexMap<String, String>;

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// An HTML node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal content. Without a tag the value is emitted as raw text.
    /// Void tags (`img`, `br`, ...) render as a lone opening tag and their
    /// value is not emitted.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Option<Attributes>,
    },

    /// Element whose content is the concatenation of its children
    Container {
        tag: String,
        children: Vec<Node>,
        attributes: Option<Attributes>,
    },
}

impl Node {
    /// Create a raw text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: Some(collect_attrs(attrs)),
        }
    }

    /// Create a container
    pub fn container(tag: &str, children: Vec<Node>) -> Self {
        Node::Container {
            tag: tag.to_string(),
            children,
            attributes: None,
        }
    }

    /// Create a container with attributes
    pub fn container_with_attrs(tag: &str, children: Vec<Node>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Container {
            tag: tag.to_string(),
            children,
            attributes: Some(collect_attrs(attrs)),
        }
    }

    /// Get the tag name. An empty tag counts as no tag.
    pub fn tag(&self) -> Option<&str> {
        let tag = match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Container { tag, .. } => Some(tag.as_str()),
        };
        tag.filter(|t| !t.is_empty())
    }

    /// Get the children of a container (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Container { children, .. } => children,
        }
    }

    /// Get the attribute map, if the node has one
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => {
                attributes.as_ref()
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf { value, .. } => value.clone(),
            Node::Container { children, .. } => {
                children.iter().map(|child| child.text_content()).collect()
            }
        }
    }

    /// Render this node's attributes as `key="value"` pairs
    pub fn attributes_html(&self) -> std::result::Result<String, AttributeError> {
        render_attributes(self.attributes())
    }

    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                tag,
                value,
                attributes,
            } => {
                let tag = tag.as_deref().filter(|t| !t.is_empty());
                let Some(tag) = tag else {
                    if value.is_empty() {
                        return Err(StructureError::EmptyValue.into());
                    }
                    out.push_str(value);
                    return Ok(());
                };

                write_open_tag(tag, attributes.as_ref(), out)?;
                if is_void(tag) {
                    return Ok(());
                }
                if value.is_empty() {
                    return Err(StructureError::EmptyValue.into());
                }
                out.push_str(value);
                write_close_tag(tag, out);
            }

            Node::Container {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(StructureError::MissingTag.into());
                }
                if children.is_empty() {
                    return Err(StructureError::EmptyChildren { tag: tag.clone() }.into());
                }

                write_open_tag(tag, attributes.as_ref(), out)?;
                for child in children {
                    child.write_html(out)?;
                }
                write_close_tag(tag, out);
            }
        }

        Ok(())
    }
}

/// Render an attribute map as space-separated `key="value"` pairs.
///
/// Fails with [`AttributeError::NotAMap`] when there is no map at all and
/// with [`AttributeError::Empty`] when the map has no entries.
pub fn render_attributes(attrs: Option<&Attributes>) -> std::result::Result<String, AttributeError> {
    let attrs = attrs.ok_or(AttributeError::NotAMap)?;
    if attrs.is_empty() {
        return Err(AttributeError::Empty);
    }

    Ok(attrs
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" "))
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

fn write_open_tag(tag: &str, attributes: Option<&Attributes>, out: &mut String) -> Result<()> {
    out.push('<');
    out.push_str(tag);
    if attributes.is_some() {
        out.push(' ');
        out.push_str(&render_attributes(attributes)?);
    }
    out.push('>');
    Ok(())
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
