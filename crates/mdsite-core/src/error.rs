//! Error types for Markdown conversion.
//!
//! Every failure is terminal for the conversion in progress: nothing is
//! retried and no partial output is produced.

use crate::span::SpanKind;

/// Malformed inline Markdown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownSyntaxError {
    #[error("unbalanced delimiter `{delimiter}` in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("unknown span kind: {0}")]
    UnknownSpanKind(String),

    #[error("{0:?} span requires a url")]
    MissingUrl(SpanKind),
}

/// Document-level problems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownStructureError {
    #[error("document must start with a `# ` heading")]
    MissingTitle,

    #[error("document has no content")]
    EmptyDocument,
}

/// A node that cannot be serialized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("container node requires a tag")]
    MissingTag,

    #[error("<{tag}> container requires children")]
    EmptyChildren { tag: String },

    #[error("leaf node requires a value")]
    EmptyValue,
}

/// Attribute rendering failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("node has no attribute map")]
    NotAMap,

    #[error("attribute map is empty")]
    Empty,
}

/// Error type for mdsite-core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Syntax(#[from] MarkdownSyntaxError),

    #[error(transparent)]
    Document(#[from] MarkdownStructureError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
