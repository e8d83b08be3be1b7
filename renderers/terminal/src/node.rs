//! The node tree produced for the terminal.

use draft_model::ContentBlock;
use draft_renderers_core::{ListIndicator, NodeKey, Style};

/// How a text block is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextKind {
    Paragraph,
    /// Header level 1-6.
    Header(u8),
    Code,
}

/// A run of inline text with its styles and resolved link target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub styles: Vec<String>,
    pub entity: Option<u32>,
    pub link: Option<String>,
}

impl Span {
    #[must_use]
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// One block's output: an optional separator followed by content.
    Group { key: NodeKey, children: Vec<Node> },
    /// Children laid out on one line.
    Row { key: NodeKey, children: Vec<Node> },
    /// Blank line closing a list run.
    Separator { key: NodeKey },
    Text {
        kind: TextKind,
        spans: Vec<Span>,
        style: Option<Style>,
    },
    Quote {
        spans: Vec<Span>,
        style: Option<Style>,
    },
    ListItem {
        indicator: ListIndicator,
        margin: u32,
        spans: Vec<Span>,
        /// Style of the item text.
        style: Option<Style>,
        marker_style: Option<Style>,
    },
    Indicator {
        indicator: ListIndicator,
        style: Option<Style>,
    },
    /// Rendered atomic block.
    Embed(String),
    /// Atomic block forwarded without an atomic handler.
    Raw(Box<ContentBlock>),
}

impl Node {
    /// Plain text content of this node and its children, without markers.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Group { children, .. } | Self::Row { children, .. } => children
                .iter()
                .map(Self::text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            Self::Text { spans, .. } | Self::Quote { spans, .. } | Self::ListItem { spans, .. } => {
                spans.iter().map(|span| span.text.as_str()).collect()
            }
            Self::Embed(label) => label.clone(),
            Self::Separator { .. } | Self::Indicator { .. } | Self::Raw(_) => String::new(),
        }
    }

    /// Whether this node starts with a list separator.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        match self {
            Self::Group { children, .. } => {
                matches!(children.first(), Some(Self::Separator { .. }))
            }
            Self::Row { .. }
            | Self::Separator { .. }
            | Self::Text { .. }
            | Self::Quote { .. }
            | Self::ListItem { .. }
            | Self::Indicator { .. }
            | Self::Embed(_)
            | Self::Raw(_) => false,
        }
    }
}
