//! Content blocks and their type tags.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ranges::{EntityRange, InlineRun, StyleRange, segment};

/// Block-level data attached by the editor (alignment, original type, etc.).
pub type BlockData = serde_json::Map<String, serde_json::Value>;

/// The two list kinds a block can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The kind that is not `self`.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Unordered => Self::Ordered,
            Self::Ordered => Self::Unordered,
        }
    }

    /// Parse a list kind from a block type tag, ignoring non-list tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        BlockType::from(tag).list_kind()
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered => write!(f, "unordered-list-item"),
            Self::Ordered => write!(f, "ordered-list-item"),
        }
    }
}

/// The declared type of a [`ContentBlock`].
///
/// Every tag the editor ships with has its own variant. Anything else is kept
/// verbatim in [`BlockType::Custom`] so it can be routed to an
/// application-defined handler.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    CodeBlock,
    Atomic,
    Blockquote,
    UnorderedListItem,
    OrderedListItem,
    Custom(String),
}

impl BlockType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unstyled => "unstyled",
            Self::Paragraph => "paragraph",
            Self::HeaderOne => "header-one",
            Self::HeaderTwo => "header-two",
            Self::HeaderThree => "header-three",
            Self::HeaderFour => "header-four",
            Self::HeaderFive => "header-five",
            Self::HeaderSix => "header-six",
            Self::CodeBlock => "code-block",
            Self::Atomic => "atomic",
            Self::Blockquote => "blockquote",
            Self::UnorderedListItem => "unordered-list-item",
            Self::OrderedListItem => "ordered-list-item",
            Self::Custom(tag) => tag,
        }
    }

    /// Header level (1-6) for the `header-*` types.
    #[must_use]
    pub fn header_level(&self) -> Option<u8> {
        match self {
            Self::HeaderOne => Some(1),
            Self::HeaderTwo => Some(2),
            Self::HeaderThree => Some(3),
            Self::HeaderFour => Some(4),
            Self::HeaderFive => Some(5),
            Self::HeaderSix => Some(6),
            Self::Unstyled
            | Self::Paragraph
            | Self::CodeBlock
            | Self::Atomic
            | Self::Blockquote
            | Self::UnorderedListItem
            | Self::OrderedListItem
            | Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::UnorderedListItem => Some(ListKind::Unordered),
            Self::OrderedListItem => Some(ListKind::Ordered),
            Self::Unstyled
            | Self::Paragraph
            | Self::HeaderOne
            | Self::HeaderTwo
            | Self::HeaderThree
            | Self::HeaderFour
            | Self::HeaderFive
            | Self::HeaderSix
            | Self::CodeBlock
            | Self::Atomic
            | Self::Blockquote
            | Self::Custom(_) => None,
        }
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        match tag {
            "unstyled" => Self::Unstyled,
            "paragraph" => Self::Paragraph,
            "header-one" => Self::HeaderOne,
            "header-two" => Self::HeaderTwo,
            "header-three" => Self::HeaderThree,
            "header-four" => Self::HeaderFour,
            "header-five" => Self::HeaderFive,
            "header-six" => Self::HeaderSix,
            "code-block" => Self::CodeBlock,
            "atomic" => Self::Atomic,
            "blockquote" => Self::Blockquote,
            "unordered-list-item" => Self::UnorderedListItem,
            "ordered-list-item" => Self::OrderedListItem,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<ListKind> for BlockType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => Self::UnorderedListItem,
            ListKind::Ordered => Self::OrderedListItem,
        }
    }
}

impl FromStr for BlockType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for BlockType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from(tag.as_str()))
    }
}

/// One unit of rich text as exported by the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub data: BlockData,
    #[serde(default)]
    pub inline_style_ranges: Vec<StyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
    /// Nesting depth. 0 is the outermost level.
    #[serde(default)]
    pub depth: u32,
}

impl ContentBlock {
    /// Create a block with no styles, entities or data.
    #[must_use]
    pub fn new<K, T>(key: K, block_type: BlockType, text: T) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        Self {
            key: key.into(),
            text: text.into(),
            block_type,
            data: BlockData::new(),
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_style_range(mut self, range: StyleRange) -> Self {
        self.inline_style_ranges.push(range);
        self
    }

    #[must_use]
    pub fn with_entity_range(mut self, range: EntityRange) -> Self {
        self.entity_ranges.push(range);
        self
    }

    #[must_use]
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Get a string value from the block data.
    #[must_use]
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }

    /// Split the text into runs sharing the same inline styles and entity.
    #[must_use]
    pub fn runs(&self) -> Vec<InlineRun> {
        segment(&self.text, &self.inline_style_ranges, &self.entity_ranges)
    }
}
