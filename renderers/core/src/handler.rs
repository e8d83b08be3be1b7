//! Capabilities the dispatcher depends on but does not implement.
//!
//! - [`LeafRenderer`] turns one block (plus the decisions made by the
//!   dispatcher) into a node. It defines the node type of the whole pass.
//! - [`AtomicHandler`] renders embedded objects and reports which list type
//!   the embed replaced.
//! - [`CustomBlockHandler`] renders block types the dispatcher does not know.
//!
//! Both handlers are implemented for plain closures with the matching
//! signature.

use draft_model::{ContentBlock, EntityMap, ListKind};

use crate::{CustomStyles, Navigate, NodeKey, Options, Style, TextProps};

/// Everything a leaf renderer needs to render one block's text.
#[derive(Clone, Debug)]
pub struct BlockLeaf<'a> {
    /// The block being rendered.
    pub block: &'a ContentBlock,
    /// Entity map of the whole content state.
    pub entity_map: &'a EntityMap,
    /// Caller style overrides.
    pub custom_styles: &'a CustomStyles,
    /// Navigation callback for links, if any.
    pub navigate: Option<&'a Navigate>,
    /// Pass-through props, always carrying `blockKey`.
    pub text_props: TextProps,
}

/// The marker in front of a list item or list-embedded atomic block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListIndicator {
    /// Unordered bullet.
    Bullet,
    /// Ordered numeral followed by the configured separator.
    Number {
        /// Displayed number.
        value: usize,
        /// Separator appended after the number (`.` by default).
        separator: String,
    },
}

impl ListIndicator {
    /// The list kind this indicator belongs to.
    #[must_use]
    pub fn kind(&self) -> ListKind {
        match self {
            Self::Bullet => ListKind::Unordered,
            Self::Number { .. } => ListKind::Ordered,
        }
    }
}

/// A list item block, with its marker and left margin resolved.
#[derive(Clone, Debug)]
pub struct ListItemLeaf<'a> {
    /// Text inputs shared with the other leaves.
    pub leaf: BlockLeaf<'a>,
    /// Bullet or number.
    pub indicator: ListIndicator,
    /// Left margin in renderer units.
    pub margin_left: u32,
}

/// Renders individual blocks into nodes of type [`LeafRenderer::Node`].
pub trait LeafRenderer {
    /// The node type produced by the render pass.
    type Node;

    /// Render a paragraph, header or code block.
    fn text(&self, leaf: &BlockLeaf<'_>) -> Self::Node;

    /// Render a quote block.
    fn quote(&self, leaf: &BlockLeaf<'_>) -> Self::Node;

    /// Render an unordered list item.
    fn unordered_item(&self, item: &ListItemLeaf<'_>) -> Self::Node;

    /// Render an ordered list item.
    fn ordered_item(&self, item: &ListItemLeaf<'_>) -> Self::Node;

    /// Render a standalone list marker, placed in front of an embed.
    fn indicator(&self, indicator: &ListIndicator, styles: &CustomStyles) -> Self::Node;

    /// Render the spacer that closes a list run.
    fn separator(&self, key: NodeKey, style: Option<&Style>) -> Self::Node;

    /// Wrap one block's output: an optional separator followed by the content.
    /// `content` is `None` for placeholders.
    fn group(
        &self,
        key: NodeKey,
        separator: Option<Self::Node>,
        content: Option<Self::Node>,
    ) -> Self::Node;

    /// Arrange a list marker and an embed horizontally.
    fn row(&self, key: NodeKey, indicator: Option<Self::Node>, embed: Self::Node) -> Self::Node;

    /// Forward an atomic block untouched when no atomic handler is configured.
    fn passthrough(&self, block: &ContentBlock) -> Self::Node;
}

/// What an [`AtomicHandler`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomicRender<N> {
    /// The rendered embed.
    pub node: N,
    /// The list type the embed replaced, if it sat inside a list.
    pub original_list: Option<ListKind>,
}

impl<N> AtomicRender<N> {
    /// An embed that was not part of a list.
    pub fn new(node: N) -> Self {
        Self {
            node,
            original_list: None,
        }
    }

    /// Mark the embed as replacing a list item of `kind`.
    #[must_use]
    pub fn in_list(mut self, kind: Option<ListKind>) -> Self {
        self.original_list = kind;
        self
    }
}

/// Renders atomic (embedded) blocks.
///
/// Implementations must not try to number list items themselves; the
/// dispatcher adds the marker based on [`AtomicRender::original_list`].
pub trait AtomicHandler<N> {
    /// Render `block`, resolving its entities through `entity_map`.
    fn render(&self, block: &ContentBlock, entity_map: &EntityMap) -> AtomicRender<N>;
}

impl<N, F> AtomicHandler<N> for F
where
    F: Fn(&ContentBlock, &EntityMap) -> AtomicRender<N>,
{
    fn render(&self, block: &ContentBlock, entity_map: &EntityMap) -> AtomicRender<N> {
        self(block, entity_map)
    }
}

/// The configuration handed to a [`CustomBlockHandler`].
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// Entity map of the whole content state.
    pub entity_map: &'a EntityMap,
    /// The full configuration of the pass.
    pub options: &'a Options,
}

/// Renders block types the dispatcher doesn't recognize.
pub trait CustomBlockHandler<N> {
    /// Render `block`. The result is emitted as-is.
    fn render(&self, block: &ContentBlock, context: &RenderContext<'_>) -> N;
}

impl<N, F> CustomBlockHandler<N> for F
where
    F: Fn(&ContentBlock, &RenderContext<'_>) -> N,
{
    fn render(&self, block: &ContentBlock, context: &RenderContext<'_>) -> N {
        self(block, context)
    }
}
