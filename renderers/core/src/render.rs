//! The block dispatcher.
//!
//! [`BlockRenderer::render`] walks the blocks once, left to right. Each block
//! produces exactly one top-level node; list structure is recovered through a
//! [`ListCounters`] owned by the pass.

use draft_model::{BlockType, ContentBlock, EntityMap, ListKind, RawContentState};

use crate::{
    AtomicHandler, AtomicRender, BlockLeaf, CustomBlockHandler, Error, LeafRenderer,
    ListCounters, ListIndicator, ListItemLeaf, NodeKey, Options, RenderContext, style::names,
};

/// Left margin of a list item at `depth`: `(depth + 1) * unit`.
///
/// `unit` is the `marginLeft` of the marker style for `kind` when set to a
/// non-zero value, otherwise [`Options::depth_margin`].
#[must_use]
pub fn list_margin(options: &Options, kind: ListKind, depth: u32) -> u32 {
    let style_name = match kind {
        ListKind::Ordered => names::ORDERED_LIST_ITEM_NUMBER,
        ListKind::Unordered => names::UNORDERED_LIST_ITEM_BULLET,
    };
    let unit = options
        .custom_styles()
        .get(style_name)
        .and_then(|style| style.margin_left)
        .filter(|margin| *margin > 0)
        .unwrap_or_else(|| options.depth_margin());
    depth.saturating_add(1).saturating_mul(u32::from(unit))
}

/// Renders a [`RawContentState`] into nodes using a [`LeafRenderer`].
///
/// # Example
///
/// ```ignore
/// let nodes = BlockRenderer::new(&leaf, &options)
///     .with_atomic_handler(&embeds)
///     .render(&content)?;
/// ```
pub struct BlockRenderer<'a, R: LeafRenderer> {
    leaf: &'a R,
    options: &'a Options,
    atomic_handler: Option<&'a dyn AtomicHandler<R::Node>>,
    custom_block_handler: Option<&'a dyn CustomBlockHandler<R::Node>>,
}

impl<'a, R: LeafRenderer> BlockRenderer<'a, R> {
    /// Create a renderer with no handlers configured.
    #[must_use]
    pub fn new(leaf: &'a R, options: &'a Options) -> Self {
        Self {
            leaf,
            options,
            atomic_handler: None,
            custom_block_handler: None,
        }
    }

    /// Set the handler for atomic blocks.
    #[must_use]
    pub fn with_atomic_handler(mut self, handler: &'a dyn AtomicHandler<R::Node>) -> Self {
        self.atomic_handler = Some(handler);
        self
    }

    /// Set the handler for unrecognized block types.
    #[must_use]
    pub fn with_custom_block_handler(
        mut self,
        handler: &'a dyn CustomBlockHandler<R::Node>,
    ) -> Self {
        self.custom_block_handler = Some(handler);
        self
    }

    /// Render every block of `content`.
    ///
    /// Returns `Ok(None)` when the content has no block list at all. Otherwise
    /// the result holds exactly one node per block, in order.
    ///
    /// # Errors
    ///
    /// Only in strict mode: [`Error::MissingAtomicHandler`] when an atomic
    /// block is found and no atomic handler is configured.
    #[tracing::instrument(skip_all, fields(blocks = content.blocks.as_ref().map(Vec::len)))]
    pub fn render(&self, content: &RawContentState) -> Result<Option<Vec<R::Node>>, Error> {
        let Some(blocks) = content.blocks.as_ref() else {
            tracing::debug!("content has no blocks, nothing to render");
            return Ok(None);
        };

        let mut counters = ListCounters::new();
        let nodes = blocks
            .iter()
            .map(|block| self.render_block(block, &content.entity_map, &mut counters))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(nodes))
    }

    #[tracing::instrument(level = "trace", skip(self, entity_map, counters), fields(key = %block.key, block_type = %block.block_type))]
    fn render_block(
        &self,
        block: &ContentBlock,
        entity_map: &EntityMap,
        counters: &mut ListCounters,
    ) -> Result<R::Node, Error> {
        let node = match &block.block_type {
            BlockType::Unstyled
            | BlockType::Paragraph
            | BlockType::HeaderOne
            | BlockType::HeaderTwo
            | BlockType::HeaderThree
            | BlockType::HeaderFour
            | BlockType::HeaderFive
            | BlockType::HeaderSix
            | BlockType::CodeBlock => {
                let separator = self.close_all(counters);
                let content = self.leaf.text(&self.block_leaf(block, entity_map));
                self.leaf.group(NodeKey::generate(), separator, Some(content))
            }
            BlockType::Blockquote => {
                let separator = self.close_all(counters);
                let content = self.leaf.quote(&self.block_leaf(block, entity_map));
                self.leaf.group(NodeKey::generate(), separator, Some(content))
            }
            BlockType::Atomic => return self.render_atomic(block, entity_map, counters),
            BlockType::UnorderedListItem => {
                counters.get_mut(ListKind::Unordered).advance();
                let separator = self.close_other(counters, ListKind::Unordered);
                let item = ListItemLeaf {
                    leaf: self.block_leaf(block, entity_map),
                    indicator: ListIndicator::Bullet,
                    margin_left: list_margin(self.options, ListKind::Unordered, block.depth),
                };
                let content = self.leaf.unordered_item(&item);
                self.leaf.group(NodeKey::generate(), separator, Some(content))
            }
            BlockType::OrderedListItem => {
                let indicator = self.number(counters, block.depth);
                let separator = self.close_other(counters, ListKind::Ordered);
                let item = ListItemLeaf {
                    leaf: self.block_leaf(block, entity_map),
                    indicator,
                    margin_left: list_margin(self.options, ListKind::Ordered, block.depth),
                };
                let content = self.leaf.ordered_item(&item);
                self.leaf.group(NodeKey::generate(), separator, Some(content))
            }
            BlockType::Custom(tag) => {
                if let Some(handler) = self.custom_block_handler {
                    // the handler's node is emitted untouched, so no separator
                    counters.close_all();
                    let context = RenderContext {
                        entity_map,
                        options: self.options,
                    };
                    handler.render(block, &context)
                } else {
                    tracing::debug!(%tag, "no custom block handler, rendering placeholder");
                    let separator = self.close_all(counters);
                    self.leaf.group(NodeKey::generate(), separator, None)
                }
            }
        };
        Ok(node)
    }

    fn render_atomic(
        &self,
        block: &ContentBlock,
        entity_map: &EntityMap,
        counters: &mut ListCounters,
    ) -> Result<R::Node, Error> {
        let Some(handler) = self.atomic_handler else {
            if self.options.strict() {
                return Err(Error::MissingAtomicHandler {
                    key: block.key.clone(),
                });
            }
            tracing::warn!(key = %block.key, "no atomic handler configured, passing block through");
            return Ok(self.leaf.passthrough(block));
        };

        let AtomicRender {
            node,
            original_list,
        } = handler.render(block, entity_map);

        let (separator, indicator) = match original_list {
            Some(ListKind::Unordered) => {
                counters.get_mut(ListKind::Unordered).advance();
                (
                    self.close_other(counters, ListKind::Unordered),
                    Some(ListIndicator::Bullet),
                )
            }
            Some(ListKind::Ordered) => {
                let indicator = self.number(counters, block.depth);
                (self.close_other(counters, ListKind::Ordered), Some(indicator))
            }
            None => (self.close_all(counters), None),
        };

        let indicator = indicator
            .map(|indicator| self.leaf.indicator(&indicator, self.options.custom_styles()));
        let row = self.leaf.row(NodeKey::generate(), indicator, node);
        Ok(self.leaf.group(NodeKey::generate(), separator, Some(row)))
    }

    fn number(&self, counters: &mut ListCounters, depth: u32) -> ListIndicator {
        ListIndicator::Number {
            value: counters.get_mut(ListKind::Ordered).next_number(depth),
            separator: self.options.ordered_list_separator().to_string(),
        }
    }

    fn close_all(&self, counters: &mut ListCounters) -> Option<R::Node> {
        counters.close_all().then(|| self.separator())
    }

    /// An item of `kind` arrived: close the run of the other kind.
    fn close_other(&self, counters: &mut ListCounters, kind: ListKind) -> Option<R::Node> {
        counters.close(kind.other()).then(|| self.separator())
    }

    fn separator(&self) -> R::Node {
        self.leaf.separator(
            NodeKey::generate(),
            self.options.custom_styles().get(names::VIEW_AFTER_LIST),
        )
    }

    fn block_leaf<'b>(
        &'b self,
        block: &'b ContentBlock,
        entity_map: &'b EntityMap,
    ) -> BlockLeaf<'b> {
        let mut text_props = self.options.text_props().clone();
        text_props.insert(
            "blockKey".to_string(),
            serde_json::Value::String(block.key.clone()),
        );
        BlockLeaf {
            block,
            entity_map,
            custom_styles: self.options.custom_styles(),
            navigate: self.options.navigate(),
            text_props,
        }
    }
}
