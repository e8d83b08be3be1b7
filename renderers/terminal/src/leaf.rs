use draft_model::{BlockType, ContentBlock, EntityMap, InlineRun, ListKind};
use draft_renderers_core::{
    BlockLeaf, CustomStyles, LeafRenderer, ListIndicator, ListItemLeaf, NodeKey, Style,
    style::names,
};

use crate::{Node, Span, TextKind};

/// Entity type whose `url` (or `href`) becomes the link target of its text.
const LINK_ENTITY: &str = "LINK";

/// Leaf renderer building the terminal [`Node`] tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalLeaf;

impl TerminalLeaf {
    fn spans(leaf: &BlockLeaf<'_>) -> Vec<Span> {
        leaf.block
            .runs()
            .into_iter()
            .map(|run| span(run, leaf.entity_map))
            .collect()
    }

    fn block_style(leaf: &BlockLeaf<'_>) -> Option<Style> {
        leaf.custom_styles
            .get(leaf.block.block_type.as_str())
            .cloned()
    }

    fn marker_style(kind: ListKind, styles: &CustomStyles) -> Option<Style> {
        let name = match kind {
            ListKind::Ordered => names::ORDERED_LIST_ITEM_NUMBER,
            ListKind::Unordered => names::UNORDERED_LIST_ITEM_BULLET,
        };
        styles.get(name).cloned()
    }

    fn container_style(kind: ListKind, styles: &CustomStyles) -> Option<Style> {
        let name = match kind {
            ListKind::Ordered => names::ORDERED_LIST_ITEM_CONTAINER,
            ListKind::Unordered => names::UNORDERED_LIST_ITEM_CONTAINER,
        };
        styles.get(name).cloned()
    }

    fn list_item(item: &ListItemLeaf<'_>) -> Node {
        let kind = item.indicator.kind();
        Node::ListItem {
            indicator: item.indicator.clone(),
            margin: item.margin_left,
            spans: Self::spans(&item.leaf),
            style: Self::container_style(kind, item.leaf.custom_styles),
            marker_style: Self::marker_style(kind, item.leaf.custom_styles),
        }
    }
}

fn span(run: InlineRun, entity_map: &EntityMap) -> Span {
    let link = run
        .entity
        .and_then(|key| entity_map.get(key))
        .filter(|entity| entity.kind == LINK_ENTITY)
        .and_then(|entity| entity.data_str("url").or_else(|| entity.data_str("href")))
        .map(str::to_string);
    Span {
        text: run.text,
        styles: run.styles,
        entity: run.entity,
        link,
    }
}

impl LeafRenderer for TerminalLeaf {
    type Node = Node;

    fn text(&self, leaf: &BlockLeaf<'_>) -> Node {
        let kind = if let Some(level) = leaf.block.block_type.header_level() {
            TextKind::Header(level)
        } else if leaf.block.block_type == BlockType::CodeBlock {
            TextKind::Code
        } else {
            TextKind::Paragraph
        };
        Node::Text {
            kind,
            spans: Self::spans(leaf),
            style: Self::block_style(leaf),
        }
    }

    fn quote(&self, leaf: &BlockLeaf<'_>) -> Node {
        Node::Quote {
            spans: Self::spans(leaf),
            style: leaf.custom_styles.get(names::BLOCKQUOTE).cloned(),
        }
    }

    fn unordered_item(&self, item: &ListItemLeaf<'_>) -> Node {
        Self::list_item(item)
    }

    fn ordered_item(&self, item: &ListItemLeaf<'_>) -> Node {
        Self::list_item(item)
    }

    fn indicator(&self, indicator: &ListIndicator, styles: &CustomStyles) -> Node {
        Node::Indicator {
            indicator: indicator.clone(),
            style: Self::marker_style(indicator.kind(), styles),
        }
    }

    /// A blank line carries no style, so `viewAfterList` is not used here.
    fn separator(&self, key: NodeKey, _style: Option<&Style>) -> Node {
        Node::Separator { key }
    }

    fn group(&self, key: NodeKey, separator: Option<Node>, content: Option<Node>) -> Node {
        Node::Group {
            key,
            children: separator.into_iter().chain(content).collect(),
        }
    }

    fn row(&self, key: NodeKey, indicator: Option<Node>, embed: Node) -> Node {
        Node::Row {
            key,
            children: indicator.into_iter().chain(Some(embed)).collect(),
        }
    }

    fn passthrough(&self, block: &ContentBlock) -> Node {
        Node::Raw(Box::new(block.clone()))
    }
}

#[cfg(test)]
mod tests {
    use draft_model::{Entity, EntityRange, StyleRange};
    use draft_renderers_core::TextProps;
    use pretty_assertions::assert_eq;

    use super::*;

    fn leaf<'a>(
        block: &'a ContentBlock,
        entity_map: &'a EntityMap,
        styles: &'a CustomStyles,
    ) -> BlockLeaf<'a> {
        BlockLeaf {
            block,
            entity_map,
            custom_styles: styles,
            navigate: None,
            text_props: TextProps::new(),
        }
    }

    #[test]
    fn header_level_is_kept() {
        let block = ContentBlock::new("a", BlockType::HeaderThree, "Title");
        let entity_map = EntityMap::new();
        let styles = CustomStyles::new();
        let node = TerminalLeaf.text(&leaf(&block, &entity_map, &styles));
        assert!(matches!(
            node,
            Node::Text {
                kind: TextKind::Header(3),
                ..
            }
        ));
    }

    #[test]
    fn link_entities_resolve_their_url() {
        let block = ContentBlock::new("a", BlockType::Unstyled, "see docs")
            .with_entity_range(EntityRange::new(4, 4, 0))
            .with_style_range(StyleRange::new(0, 3, "BOLD"));
        let mut entity_map = EntityMap::new();
        entity_map.insert(
            0,
            Entity::new("LINK").with_data("url", serde_json::json!("https://docs.rs")),
        );
        let styles = CustomStyles::new();
        let node = TerminalLeaf.text(&leaf(&block, &entity_map, &styles));
        assert_eq!(
            node,
            Node::Text {
                kind: TextKind::Paragraph,
                spans: vec![
                    Span {
                        text: "see".to_string(),
                        styles: vec!["BOLD".to_string()],
                        ..Span::default()
                    },
                    Span {
                        text: " ".to_string(),
                        ..Span::default()
                    },
                    Span {
                        text: "docs".to_string(),
                        entity: Some(0),
                        link: Some("https://docs.rs".to_string()),
                        ..Span::default()
                    },
                ],
                style: None,
            }
        );
    }

    #[test]
    fn block_style_is_looked_up_by_type_tag() {
        let block = ContentBlock::new("a", BlockType::CodeBlock, "let x = 1;");
        let entity_map = EntityMap::new();
        let style = Style {
            color: Some("green".to_string()),
            ..Style::default()
        };
        let styles = CustomStyles::new().with("code-block", style.clone());
        let node = TerminalLeaf.text(&leaf(&block, &entity_map, &styles));
        assert_eq!(
            node,
            Node::Text {
                kind: TextKind::Code,
                spans: vec![Span {
                    text: "let x = 1;".to_string(),
                    ..Span::default()
                }],
                style: Some(style),
            }
        );
    }

    #[test]
    fn group_drops_missing_parts() {
        let separator = TerminalLeaf.separator(NodeKey::generate(), None);
        let group = TerminalLeaf.group(NodeKey::generate(), Some(separator), None);
        assert!(group.has_separator());
        assert_eq!(group.text(), "");
    }

    #[rstest::rstest]
    #[case::ordered(
        ListIndicator::Number { value: 1, separator: ".".to_string() },
        "orderedListItemContainer"
    )]
    #[case::unordered(ListIndicator::Bullet, "unorderedListItemContainer")]
    fn list_item_text_uses_the_container_style(
        #[case] indicator: ListIndicator,
        #[case] name: &str,
    ) {
        let block = ContentBlock::new("a", BlockType::UnorderedListItem, "item");
        let entity_map = EntityMap::new();
        let container = Style {
            italic: Some(true),
            ..Style::default()
        };
        let styles = CustomStyles::new().with(name, container.clone());
        let item = ListItemLeaf {
            leaf: leaf(&block, &entity_map, &styles),
            indicator: indicator.clone(),
            margin_left: 4,
        };
        assert_eq!(
            TerminalLeaf.unordered_item(&item),
            Node::ListItem {
                indicator,
                margin: 4,
                spans: vec![Span {
                    text: "item".to_string(),
                    ..Span::default()
                }],
                style: Some(container),
                marker_style: None,
            }
        );
    }

    #[test]
    fn separator_ignores_the_view_after_list_style() {
        let style = Style {
            color: Some("red".to_string()),
            ..Style::default()
        };
        let separator = TerminalLeaf.separator(NodeKey::generate(), Some(&style));
        assert!(separator.has_separator());
        assert_eq!(separator.text(), "");
    }
}
