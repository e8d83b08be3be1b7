use draft_model::{ContentBlock, Entity, EntityMap, ListKind};
use draft_renderers_core::{AtomicHandler, AtomicRender};

use crate::Node;

/// Block data key holding the type a block had before it became atomic.
const ORIGINAL_TYPE_KEY: &str = "oldType";

/// Atomic handler rendering embeds as bracketed labels.
///
/// The label comes from the first entity of the block: images show their
/// `alt` text (or `src`), anything else shows its lowercased entity type.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbedHandler;

impl EmbedHandler {
    fn label(entity: Option<&Entity>) -> String {
        let Some(entity) = entity else {
            return "[embed]".to_string();
        };
        if entity.kind.eq_ignore_ascii_case("IMAGE") {
            return match entity.data_str("alt").filter(|alt| !alt.is_empty()) {
                Some(alt) => format!("[image: {alt}]"),
                None => entity
                    .data_str("src")
                    .map_or_else(|| "[image]".to_string(), |src| format!("[image: {src}]")),
            };
        }
        format!("[{}]", entity.kind.to_lowercase())
    }
}

impl AtomicHandler<Node> for EmbedHandler {
    fn render(&self, block: &ContentBlock, entity_map: &EntityMap) -> AtomicRender<Node> {
        let entity = block
            .entity_ranges
            .first()
            .and_then(|range| entity_map.get(range.key));
        let original_list = block.data_str(ORIGINAL_TYPE_KEY).and_then(ListKind::from_tag);
        tracing::trace!(key = %block.key, ?original_list, "rendering embed");
        AtomicRender::new(Node::Embed(Self::label(entity))).in_list(original_list)
    }
}

#[cfg(test)]
mod tests {
    use draft_model::{BlockType, EntityRange};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn atomic(entity: Option<Entity>) -> (ContentBlock, EntityMap) {
        let mut block = ContentBlock::new("a", BlockType::Atomic, " ");
        let mut entity_map = EntityMap::new();
        if let Some(entity) = entity {
            entity_map.insert(0, entity);
            block = block.with_entity_range(EntityRange::new(0, 1, 0));
        }
        (block, entity_map)
    }

    #[rstest]
    #[case::image_alt(
        Some(Entity::new("IMAGE")
            .with_data("src", serde_json::json!("a.png"))
            .with_data("alt", serde_json::json!("A chart"))),
        "[image: A chart]"
    )]
    #[case::image_src(
        Some(Entity::new("IMAGE").with_data("src", serde_json::json!("a.png"))),
        "[image: a.png]"
    )]
    #[case::image_bare(Some(Entity::new("IMAGE")), "[image]")]
    #[case::other_type(Some(Entity::new("VIDEO")), "[video]")]
    #[case::no_entity(None, "[embed]")]
    fn labels(#[case] entity: Option<Entity>, #[case] expected: &str) {
        let (block, entity_map) = atomic(entity);
        let rendered = EmbedHandler.render(&block, &entity_map);
        assert_eq!(rendered.node, Node::Embed(expected.to_string()));
        assert_eq!(rendered.original_list, None);
    }

    #[rstest]
    #[case("ordered-list-item", Some(ListKind::Ordered))]
    #[case("unordered-list-item", Some(ListKind::Unordered))]
    #[case("unstyled", None)]
    fn original_list_type_comes_from_block_data(
        #[case] old_type: &str,
        #[case] expected: Option<ListKind>,
    ) {
        let (block, entity_map) = atomic(None);
        let block = block.with_data(ORIGINAL_TYPE_KEY, serde_json::json!(old_type));
        let rendered = EmbedHandler.render(&block, &entity_map);
        assert_eq!(rendered.original_list, expected);
    }
}
