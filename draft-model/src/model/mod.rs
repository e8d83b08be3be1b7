//! The raw content state exported by the editor.

use serde::{Deserialize, Serialize};

mod block;
mod entity;
mod ranges;

pub use block::{BlockData, BlockType, ContentBlock, ListKind};
pub use entity::{Entity, EntityData, EntityMap, Mutability};
pub use ranges::{EntityRange, InlineRun, StyleRange};

/// A `RawContentState` is the serialized form of an editor document: a flat
/// list of blocks plus the entities they reference.
///
/// `blocks` is `None` when the export has no blocks at all (missing field or
/// `null`), which is distinct from an empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentState {
    #[serde(default)]
    pub blocks: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub entity_map: EntityMap,
}

impl RawContentState {
    #[must_use]
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks: Some(blocks),
            entity_map: EntityMap::default(),
        }
    }

    #[must_use]
    pub fn with_entity_map(mut self, entity_map: EntityMap) -> Self {
        self.entity_map = entity_map;
        self
    }
}
