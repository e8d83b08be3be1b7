use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Entity payload (`url`, `src`, ...). Its shape depends on the entity type.
pub type EntityData = serde_json::Map<String, serde_json::Value>;

/// How an entity behaves when the text it covers is edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mutability {
    #[default]
    Mutable,
    Immutable,
    Segmented,
}

/// An `Entity` is metadata (a link, an image, a mention) attached to a span of
/// text or to an atomic block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub mutability: Mutability,
    #[serde(default)]
    pub data: EntityData,
}

impl Entity {
    #[must_use]
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self {
            kind: kind.into(),
            mutability: Mutability::default(),
            data: EntityData::new(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Mapping from entity key to [`Entity`].
///
/// Keys are strings in the JSON export (`"0"`, `"1"`, ...) but entity ranges
/// reference them by number; [`EntityMap::get`] accepts the number.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap(FxHashMap<String, Entity>);

impl EntityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: u32, entity: Entity) {
        self.0.insert(key.to_string(), entity);
    }

    #[must_use]
    pub fn get(&self, key: u32) -> Option<&Entity> {
        self.0.get(&key.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
