//! Model and loader for the raw content state exported by Draft.js-style
//! rich-text editors.
//!
//! The export is a flat sequence of [`ContentBlock`]s plus an [`EntityMap`].
//! Nothing here interprets the blocks; see `draft-renderers-core` for that.
//!
//! # Example
//!
//! ```
//! let state = draft_model::parse(
//!     r#"{"blocks":[{"key":"a","text":"Hi","type":"unstyled"}],"entityMap":{}}"#,
//! )?;
//! assert_eq!(state.blocks.map(|b| b.len()), Some(1));
//! # Ok::<(), draft_model::Error>(())
//! ```
use std::{io::Read, path::Path};

mod error;
mod model;

pub use error::Error;
pub use model::{
    BlockData, BlockType, ContentBlock, Entity, EntityData, EntityMap, EntityRange, InlineRun,
    ListKind, Mutability, RawContentState, StyleRange,
};

/// Parse a raw content state from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not a valid raw content state.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn parse(input: &str) -> Result<RawContentState, Error> {
    let state: RawContentState = serde_json::from_str(input)?;
    tracing::debug!(
        blocks = state.blocks.as_ref().map(Vec::len),
        entities = state.entity_map.len(),
        "parsed raw content state"
    );
    Ok(state)
}

/// Parse a raw content state from a reader.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid JSON.
#[tracing::instrument(skip(reader))]
pub fn parse_from_reader<R: Read>(reader: &mut R) -> Result<RawContentState, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse(&input)
}

/// Parse a raw content state from a file.
///
/// # Errors
///
/// Returns [`Error::File`] if the file can't be read, or [`Error::Json`] if its
/// content is not a valid raw content state.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RawContentState, Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&input)
}
