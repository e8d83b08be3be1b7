//! Inline style and entity ranges.
//!
//! Offsets and lengths are expressed in UTF-16 code units, which is how the
//! editor measures its strings. [`segment`] maps them back onto Rust `char`s.

use serde::{Deserialize, Serialize};

/// An inline style (`BOLD`, `ITALIC`, ...) applied to a span of text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

impl StyleRange {
    #[must_use]
    pub fn new<S: Into<String>>(offset: usize, length: usize, style: S) -> Self {
        Self {
            offset,
            length,
            style: style.into(),
        }
    }

    fn covers(&self, position: usize) -> bool {
        position >= self.offset && position < self.offset.saturating_add(self.length)
    }
}

/// A reference from a span of text into the entity map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: u32,
}

impl EntityRange {
    #[must_use]
    pub fn new(offset: usize, length: usize, key: u32) -> Self {
        Self {
            offset,
            length,
            key,
        }
    }

    fn covers(&self, position: usize) -> bool {
        position >= self.offset && position < self.offset.saturating_add(self.length)
    }
}

/// A maximal span of text sharing the same styles and entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    /// Styles in the order they first appear in the block's style ranges.
    pub styles: Vec<String>,
    pub entity: Option<u32>,
}

impl InlineRun {
    #[must_use]
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }
}

/// Split `text` into [`InlineRun`]s.
///
/// Ranges past the end of the text are ignored. When entity ranges overlap the
/// first one listed wins.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub(crate) fn segment(
    text: &str,
    style_ranges: &[StyleRange],
    entity_ranges: &[EntityRange],
) -> Vec<InlineRun> {
    let mut runs: Vec<InlineRun> = Vec::new();
    let mut position = 0usize;

    for ch in text.chars() {
        let mut styles: Vec<String> = Vec::new();
        for range in style_ranges.iter().filter(|r| r.covers(position)) {
            if !styles.contains(&range.style) {
                styles.push(range.style.clone());
            }
        }
        let entity = entity_ranges
            .iter()
            .find(|r| r.covers(position))
            .map(|r| r.key);

        match runs.last_mut() {
            Some(run) if run.styles == styles && run.entity == entity => run.text.push(ch),
            Some(_) | None => runs.push(InlineRun {
                text: ch.to_string(),
                styles,
                entity,
            }),
        }
        position += ch.len_utf16();
    }

    runs
}
