//! Caller-provided style overrides.
//!
//! Styles are opaque to the dispatcher with one exception: the `marginLeft` of
//! a list marker style replaces the depth margin unit (see
//! [`list_margin`](crate::list_margin)).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Well-known style names.
pub mod names {
    /// Spacer inserted after a list run.
    pub const VIEW_AFTER_LIST: &str = "viewAfterList";
    /// Number of an ordered list item.
    pub const ORDERED_LIST_ITEM_NUMBER: &str = "orderedListItemNumber";
    /// Container of an ordered list item.
    pub const ORDERED_LIST_ITEM_CONTAINER: &str = "orderedListItemContainer";
    /// Bullet of an unordered list item.
    pub const UNORDERED_LIST_ITEM_BULLET: &str = "unorderedListItemBullet";
    /// Container of an unordered list item.
    pub const UNORDERED_LIST_ITEM_CONTAINER: &str = "unorderedListItemContainer";
    /// Quote blocks.
    pub const BLOCKQUOTE: &str = "blockquote";
}

/// A single style override. Every field is optional; absent means "no
/// override".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    /// Left margin unit, multiplied by `depth + 1` for list markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<u16>,
    /// Foreground color name (`red`, `dark_grey`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Render in bold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Render in italics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Render underlined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

/// Style overrides keyed by style name or block type tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomStyles(FxHashMap<String, Style>);

impl CustomStyles {
    /// No overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the override for `name`.
    #[must_use]
    pub fn with<S: Into<String>>(mut self, name: S, style: Style) -> Self {
        self.0.insert(name.into(), style);
        self
    }

    /// Look up the override for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.0.get(name)
    }

    /// Whether no overrides are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() -> Result<(), serde_json::Error> {
        let styles: CustomStyles = serde_json::from_str(
            r#"{"orderedListItemNumber":{"marginLeft":4,"bold":true},"blockquote":{"color":"grey"}}"#,
        )?;
        assert_eq!(
            styles
                .get(names::ORDERED_LIST_ITEM_NUMBER)
                .and_then(|s| s.margin_left),
            Some(4)
        );
        assert_eq!(
            styles
                .get(names::BLOCKQUOTE)
                .and_then(|s| s.color.as_deref()),
            Some("grey")
        );
        assert!(styles.get(names::VIEW_AFTER_LIST).is_none());
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> Result<(), serde_json::Error> {
        let style: Style = serde_json::from_str(r#"{"fontSize":12,"italic":true}"#)?;
        assert_eq!(style.italic, Some(true));
        Ok(())
    }
}
