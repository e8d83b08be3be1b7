use std::{fmt, sync::Arc};

use crate::CustomStyles;

/// Pass-through props forwarded to every leaf.
pub type TextProps = serde_json::Map<String, serde_json::Value>;

/// Default string appended after an ordered list number.
pub const DEFAULT_ORDERED_LIST_SEPARATOR: &str = ".";

/// Default left margin unit per list depth.
pub const DEFAULT_DEPTH_MARGIN: u16 = 8;

/// Navigation callback invoked by leaves when a link is activated.
#[derive(Clone)]
pub struct Navigate(Arc<dyn Fn(&str) + Send + Sync>);

impl Navigate {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the callback with a link target.
    pub fn call(&self, target: &str) {
        (self.0)(target);
    }
}

impl fmt::Debug for Navigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Navigate(..)")
    }
}

/// Render options.
///
/// Use [`Options::builder()`] to construct an instance. This struct is marked
/// `#[non_exhaustive]` to allow adding new fields in future minor versions.
///
/// # Example
///
/// ```
/// use draft_renderers_core::Options;
///
/// let options = Options::builder()
///     .ordered_list_separator(")")
///     .depth_margin(2)
///     .build();
/// assert_eq!(options.ordered_list_separator(), ")");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    custom_styles: CustomStyles,
    navigate: Option<Navigate>,
    ordered_list_separator: String,
    depth_margin: u16,
    text_props: TextProps,
    strict: bool,
    timings: bool,
}

impl Default for Options {
    fn default() -> Self {
        OptionsBuilder::default().build()
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the style overrides.
    #[must_use]
    pub fn custom_styles(&self) -> &CustomStyles {
        &self.custom_styles
    }

    /// Get the navigation callback.
    #[must_use]
    pub fn navigate(&self) -> Option<&Navigate> {
        self.navigate.as_ref()
    }

    /// Get the string appended after ordered list numbers.
    #[must_use]
    pub fn ordered_list_separator(&self) -> &str {
        &self.ordered_list_separator
    }

    /// Get the left margin unit per list depth.
    #[must_use]
    pub fn depth_margin(&self) -> u16 {
        self.depth_margin
    }

    /// Get the pass-through props.
    #[must_use]
    pub fn text_props(&self) -> &TextProps {
        &self.text_props
    }

    /// Get whether configuration gaps are reported as errors.
    ///
    /// When false (the default), an atomic block without an atomic handler is
    /// passed through raw.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Get whether render durations are reported.
    #[must_use]
    pub fn timings(&self) -> bool {
        self.timings
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    custom_styles: CustomStyles,
    navigate: Option<Navigate>,
    ordered_list_separator: String,
    depth_margin: u16,
    text_props: TextProps,
    strict: bool,
    timings: bool,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            custom_styles: CustomStyles::default(),
            navigate: None,
            ordered_list_separator: DEFAULT_ORDERED_LIST_SEPARATOR.to_string(),
            depth_margin: DEFAULT_DEPTH_MARGIN,
            text_props: TextProps::new(),
            strict: false,
            timings: false,
        }
    }
}

impl OptionsBuilder {
    /// Set the style overrides.
    #[must_use]
    pub fn custom_styles(mut self, styles: CustomStyles) -> Self {
        self.custom_styles = styles;
        self
    }

    /// Set the navigation callback forwarded to leaves.
    #[must_use]
    pub fn navigate(mut self, navigate: Navigate) -> Self {
        self.navigate = Some(navigate);
        self
    }

    /// Set the string appended after ordered list numbers.
    #[must_use]
    pub fn ordered_list_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.ordered_list_separator = separator.into();
        self
    }

    /// Set the left margin unit per list depth.
    #[must_use]
    pub fn depth_margin(mut self, margin: u16) -> Self {
        self.depth_margin = margin;
        self
    }

    /// Set the pass-through props.
    #[must_use]
    pub fn text_props(mut self, props: TextProps) -> Self {
        self.text_props = props;
        self
    }

    /// Enable or disable strict mode.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable timing output.
    #[must_use]
    pub fn timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            custom_styles: self.custom_styles,
            navigate: self.navigate,
            ordered_list_separator: self.ordered_list_separator,
            depth_margin: self.depth_margin,
            text_props: self.text_props,
            strict: self.strict,
            timings: self.timings,
        }
    }
}
