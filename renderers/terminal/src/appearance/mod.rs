mod capabilities;
mod theme;

pub use capabilities::Capabilities;
pub(crate) use theme::{ColorScheme, Theme, parse_color};

/// Terminal appearance configuration.
///
/// Groups capabilities and color scheme together as they're both related to
/// how content is presented in the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub(crate) capabilities: Capabilities,
    pub(crate) colors: ColorScheme,
}

impl Appearance {
    /// Detect appearance settings from terminal environment
    #[must_use]
    pub fn detect() -> Self {
        Self {
            capabilities: Capabilities::detect(),
            colors: ColorScheme::for_theme(Theme::detect()),
        }
    }

    /// Plain ASCII output without escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self::with_capabilities(Capabilities::plain())
    }

    /// Use explicit capabilities with the dark color scheme.
    #[must_use]
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            colors: ColorScheme::dark(),
        }
    }

    /// The detected or configured capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::detect()
    }
}
