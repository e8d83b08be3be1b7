//! Terminal renderer for Draft.js raw content.
//!
//! Builds a [`Node`] tree through the shared block dispatcher and writes it as
//! plain or ANSI-styled text.
//!
//! ```ignore
//! let content = draft_model::parse_file("post.json")?;
//! let processor = Processor::new(Options::default());
//! processor.write_to(&content, &mut std::io::stdout().lock())?;
//! ```

use std::io::{self, Write};

use draft_model::RawContentState;
use draft_renderers_core::{BlockRenderer, CustomBlockHandler, Options};

mod appearance;
mod embed;
mod error;
mod leaf;
mod node;
mod write;

pub use appearance::{Appearance, Capabilities};
pub use embed::EmbedHandler;
pub use error::Error;
pub use leaf::TerminalLeaf;
pub use node::{Node, Span, TextKind};

use write::NodeWriter;

/// Renders raw content to a terminal.
pub struct Processor {
    options: Options,
    appearance: Appearance,
    custom_block_handler: Option<Box<dyn CustomBlockHandler<Node>>>,
}

impl Processor {
    /// Create a processor, detecting the terminal appearance.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            appearance: Appearance::detect(),
            custom_block_handler: None,
        }
    }

    /// Override the detected appearance.
    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Render unrecognized block types with `handler` instead of skipping them.
    #[must_use]
    pub fn with_custom_block_handler<H>(mut self, handler: H) -> Self
    where
        H: CustomBlockHandler<Node> + 'static,
    {
        self.custom_block_handler = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build the node tree for `content`. `None` when it has no blocks.
    ///
    /// # Errors
    ///
    /// Returns an error when the dispatcher rejects the content (strict mode).
    pub fn render(&self, content: &RawContentState) -> Result<Option<Vec<Node>>, Error> {
        let leaf = TerminalLeaf;
        let embeds = EmbedHandler;
        let mut renderer = BlockRenderer::new(&leaf, &self.options).with_atomic_handler(&embeds);
        if let Some(handler) = self.custom_block_handler.as_deref() {
            renderer = renderer.with_custom_block_handler(handler);
        }
        Ok(renderer.render(content)?)
    }

    /// Render `content` and write it to `w`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or `w` can't be written to.
    pub fn write_to<W: Write>(&self, content: &RawContentState, w: &mut W) -> Result<(), Error> {
        let Some(nodes) = self.render(content)? else {
            return Ok(());
        };
        let writer = NodeWriter::new(&self.appearance);
        for node in &nodes {
            writer.write(w, node)?;
        }
        w.flush()?;
        Ok(())
    }

    /// Render `content` to standard output.
    ///
    /// # Errors
    ///
    /// Same as [`Processor::write_to`].
    pub fn print(&self, content: &RawContentState) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut writer = io::BufWriter::new(stdout.lock());
        self.write_to(content, &mut writer)
    }

    /// Render `content` into a string.
    ///
    /// # Errors
    ///
    /// Same as [`Processor::write_to`], plus invalid UTF-8 in the output.
    pub fn render_to_string(&self, content: &RawContentState) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.write_to(content, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
