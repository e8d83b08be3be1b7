//! Core dispatcher shared by all draftr renderers.
//!
//! The raw content state is a *flat* list of blocks: list items of the same
//! kind are not grouped, nested items only carry a `depth`, and nothing marks
//! where a list ends. This crate walks that list once and rebuilds the
//! visual structure:
//!
//! - [`BlockRenderer`] - routes each block to the right leaf renderer
//! - [`ListCounters`] - numbering and run tracking for one pass
//! - [`LeafRenderer`], [`AtomicHandler`], [`CustomBlockHandler`] -
//!   capabilities supplied by concrete renderers and applications
//! - [`Options`] - configuration for a pass
//!
//! # Example
//!
//! ```ignore
//! use draft_renderers_core::{BlockRenderer, Options};
//!
//! let options = Options::builder().ordered_list_separator(")").build();
//! let nodes = BlockRenderer::new(&my_leaf_renderer, &options)
//!     .with_atomic_handler(&my_embed_handler)
//!     .render(&content_state)?;
//! ```
//!
//! # Modules
//!
//! - [`counter`] - list counter state
//! - [`style`] - caller style overrides

pub mod counter;
mod duration;
mod error;
mod handler;
mod key;
mod options;
mod render;
pub mod style;

pub use counter::{ListCounter, ListCounters};
pub use duration::PrettyDuration;
pub use error::Error;
pub use handler::{
    AtomicHandler, AtomicRender, BlockLeaf, CustomBlockHandler, LeafRenderer, ListIndicator,
    ListItemLeaf, RenderContext,
};
pub use key::NodeKey;
pub use options::{
    DEFAULT_DEPTH_MARGIN, DEFAULT_ORDERED_LIST_SEPARATOR, Navigate, Options, OptionsBuilder,
    TextProps,
};
pub use render::{BlockRenderer, list_margin};
pub use style::{CustomStyles, Style};
