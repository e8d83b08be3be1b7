/// Errors returned by [`BlockRenderer::render`](crate::BlockRenderer::render).
///
/// The render pass is fail-soft by default; these are only produced when
/// [`Options::strict`](crate::Options::strict) is enabled.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// An atomic block was found but no atomic handler was configured.
    #[error("atomic block {key} cannot be rendered: no atomic handler configured")]
    MissingAtomicHandler {
        /// Key of the offending block.
        key: String,
    },
}
