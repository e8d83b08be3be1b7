#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    FromUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] draft_renderers_core::Error),
}
