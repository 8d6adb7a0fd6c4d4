/// Error types for the slideshow

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors raised while loading slides or starting the slideshow.
///
/// Sources are kept behind `Arc` so the error can be cloned into iced messages.
#[derive(Debug, Clone, Error)]
pub enum SlideshowError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Arc<image::ImageError>,
    },

    #[error("{} decoded to an empty image", path.display())]
    EmptyImage { path: PathBuf },

    #[error("decode task failed: {0}")]
    Join(String),

    #[error("failed to start directory scan: {0}")]
    Thread(#[source] Arc<std::io::Error>),

    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, SlideshowError>;

impl From<iced::Error> for SlideshowError {
    fn from(err: iced::Error) -> Self {
        SlideshowError::Window(err.to_string())
    }
}
