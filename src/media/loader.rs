/// Slide loader
///
/// Decodes a JPEG from disk into RGBA pixels wrapped in an iced image handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use iced::widget::image::Handle;
use tokio::task;
use tracing::debug;

use crate::error::{Result, SlideshowError};
use crate::state::data::Slide;

/// Load and decode the image at `path`
///
/// Decoding is CPU-bound, so it runs on tokio's blocking pool.
pub async fn load_slide(path: PathBuf) -> Result<Slide> {
    task::spawn_blocking(move || load_slide_blocking(&path))
        .await
        .map_err(|e| SlideshowError::Join(e.to_string()))?
}

/// Blocking implementation of slide loading
pub fn load_slide_blocking(path: &Path) -> Result<Slide> {
    let bytes = std::fs::read(path).map_err(|source| SlideshowError::Io {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;

    // Content sniffing rather than trusting the extension
    let decoded = image::load_from_memory(&bytes).map_err(|source| SlideshowError::Decode {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(SlideshowError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    debug!("📷 Decoded {}: {}x{}", path.display(), width, height);

    Ok(Slide {
        path: path.to_path_buf(),
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}
