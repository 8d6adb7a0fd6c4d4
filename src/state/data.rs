/// Shared data structures for the display state
///
/// These structs represent what flows between the loader and the renderer.

use iced::widget::image::Handle;
use std::path::PathBuf;

use crate::fit::Size;

/// A decoded image ready to draw
#[derive(Debug, Clone)]
pub struct Slide {
    /// Full path of the source JPEG
    pub path: PathBuf,
    /// RGBA pixels uploaded lazily by the renderer
    pub handle: Handle,
    /// Natural width in pixels
    pub width: u32,
    /// Natural height in pixels
    pub height: u32,
}

impl Slide {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// What the screen is currently showing
#[derive(Debug, Clone, Default)]
pub enum Display {
    /// No image has decoded successfully yet
    #[default]
    Loading,
    /// The most recent successfully decoded image
    Showing(Slide),
}

impl Display {
    pub fn slide(&self) -> Option<&Slide> {
        match self {
            Display::Loading => None,
            Display::Showing(slide) => Some(slide),
        }
    }

    /// Replace the current slide. There is no way back to `Loading`.
    pub fn show(&mut self, slide: Slide) {
        *self = Display::Showing(slide);
    }
}
