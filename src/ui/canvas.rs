use iced::widget::canvas::{self, Program};
use iced::mouse::Cursor;
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme};

use crate::fit::{self, Size};
use crate::state::data::Slide;
use crate::Message;

/// Label shown until the first slide decodes
pub const PLACEHOLDER: &str = "Loading...";

/// Where the placeholder label is drawn
pub const PLACEHOLDER_POSITION: Point = Point::new(800.0, 600.0);

/// Draws the current slide centered on a black background
pub struct SlideCanvas<'a> {
    pub slide: Option<&'a Slide>,
    /// Slide opacity in `0.0..=1.0`, below one while fading in
    pub opacity: f32,
}

impl<'a> SlideCanvas<'a> {
    pub fn new(slide: Option<&'a Slide>, opacity: f32) -> Self {
        SlideCanvas { slide, opacity }
    }

    /// Destination rectangle of the slide for a canvas of the given bounds
    pub fn destination(&self, bounds: Rectangle) -> Option<Rectangle> {
        let slide = self.slide?;
        // Bounds come from the window on every draw, so a display change is
        // picked up on the next frame.
        let region = Size::new(bounds.width as u32, bounds.height as u32);
        Some(fit::fit_to(slide.size(), region).to_iced())
    }
}

impl Program<Message> for SlideCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        match (self.slide, self.destination(bounds)) {
            (Some(slide), Some(destination)) => {
                frame.draw_image(
                    destination,
                    canvas::Image::new(slide.handle.clone()).opacity(self.opacity),
                );
            }
            _ => {
                frame.fill_text(canvas::Text {
                    content: PLACEHOLDER.to_string(),
                    position: PLACEHOLDER_POSITION,
                    color: Color::WHITE,
                    size: Pixels(20.0),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
