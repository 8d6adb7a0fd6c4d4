/// Rendering: the fullscreen slide canvas and its fade-in

pub mod canvas;
pub mod fade;
