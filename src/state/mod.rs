/// State management module
///
/// This module handles all slideshow state, including:
/// - The shared list of discovered images and the background scan (library.rs)
/// - Display data structures (data.rs)
/// - Random slide selection (picker.rs)

pub mod library;
pub mod data;
pub mod picker;
