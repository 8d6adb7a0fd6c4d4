/// Image decoding module
///
/// Turns a picked JPEG path into a `Slide` off the UI thread.

pub mod loader;
