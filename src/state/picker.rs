/// Random slide selection

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::library::ImageList;

/// Time between slide changes
pub const TICK_INTERVAL: Duration = Duration::from_millis(5000);

/// Chooses a uniformly random path from the image list.
///
/// One generator lives for the whole process.
#[derive(Debug)]
pub struct Picker<R = StdRng> {
    rng: R,
}

impl Default for Picker<StdRng> {
    /// Seed from OS entropy
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker<R> {
    pub fn with_rng(rng: R) -> Self {
        Picker { rng }
    }

    /// Pick one path from whatever has been discovered so far.
    /// Returns `None` while the list is still empty.
    pub fn pick(&mut self, list: &ImageList) -> Option<PathBuf> {
        let rng = &mut self.rng;
        list.with_snapshot(|paths| {
            if paths.is_empty() {
                return None;
            }
            let index = rng.gen_range(0..paths.len());
            Some(paths[index].clone())
        })
    }
}
