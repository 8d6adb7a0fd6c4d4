/// Fade-in of a newly shown slide
///
/// Each new slide ramps from transparent (black background showing through)
/// to fully opaque over `FADE_DURATION`.

use std::time::Duration;

use iced::time::Instant;

/// How long a new slide takes to become fully opaque
pub const FADE_DURATION: Duration = Duration::from_secs(1);

/// Redraw rate while a fade is running
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Opacity after `elapsed` time since the slide appeared, in `0.0..=1.0`
pub fn opacity_after(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct Fade {
    started: Instant,
    now: Instant,
}

impl Fade {
    pub fn start(at: Instant) -> Self {
        Fade { started: at, now: at }
    }

    /// Move the animation clock forward. Older instants are ignored.
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn opacity(&self) -> f32 {
        opacity_after(self.now.saturating_duration_since(self.started))
    }

    pub fn is_running(&self) -> bool {
        self.opacity() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_ramp() {
        assert_eq!(opacity_after(Duration::ZERO), 0.0);
        assert!((opacity_after(Duration::from_millis(250)) - 0.25).abs() < 1e-6);
        assert!((opacity_after(Duration::from_millis(500)) - 0.5).abs() < 1e-6);
        assert_eq!(opacity_after(FADE_DURATION), 1.0);
        assert_eq!(opacity_after(Duration::from_secs(7)), 1.0);
    }

    #[test]
    fn test_fade_runs_until_opaque() {
        let start = Instant::now();
        let mut fade = Fade::start(start);
        assert_eq!(fade.opacity(), 0.0);
        assert!(fade.is_running());

        fade.advance(start + Duration::from_millis(600));
        assert!((fade.opacity() - 0.6).abs() < 1e-6);
        assert!(fade.is_running());

        fade.advance(start + FADE_DURATION);
        assert_eq!(fade.opacity(), 1.0);
        assert!(!fade.is_running());
    }

    #[test]
    fn test_fade_ignores_earlier_instants() {
        let start = Instant::now();
        let mut fade = Fade::start(start);
        fade.advance(start + Duration::from_millis(800));
        fade.advance(start + Duration::from_millis(100));
        assert!((fade.opacity() - 0.8).abs() < 1e-6);
    }
}
