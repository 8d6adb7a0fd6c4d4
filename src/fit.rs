/// Aspect-preserving image placement
///
/// Computes where an image should be drawn inside a region: shrunk (never
/// enlarged) until it fits, then centered.

use iced::Rectangle;

/// Width/height pair in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// True if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Destination rectangle in pixel coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Convert to an iced rectangle for drawing on a canvas frame
    pub fn to_iced(self) -> Rectangle {
        Rectangle {
            x: self.x as f32,
            y: self.y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

/// Fit `image` inside `region`.
///
/// The scale factor is `min(1, region.w / image.w, region.h / image.h)`, so
/// small images keep their natural size. The scaled image is centered using
/// truncating division. A side that would floor to zero is kept at one pixel,
/// so only a zero-sized image or region yields a zero-area rectangle, placed
/// at the region's centre.
pub fn fit_to(image: Size, region: Size) -> Rect {
    if image.is_empty() || region.is_empty() {
        return Rect {
            x: region.width / 2,
            y: region.height / 2,
            width: 0,
            height: 0,
        };
    }

    let (iw, ih) = (image.width as u64, image.height as u64);
    let (rw, rh) = (region.width as u64, region.height as u64);

    // Exact integer form of the scale: the limiting side takes the region's
    // full extent and the other side is floored, but never below one pixel.
    let (width, height) = if iw <= rw && ih <= rh {
        (iw, ih)
    } else if rw * ih <= rh * iw {
        (rw, (ih * rw / iw).max(1))
    } else {
        ((iw * rh / ih).max(1), rh)
    };
    let (width, height) = (width as u32, height as u32);

    Rect {
        x: (region.width - width) / 2,
        y: (region.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HD: Size = Size::new(1920, 1080);

    #[test]
    fn test_large_landscape_is_shrunk_and_centered() {
        let rect = fit_to(Size::new(4000, 2000), FULL_HD);
        assert_eq!(rect, Rect { x: 0, y: 60, width: 1920, height: 960 });
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let rect = fit_to(Size::new(100, 100), FULL_HD);
        assert_eq!(rect, Rect { x: 910, y: 490, width: 100, height: 100 });
    }

    #[test]
    fn test_tall_portrait_is_limited_by_height() {
        let rect = fit_to(Size::new(1000, 4000), FULL_HD);
        assert_eq!(rect.height, 1080);
        assert_eq!(rect.width, 270);
        assert_eq!(rect.x, (1920 - 270) / 2);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn test_exact_fit() {
        let rect = fit_to(FULL_HD, FULL_HD);
        assert_eq!(rect, Rect { x: 0, y: 0, width: 1920, height: 1080 });
    }

    #[test]
    fn test_zero_sizes_yield_zero_area() {
        let rect = fit_to(Size::new(0, 100), FULL_HD);
        assert_eq!((rect.width, rect.height), (0, 0));
        assert_eq!((rect.x, rect.y), (960, 540));

        let rect = fit_to(Size::new(100, 100), Size::new(0, 0));
        assert_eq!(rect, Rect::default());
    }

    #[test]
    fn test_result_always_inside_region() {
        let regions = [Size::new(1, 1), Size::new(7, 3), Size::new(1366, 768), FULL_HD];
        for region in regions {
            for w in [1, 2, 3, 99, 640, 1921, 5000, 12345] {
                for h in [1, 5, 480, 1079, 1081, 7777] {
                    let rect = fit_to(Size::new(w, h), region);
                    assert!(rect.width <= region.width, "{w}x{h} in {region:?}");
                    assert!(rect.height <= region.height, "{w}x{h} in {region:?}");
                    assert!(rect.x + rect.width <= region.width);
                    assert!(rect.y + rect.height <= region.height);
                }
            }
        }
    }

    #[test]
    fn test_thin_image_keeps_one_pixel_side() {
        let region = Size::new(1366, 768);
        let rect = fit_to(Size::new(1, 2830), region);
        assert_eq!(rect, Rect { x: 682, y: 0, width: 1, height: 768 });
        assert_eq!(fit_to(Size::new(rect.width, rect.height), region), rect);

        let rect = fit_to(Size::new(10000, 3), FULL_HD);
        assert_eq!(rect, Rect { x: 0, y: 539, width: 1920, height: 1 });
    }

    #[test]
    fn test_nonempty_inputs_never_give_zero_area() {
        for region in [Size::new(1920, 1080), Size::new(1366, 768)] {
            for w in [1, 2, 3, 7, 640, 1921, 4000] {
                for h in [1, 2, 3, 1000, 2830, 10000, 99999] {
                    let rect = fit_to(Size::new(w, h), region);
                    assert!(rect.width >= 1 && rect.height >= 1, "{w}x{h} in {region:?}");
                    let refit = fit_to(Size::new(rect.width, rect.height), region);
                    assert_eq!(refit, rect, "{w}x{h} in {region:?}");
                }
            }
        }
    }

    #[test]
    fn test_fitting_is_idempotent() {
        for (w, h) in [(4000, 2000), (100, 100), (333, 2999), (1921, 1081), (3, 10000)] {
            let first = fit_to(Size::new(w, h), FULL_HD);
            let second = fit_to(Size::new(first.width, first.height), FULL_HD);
            assert_eq!(first, second, "{w}x{h}");
        }
    }

    #[test]
    fn test_to_iced() {
        let rect = Rect { x: 0, y: 60, width: 1920, height: 960 }.to_iced();
        assert_eq!(rect, iced::Rectangle::new(iced::Point::new(0.0, 60.0), iced::Size::new(1920.0, 960.0)));
    }
}
