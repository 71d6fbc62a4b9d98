//! Reading rendered icons back to check their geometry.

use image::{Rgba, RgbaImage};

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    /// The whole canvas.
    pub fn full(image: &RgbaImage) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: image.width().saturating_sub(1),
            y1: image.height().saturating_sub(1),
        }
    }

    /// The canvas minus `inset` pixels on every side.
    pub fn inset(image: &RgbaImage, inset: u32) -> Self {
        let full = Self::full(image);
        Self {
            x0: inset,
            y0: inset,
            x1: full.x1.saturating_sub(inset),
            y1: full.y1.saturating_sub(inset),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    /// Offset of this rectangle's center from the center of an `edge` square.
    pub fn center_offset(&self, edge: u32) -> (f32, f32) {
        let cx = (self.x0 + self.x1 + 1) as f32 / 2.0;
        let cy = (self.y0 + self.y1 + 1) as f32 / 2.0;
        let mid = edge as f32 / 2.0;
        (cx - mid, cy - mid)
    }
}

/// Bounding box of the pixels inside `region` that equal `color` exactly.
pub fn ink_bounds(image: &RgbaImage, region: PixelRect, color: Rgba<u8>) -> Option<PixelRect> {
    let mut found: Option<PixelRect> = None;

    for y in region.y0..=region.y1.min(image.height().saturating_sub(1)) {
        for x in region.x0..=region.x1.min(image.width().saturating_sub(1)) {
            if *image.get_pixel(x, y) != color {
                continue;
            }
            found = Some(match found {
                None => PixelRect { x0: x, y0: y, x1: x, y1: y },
                Some(rect) => PixelRect {
                    x0: rect.x0.min(x),
                    y0: rect.y0.min(y),
                    x1: rect.x1.max(x),
                    y1: rect.y1.max(y),
                },
            });
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_matches_only() {
        let mut image = RgbaImage::new(10, 10);
        let white = Rgba([255, 255, 255, 255]);
        image.put_pixel(2, 3, white);
        image.put_pixel(6, 5, white);
        image.put_pixel(8, 8, Rgba([255, 255, 255, 254]));

        let rect = ink_bounds(&image, PixelRect::full(&image), white).unwrap();
        assert_eq!(rect, PixelRect { x0: 2, y0: 3, x1: 6, y1: 5 });
        assert_eq!((rect.width(), rect.height()), (5, 3));
    }

    #[test]
    fn region_limits_the_search() {
        let mut image = RgbaImage::new(10, 10);
        let white = Rgba([255, 255, 255, 255]);
        image.put_pixel(0, 0, white);
        image.put_pixel(5, 5, white);

        let rect = ink_bounds(&image, PixelRect::inset(&image, 1), white).unwrap();
        assert_eq!(rect, PixelRect { x0: 5, y0: 5, x1: 5, y1: 5 });
        assert_eq!(ink_bounds(&image, PixelRect::inset(&image, 6), white), None);
    }

    #[test]
    fn center_offset_of_centered_box() {
        let rect = PixelRect { x0: 26, y0: 34, x1: 69, y1: 61 };
        assert_eq!(rect.center_offset(96), (0.0, 0.0));
    }
}
