use image::RgbaImage;
use image::imageops;

use crate::enhance::{adjust_contrast, grayscale, sharpen};

pub const CROP_PADDING: u32 = 10;
pub const PREPROCESS_CONTRAST: f32 = 1.4;

/// Pixel-space box, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grows the box by `padding` on every side, clamped to `width` x `height`.
    pub fn padded(&self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }
}

/// Crop, contrast boost and sharpen, in that order.
pub fn preprocess(image: &RgbaImage) -> RgbaImage {
    let mut prepared = crop_to_content(image);
    adjust_contrast(&mut prepared, PREPROCESS_CONTRAST);
    sharpen(&prepared)
}

/// Bounding box of every pixel whose luma is not zero.
pub fn content_bounds(image: &RgbaImage) -> Option<Bounds> {
    let gray = grayscale(image);
    let mut bounds: Option<Bounds> = None;

    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel[0] == 0 {
            continue;
        }

        bounds = Some(match bounds {
            None => Bounds {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => Bounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bounds
}

pub fn crop_to_content(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    match content_bounds(image) {
        Some(bounds) => {
            let crop = bounds.padded(CROP_PADDING, width, height);
            log::info!(
                "cropping {width}x{height} to {}x{} at ({}, {})",
                crop.width(),
                crop.height(),
                crop.left,
                crop.top
            );
            imageops::crop_imm(image, crop.left, crop.top, crop.width(), crop.height()).to_image()
        }
        None => {
            log::info!("no content found, keeping full {width}x{height} image");
            image.clone()
        }
    }
}
