use image::{GrayImage, Luma, Rgba, RgbaImage};

/// 3x3 sharpen kernel, row-major, normalized by [`SHARPEN_SCALE`].
pub const SHARPEN_KERNEL: [i32; 9] = [-2, -2, -2, -2, 32, -2, -2, -2, -2];
pub const SHARPEN_SCALE: i32 = 16;

/// ITU-R 601 luma in 16.16 fixed point, rounded.
pub fn luma(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let weighted = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (weighted >> 16) as u8
}

pub fn grayscale(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y))])
    })
}

/// Mean luma over the whole image, rounded half up.
pub fn mean_luma(image: &RgbaImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }

    let sum: u64 = image.pixels().map(|p| u64::from(luma(p))).sum();
    ((2 * sum + count) / (2 * count)) as u8
}

/// Scales every color channel towards black (`factor < 1`) or away from it.
pub fn adjust_brightness(image: &mut RgbaImage, factor: f32) {
    blend_channels(image, |c| c * factor);
}

/// Scales every color channel around the image's mean luma.
pub fn adjust_contrast(image: &mut RgbaImage, factor: f32) {
    let mean = f32::from(mean_luma(image));
    blend_channels(image, |c| mean + factor * (c - mean));
}

/// Applies [`SHARPEN_KERNEL`] to the color channels. Border pixels are copied.
pub fn sharpen(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut output = image.clone();
    if width < 3 || height < 3 {
        return output;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sums = [0i32; 3];
            for (i, weight) in SHARPEN_KERNEL.iter().enumerate() {
                let sx = x + i as u32 % 3 - 1;
                let sy = y + i as u32 / 3 - 1;
                let sample = image.get_pixel(sx, sy);
                for (sum, value) in sums.iter_mut().zip(sample.0) {
                    *sum += weight * i32::from(value);
                }
            }

            let target = output.get_pixel_mut(x, y);
            for (channel, sum) in target.0.iter_mut().zip(sums) {
                *channel = to_channel(sum as f32 / SHARPEN_SCALE as f32);
            }
        }
    }

    output
}

// Alpha is left alone.
fn blend_channels(image: &mut RgbaImage, blend: impl Fn(f32) -> f32) {
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            *channel = to_channel(blend(f32::from(*channel)));
        }
    }
}

// Rounds to nearest; PIL's blend truncates, so results can sit one level higher.
fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    #[test]
    fn luma_of_gray_is_identity() {
        for value in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(luma(&Rgba([value, value, value, 255])), value);
        }
    }

    #[test]
    fn luma_weights_green_highest() {
        let red = luma(&Rgba([255, 0, 0, 255]));
        let green = luma(&Rgba([0, 255, 0, 255]));
        let blue = luma(&Rgba([0, 0, 255, 255]));
        assert!(green > red && red > blue);
        assert_eq!(red, 76);
    }

    #[test]
    fn unit_brightness_is_identity() {
        let mut image = gray(3, 3, 128);
        adjust_brightness(&mut image, 1.0);
        assert_eq!(image, gray(3, 3, 128));
    }

    #[test]
    fn brightness_scales_and_clamps() {
        let mut image = gray(2, 2, 100);
        image.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        adjust_brightness(&mut image, 1.15);

        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [115, 115, 115, 255]);
    }

    #[test]
    fn brightness_rounds_to_nearest() {
        let mut image = gray(1, 1, 3);
        adjust_brightness(&mut image, 1.5);
        assert_eq!(image.get_pixel(0, 0).0[0], 5);
    }

    #[test]
    fn contrast_leaves_uniform_image_unchanged() {
        let mut image = gray(4, 4, 90);
        adjust_contrast(&mut image, 1.4);
        assert_eq!(image, gray(4, 4, 90));
    }

    #[test]
    fn contrast_spreads_values_around_mean() {
        let mut image = gray(2, 1, 100);
        image.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
        adjust_contrast(&mut image, 1.4);

        // mean 150
        assert_eq!(image.get_pixel(0, 0).0[0], 80);
        assert_eq!(image.get_pixel(1, 0).0[0], 220);
    }

    #[test]
    fn enhancements_preserve_alpha() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([40, 80, 120, 77]));
        adjust_brightness(&mut image, 1.5);
        adjust_contrast(&mut image, 2.0);
        let image = sharpen(&image);
        assert!(image.pixels().all(|p| p.0[3] == 77));
    }

    #[test]
    fn sharpen_keeps_uniform_image() {
        let image = gray(5, 5, 137);
        assert_eq!(sharpen(&image), image);
    }

    #[test]
    fn sharpen_amplifies_center_and_copies_border() {
        let mut image = gray(3, 3, 100);
        image.put_pixel(1, 1, Rgba([120, 120, 120, 255]));
        let sharpened = sharpen(&image);

        // (32 * 120 - 16 * 100) / 16 = 140
        assert_eq!(sharpened.get_pixel(1, 1).0[0], 140);
        assert_eq!(sharpened.get_pixel(0, 0).0[0], 100);
        assert_eq!(sharpened.get_pixel(2, 1).0[0], 100);
    }

    #[test]
    fn mean_luma_rounds_half_up() {
        let mut image = gray(2, 1, 10);
        image.put_pixel(1, 0, Rgba([11, 11, 11, 255]));
        assert_eq!(mean_luma(&image), 11);
        assert_eq!(mean_luma(&RgbaImage::new(0, 0)), 0);
    }
}
