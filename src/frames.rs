use image::RgbaImage;

use crate::ascii::{AsciiOptions, Frame, render_frame};
use crate::enhance::{adjust_brightness, adjust_contrast};

/// Brightness multipliers for one breathing cycle: dim, mid, bright, bright, mid, dim.
pub const PULSE_LEVELS: [f32; 6] = [1.0, 1.08, 1.15, 1.15, 1.08, 1.0];

/// Share of the brightness boost that is also applied as extra contrast,
/// so brighter frames do not wash out.
const PULSE_CONTRAST_SHARE: f32 = 0.3;

pub fn pulse_contrast(level: f32) -> f32 {
    1.0 + (level - 1.0) * PULSE_CONTRAST_SHARE
}

/// Renders one frame per entry of [`PULSE_LEVELS`], in order.
pub fn generate_frames(base: &RgbaImage, options: &AsciiOptions) -> Vec<Frame> {
    PULSE_LEVELS
        .iter()
        .enumerate()
        .map(|(index, &level)| {
            log::debug!("rendering frame {index} at pulse level {level}");
            let adjusted = pulse_image(base, level);
            render_frame(&adjusted, options)
        })
        .collect()
}

pub fn pulse_image(base: &RgbaImage, level: f32) -> RgbaImage {
    let mut adjusted = base.clone();
    adjust_brightness(&mut adjusted, level);
    if level > 1.0 {
        adjust_contrast(&mut adjusted, pulse_contrast(level));
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RAMP;
    use image::Rgba;

    #[test]
    fn breathing_cycle_is_symmetric() {
        let mut reversed = PULSE_LEVELS;
        reversed.reverse();
        assert_eq!(PULSE_LEVELS, reversed);
    }

    #[test]
    fn contrast_grows_with_level() {
        assert_eq!(pulse_contrast(1.0), 1.0);
        assert!((pulse_contrast(1.15) - 1.045).abs() < 1e-6);
        assert!(pulse_contrast(1.15) > pulse_contrast(1.08));
    }

    #[test]
    fn unit_level_leaves_image_untouched() {
        let base = RgbaImage::from_pixel(4, 4, Rgba([77, 77, 77, 255]));
        assert_eq!(pulse_image(&base, 1.0), base);
    }

    #[test]
    fn brighter_levels_raise_pixels() {
        let base = RgbaImage::from_pixel(4, 4, Rgba([100, 100, 100, 255]));
        let bright = pulse_image(&base, 1.15);
        assert_eq!(bright.get_pixel(0, 0).0[0], 115);
        assert_eq!(base.get_pixel(0, 0).0[0], 100);
    }

    #[test]
    fn produces_six_frames_of_equal_size() {
        let mut base = RgbaImage::from_pixel(40, 30, Rgba([30, 30, 30, 255]));
        base.put_pixel(20, 15, Rgba([250, 250, 250, 255]));
        let frames = generate_frames(&base, &AsciiOptions::new(12, 5));

        assert_eq!(frames.len(), PULSE_LEVELS.len());
        for frame in &frames {
            assert_eq!(frame.height(), 5);
            assert_eq!(frame.width(), 12);
            assert!(frame.rows().iter().all(|row| row.len() == 12));
        }
    }

    #[test]
    fn mid_gray_unit_frames_use_middle_of_ramp() {
        let base = RgbaImage::from_pixel(4, 4, Rgba([128, 128, 128, 255]));
        let frames = generate_frames(&base, &AsciiOptions::new(4, 2));
        let expected = RAMP.as_bytes()[34] as char;

        for index in [0, 5] {
            for row in frames[index].rows() {
                assert!(row.chars().all(|c| c == expected), "frame {index}: {row:?}");
            }
        }
        assert_eq!(frames[0], frames[5]);
        assert_eq!(frames[1], frames[4]);
    }
}
