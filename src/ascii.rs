use image::imageops::{self, FilterType};
use image::{GrayImage, RgbaImage};
use serde::Serialize;

use crate::enhance::grayscale;

/// Characters from darkest-looking to brightest-looking.
pub const RAMP: &str = " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Silhouette bands: values below each threshold map to the paired ramp
/// position (in percent). Anything at or above the last threshold is the
/// densest character.
const SILHOUETTE_BANDS: [(u8, usize); 3] = [(50, 15), (80, 40), (120, 65)];
const SILHOUETTE_EMPTY_BELOW: u8 = 30;
const SILHOUETTE_BLUR_SIGMA: f32 = 1.0;

/// Largest accepted grid width or height, in characters.
pub const MAX_GRID_SIDE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiOptions {
    pub width: u32,
    pub height: u32,
    pub invert: bool,
    pub silhouette: bool,
}

impl AsciiOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(1, MAX_GRID_SIDE),
            height: height.clamp(1, MAX_GRID_SIDE),
            invert: false,
            silhouette: false,
        }
    }

    pub fn mode(&self) -> RenderMode {
        if self.silhouette {
            RenderMode::Silhouette
        } else if self.invert {
            RenderMode::Inverted
        } else {
            RenderMode::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Normal,
    Inverted,
    Silhouette,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RenderMode::Normal => "NORMAL",
            RenderMode::Inverted => "INVERTED",
            RenderMode::Silhouette => "SILHOUETTE",
        };
        f.write_str(name)
    }
}

/// One animation frame: a row of text per grid line, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frame(Vec<String>);

impl Frame {
    pub fn rows(&self) -> &[String] {
        &self.0
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Width in characters of the first row; every row shares it.
    pub fn width(&self) -> usize {
        self.0.first().map_or(0, |row| row.chars().count())
    }
}

impl From<Vec<String>> for Frame {
    fn from(rows: Vec<String>) -> Self {
        Self(rows)
    }
}

pub fn render_frame(source: &RgbaImage, options: &AsciiOptions) -> Frame {
    let (width, height) = (options.width, options.height);

    // Two passes: the tall intermediate compensates for character cells
    // being about twice as tall as they are wide.
    let tall = imageops::resize(source, width, height.saturating_mul(2), FilterType::Lanczos3);
    let fitted = imageops::resize(&tall, width, height, FilterType::Lanczos3);
    let gray = grayscale(&fitted);

    let rows = if options.silhouette {
        let blurred = imageops::blur(&gray, SILHOUETTE_BLUR_SIGMA);
        map_rows(&blurred, options.invert, silhouette_char)
    } else {
        map_rows(&gray, options.invert, |luma| map_luma_to_char(luma, RAMP))
    };

    Frame(rows)
}

fn map_rows(gray: &GrayImage, invert: bool, to_char: impl Fn(u8) -> char) -> Vec<String> {
    (0..gray.height())
        .map(|y| {
            (0..gray.width())
                .map(|x| {
                    let raw = gray.get_pixel(x, y)[0];
                    to_char(if invert { 255 - raw } else { raw })
                })
                .collect::<String>()
        })
        .collect()
}

pub fn luma_to_index(luma: u8, len: usize) -> usize {
    let last = len.saturating_sub(1);
    (luma as usize * last) / 255
}

pub fn map_luma_to_char(luma: u8, charset: &str) -> char {
    let len = charset.chars().count();
    charset
        .chars()
        .nth(luma_to_index(luma, len))
        .unwrap_or(' ')
}

/// Posterizes a blurred brightness into one of five characters.
pub fn silhouette_char(brightness: u8) -> char {
    if brightness < SILHOUETTE_EMPTY_BELOW {
        return ' ';
    }

    let len = RAMP.len();
    let index = SILHOUETTE_BANDS
        .iter()
        .find(|(below, _)| brightness < *below)
        .map_or(len - 1, |(_, percent)| len * percent / 100);
    RAMP.as_bytes()[index] as char
}

/// Every character [`silhouette_char`] can produce, for checking rendered output.
pub fn silhouette_chars() -> [char; 5] {
    [
        silhouette_char(0),
        silhouette_char(SILHOUETTE_EMPTY_BELOW),
        silhouette_char(SILHOUETTE_BANDS[0].0),
        silhouette_char(SILHOUETTE_BANDS[1].0),
        silhouette_char(SILHOUETTE_BANDS[2].0),
    ]
}
