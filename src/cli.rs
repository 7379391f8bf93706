use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::ascii::{AsciiOptions, MAX_GRID_SIDE};
use crate::document::{AnimationMeta, DEFAULT_AUTHOR, DEFAULT_FRAME_DELAY_MS, DEFAULT_NAME};
use crate::pipeline::PipelineConfig;

pub const USAGE: &str = "Usage: ascii-pulse <image_path> [width] [height] [--invert] [--silhouette]";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert a still image into pulsing ASCII-art animation frames"
)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,

    /// Number of ASCII columns per frame
    #[arg(default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GRID_SIDE)))]
    pub width: u32,

    /// Number of ASCII rows per frame
    #[arg(default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_GRID_SIDE)))]
    pub height: u32,

    /// Map bright pixels to sparse characters instead of dense ones
    #[arg(long)]
    pub invert: bool,

    /// Render a posterized silhouette with a thin gradient edge
    #[arg(long)]
    pub silhouette: bool,

    /// Write the animation to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Animation name stored in the metadata
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Animation author stored in the metadata
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Log level for internal diagnostics (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            options: AsciiOptions {
                invert: self.invert,
                silhouette: self.silhouette,
                ..AsciiOptions::new(self.width, self.height)
            },
            meta: AnimationMeta {
                name: self.name.clone(),
                author: self.author.clone(),
                frame_delay_ms: self.frame_delay,
            },
        }
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

/// True when parsing failed only because no image path was given.
pub fn is_missing_input(err: &clap::Error) -> bool {
    err.kind() == ErrorKind::MissingRequiredArgument
}
