use std::io::Write;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::ascii::AsciiOptions;
use crate::document::{AnimationDocument, AnimationMeta, write_document, write_preview, write_status};
use crate::error::{AppError, Result};
use crate::frames::generate_frames;
use crate::preprocess::preprocess;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub options: AsciiOptions,
    pub meta: AnimationMeta,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineStats {
    pub frames_rendered: usize,
    pub width: u32,
    pub height: u32,
}

pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }

    let image = image::open(path)?.to_rgba8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Loads, preprocesses and renders the full animation without writing anything.
pub fn convert(config: &PipelineConfig) -> Result<AnimationDocument> {
    let source = load_image(&config.input)?;
    let prepared = preprocess(&source);
    let frames = generate_frames(&prepared, &config.options);
    log::info!("generated {} frames", frames.len());

    Ok(AnimationDocument {
        meta: config.meta.clone(),
        frames,
    })
}

/// Runs the conversion, writing the document to `output` and the status
/// line plus first-frame preview to `diagnostics`.
pub fn run<O: Write, D: Write>(
    config: &PipelineConfig,
    output: &mut O,
    diagnostics: &mut D,
) -> Result<PipelineStats> {
    let options = &config.options;
    write_status(
        diagnostics,
        &config.input,
        options.width,
        options.height,
        options.mode(),
    )?;

    let document = convert(config)?;
    write_document(output, &document)?;

    if let Some(first) = document.frames.first() {
        write_preview(diagnostics, first)?;
    }

    Ok(PipelineStats {
        frames_rendered: document.frames.len(),
        width: options.width,
        height: options.height,
    })
}
