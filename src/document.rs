use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::ascii::{Frame, RenderMode};
use crate::error::Result;

pub const DEFAULT_NAME: &str = "Oblivion Void Bearer";
pub const DEFAULT_AUTHOR: &str = "OblivionEngine";
pub const DEFAULT_FRAME_DELAY_MS: u32 = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationMeta {
    pub name: String,
    pub author: String,
    pub frame_delay_ms: u32,
}

impl Default for AnimationMeta {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationDocument {
    pub meta: AnimationMeta,
    pub frames: Vec<Frame>,
}

/// Serializes the whole document as indented JSON in one write.
pub fn write_document<W: Write>(writer: &mut W, document: &AnimationDocument) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(document)?;
    json.push(b'\n');
    writer.write_all(&json)?;
    writer.flush()?;
    Ok(())
}

pub fn write_status<W: Write>(
    writer: &mut W,
    input: &Path,
    width: u32,
    height: u32,
    mode: RenderMode,
) -> Result<()> {
    writeln!(
        writer,
        "Converting {} to {width}x{height} ASCII ({mode})...",
        input.display()
    )?;
    Ok(())
}

pub fn write_preview<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
    writeln!(writer, "\n--- Preview (Frame 1) ---")?;
    for row in frame.rows() {
        writeln!(writer, "{row}")?;
    }
    Ok(())
}
