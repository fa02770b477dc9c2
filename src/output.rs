//! PNG encoding, atomic file writes, and the run summary.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use serde::Serialize;

use crate::error::CoverError;
use crate::theme;

/// Encode the canvas as PNG bytes.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, CoverError> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Temporary sibling used while writing `path`.
fn staging_path(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Write `data` to `path`, replacing any existing file.
///
/// The bytes go to a hidden sibling first and are renamed into place, so
/// `path` never holds a partial image.
///
/// # Errors
///
/// Returns an error if the directory is missing or not writable.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CoverError> {
    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, data).and_then(|()| std::fs::rename(&staging, path)) {
        let _ = std::fs::remove_file(&staging);
        return Err(CoverError::Io(e));
    }
    Ok(())
}

/// Encode the canvas and save it as PNG at `path`.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_png(canvas: &RgbImage, path: &Path) -> Result<(), CoverError> {
    let data = encode_png(canvas)?;
    write_atomic(path, &data)
}

/// What was generated and where it went.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Output file path, lossily converted for display.
    pub path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Theme description.
    pub theme: &'static str,
    /// Decorative elements drawn.
    pub elements: Vec<&'static str>,
}

impl Summary {
    /// Summary for a canvas written to `path`.
    #[must_use]
    pub fn new(path: &Path, canvas: &RgbImage) -> Self {
        Self {
            path: path.display().to_string(),
            width: canvas.width(),
            height: canvas.height(),
            theme: theme::THEME_NAME,
            elements: theme::ELEMENTS.to_vec(),
        }
    }

    /// Render as a single JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CoverError> {
        serde_json::to_string(self).map_err(|e| CoverError::Serialize(e.to_string()))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Generated placeholder: {}", self.path)?;
        writeln!(f, "  Size: {}x{}px", self.width, self.height)?;
        writeln!(f, "  Theme: {}", self.theme)?;
        write!(f, "  Elements: {}", self.elements.join(", "))
    }
}
