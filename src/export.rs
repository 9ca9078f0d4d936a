use crate::error::{SaveError, SaveResult};
use crate::raster;
use crate::stroke::StrokeRef;
use image::{DynamicImage, ImageFormat};
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation signal for a pending save.
///
/// Clones share the same flag, so the caller keeps one clone and hands the
/// other to the save operation. Checked between the rasterize, encode, and
/// write phases; an already-started phase runs to completion.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn check(&self) -> SaveResult<()> {
        if self.is_cancelled() {
            Err(SaveError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Rasterize and encode the strokes at the given pixel size.
///
/// PNG keeps the RGBA buffer as-is; formats without alpha get an RGB copy.
fn encode(strokes: &[StrokeRef], size: (u32, u32), format: ImageFormat) -> SaveResult<Vec<u8>> {
    let image = raster::rasterize(strokes, size.0, size.1);
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);

    if format == ImageFormat::Png {
        image.write_to(&mut cursor, format)?;
    } else {
        DynamicImage::ImageRgba8(image).to_rgb8().write_to(&mut cursor, format)?;
    }

    Ok(bytes)
}

/// Encode the strokes and write them to `path`, creating parent directories
/// on demand. The image format is taken from the file extension, defaulting
/// to PNG.
pub async fn save_to_path(
    strokes: &[StrokeRef],
    size: (u32, u32),
    path: &Path,
    cancel: &CancelToken,
) -> SaveResult<()> {
    if strokes.is_empty() {
        return Err(SaveError::EmptyCanvas);
    }

    cancel.check()?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let bytes = encode(strokes, size, format)?;
    cancel.check()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &bytes)?;

    Ok(())
}

/// Encode the strokes as PNG and write the bytes to a caller-supplied sink.
pub async fn save_to_writer<W: Write>(
    strokes: &[StrokeRef],
    size: (u32, u32),
    writer: &mut W,
    cancel: &CancelToken,
) -> SaveResult<()> {
    if strokes.is_empty() {
        return Err(SaveError::EmptyCanvas);
    }

    cancel.check()?;
    let bytes = encode(strokes, size, ImageFormat::Png)?;
    cancel.check()?;

    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(())
}
