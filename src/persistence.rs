use crate::canvas::{CanvasStyle, WhiteboardCanvas};
use crate::stroke::Stroke;
use crate::util::time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while saving or loading canvas snapshots
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A serializable snapshot of the canvas: committed strokes plus the current
/// style. The redo buffer is deliberately not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub strokes: Vec<Stroke>,
    pub style: CanvasStyle,
    /// Timestamp of when the snapshot was taken
    pub timestamp: u64,
    /// Version of the application when the snapshot was taken
    pub version: String,
}

impl CanvasSnapshot {
    /// Create a new snapshot from the current canvas
    pub fn from_canvas(canvas: &WhiteboardCanvas) -> Self {
        Self {
            strokes: canvas
                .document()
                .strokes()
                .iter()
                .map(|stroke| (**stroke).clone())
                .collect(),
            style: canvas.style(),
            timestamp: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Restore this snapshot into a canvas, replacing the stroke sequence and
    /// style. The redo buffer is invalidated like any other new drawing.
    pub fn restore(self, canvas: &mut WhiteboardCanvas) {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "snapshot was taken by version {}, current is {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        canvas.set_style(self.style);
        canvas.replace_strokes(self.strokes.into_iter().map(Arc::new).collect());
    }

    pub fn save_to_file(&self, path: &Path) -> PersistenceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> PersistenceResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
