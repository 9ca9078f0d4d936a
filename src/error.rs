use thiserror::Error;

/// Errors that can occur while saving the canvas to an image.
///
/// All of these are caught at the save boundary and surfaced through the
/// save-completed notification; none of them poison the canvas.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Save was attempted with zero strokes on the canvas
    #[error("Nothing to save")]
    EmptyCanvas,

    /// The caller cancelled the save before it finished
    #[error("Save cancelled")]
    Cancelled,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for save operations
pub type SaveResult<T> = Result<T, SaveError>;
