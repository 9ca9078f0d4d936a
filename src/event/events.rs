use std::path::PathBuf;

/// Snapshot of the undo/redo state, emitted after every mutating operation.
/// A plain value with no behavior attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub can_undo: bool,
    pub can_redo: bool,
    pub stroke_count: usize,
    pub redo_count: usize,
}

#[derive(Debug, Clone)]
pub enum CanvasEvent {
    /// A user gesture finished and its stroke was committed
    StrokeDrawn { total_strokes: usize },
    /// The canvas was cleared; carries the stroke count before clearing
    CanvasCleared { previous_strokes: usize },
    /// Undo/redo availability or counts changed
    HistoryChanged(HistorySnapshot),
    /// A save attempt finished. `error` is a human-readable reason when
    /// `success` is false.
    SaveCompleted {
        path: PathBuf,
        success: bool,
        error: Option<String>,
    },
}
