use crate::document::Document;
use crate::event::{CanvasEvent, EventBus, EventHandler, HistorySnapshot};
use crate::export::{self, CancelToken};
use crate::history::StrokeHistory;
use crate::stroke::{MutableStroke, StrokeRef};
use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Line color and width applied to strokes as they are started. Plain fields;
/// the "apply" step is each new gesture sampling the current values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasStyle {
    pub line_color: Color32,
    pub line_width: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            line_color: Color32::BLACK,
            line_width: 5.0,
        }
    }
}

/// A drawing canvas with linear undo/redo history and image export.
///
/// Owns the stroke store, the redo buffer, and the event bus. All mutation is
/// expected on the UI thread; there is no internal locking.
pub struct WhiteboardCanvas {
    document: Document,
    history: StrokeHistory,
    events: EventBus,
    style: CanvasStyle,
    /// On-screen size recorded by the widget, used as the export size
    canvas_size: Vec2,
    /// The gesture currently being drawn, if any
    pub(crate) current_stroke: Option<MutableStroke>,
}

impl Default for WhiteboardCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl WhiteboardCanvas {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            history: StrokeHistory::new(),
            events: EventBus::new(),
            style: CanvasStyle::default(),
            canvas_size: Vec2::new(800.0, 600.0),
            current_stroke: None,
        }
    }

    /// Subscribe a handler to canvas notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Commit a finished gesture. Called by the widget when a drag ends; also
    /// the entry point for synthetic strokes in tests and tools.
    pub fn stroke_completed(&mut self, stroke: StrokeRef) {
        self.document.add_stroke(stroke);
        // New drawing forks nothing: the redo buffer is simply invalidated
        self.history.invalidate();
        log::debug!("stroke committed, {} total", self.document.stroke_count());
        self.events.emit(CanvasEvent::StrokeDrawn {
            total_strokes: self.document.stroke_count(),
        });
        self.notify_history_changed();
    }

    /// Undo the last stroke. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.undo(&mut self.document) {
            self.notify_history_changed();
            true
        } else {
            false
        }
    }

    /// Redo the last undone stroke. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.history.redo(&mut self.document) {
            self.notify_history_changed();
            true
        } else {
            false
        }
    }

    /// Remove every stroke and drop the redo buffer
    pub fn clear(&mut self) {
        let previous_strokes = self.document.clear();
        self.history.clear();
        log::info!("canvas cleared, {previous_strokes} strokes removed");
        self.events.emit(CanvasEvent::CanvasCleared { previous_strokes });
        self.notify_history_changed();
    }

    pub fn stroke_count(&self) -> usize {
        self.document.stroke_count()
    }

    pub fn can_undo(&self) -> bool {
        !self.document.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            stroke_count: self.document.stroke_count(),
            redo_count: self.history.redo_count(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the whole stroke sequence, e.g. when restoring a snapshot.
    /// Invalidates the redo buffer like any other new drawing.
    pub fn replace_strokes(&mut self, strokes: Vec<StrokeRef>) {
        self.document.clear();
        for stroke in strokes {
            self.document.add_stroke(stroke);
        }
        self.history.invalidate();
        self.notify_history_changed();
    }

    pub fn style(&self) -> CanvasStyle {
        self.style
    }

    pub fn set_style(&mut self, style: CanvasStyle) {
        self.style = style;
    }

    pub fn set_line_color(&mut self, color: Color32) {
        self.style.line_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.style.line_width = width;
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Record the on-screen canvas size; the widget calls this every frame
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
    }

    /// Save the canvas as an image file. Reports the outcome through the
    /// save-completed notification and the return value; a failed save leaves
    /// the canvas untouched and usable.
    pub async fn save_to_path(&self, path: &Path, cancel: &CancelToken) -> bool {
        let result =
            export::save_to_path(self.document.strokes(), self.export_size(), path, cancel).await;
        self.report_save(path, result)
    }

    /// Save the canvas as a PNG into a caller-supplied sink. `label` is the
    /// destination reported in the save-completed notification.
    pub async fn save_to_writer<W: Write>(
        &self,
        writer: &mut W,
        label: &Path,
        cancel: &CancelToken,
    ) -> bool {
        let result =
            export::save_to_writer(self.document.strokes(), self.export_size(), writer, cancel)
                .await;
        self.report_save(label, result)
    }

    fn export_size(&self) -> (u32, u32) {
        (
            self.canvas_size.x.max(1.0) as u32,
            self.canvas_size.y.max(1.0) as u32,
        )
    }

    fn report_save(&self, path: &Path, result: crate::error::SaveResult<()>) -> bool {
        match result {
            Ok(()) => {
                log::info!("drawing saved to {}", path.display());
                self.events.emit(CanvasEvent::SaveCompleted {
                    path: path.to_path_buf(),
                    success: true,
                    error: None,
                });
                true
            }
            Err(err) => {
                log::warn!("save to {} failed: {err}", path.display());
                self.events.emit(CanvasEvent::SaveCompleted {
                    path: path.to_path_buf(),
                    success: false,
                    error: Some(err.to_string()),
                });
                false
            }
        }
    }

    fn notify_history_changed(&self) {
        self.events.emit(CanvasEvent::HistoryChanged(self.snapshot()));
    }
}
