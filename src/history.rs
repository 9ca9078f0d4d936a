use crate::document::Document;
use crate::stroke::StrokeRef;

/// Manages the linear undo/redo history over a [`Document`].
///
/// The document's stroke sequence doubles as the undo stack; only the redo
/// buffer lives here. The redo buffer is non-empty only between an undo and
/// the next draw or clear.
#[derive(Default)]
pub struct StrokeHistory {
    /// Strokes removed via undo, most recent last
    redo_stack: Vec<StrokeRef>,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            redo_stack: Vec::new(),
        }
    }

    /// Undo the most recent stroke. Returns false if there is nothing to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        if let Some(stroke) = document.remove_last_stroke() {
            self.redo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// Redo the most recently undone stroke. Returns false if the redo buffer
    /// is empty.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        if let Some(stroke) = self.redo_stack.pop() {
            document.add_stroke(stroke);
            true
        } else {
            false
        }
    }

    /// Drop all redoable strokes. Called whenever a new stroke is drawn, since
    /// the history is linear, not a tree.
    pub fn invalidate(&mut self) {
        self.redo_stack.clear();
    }

    /// Clear the history (canvas clear)
    pub fn clear(&mut self) {
        self.redo_stack.clear();
    }

    /// Returns true if there are strokes that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
