use crate::stroke::StrokeRef;

/// The ordered stroke store backing the canvas. Append-only except for undo
/// (tail removal) and redo (tail re-append).
#[derive(Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn remove_last_stroke(&mut self) -> Option<StrokeRef> {
        self.strokes.pop()
    }

    /// Remove every stroke, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let previous = self.strokes.len();
        self.strokes.clear();
        previous
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
