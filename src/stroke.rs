use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Immutable stroke for sharing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Mutable stroke for the gesture in progress
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

// Reference-counted alias so the document and redo stack can share strokes
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    // Create a new reference-counted Stroke
    pub fn new_ref(color: Color32, width: f32, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(color, width, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl MutableStroke {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            width,
        }
    }

    // Add a point to the in-progress gesture
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    // Freeze into an immutable Stroke
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.width, self.points.clone())
    }

    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }

    // Points so far, for the live preview
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
