use crate::stroke::{MutableStroke, StrokeRef};
use egui::{Color32, Painter, Pos2, Rect};

/// Paint the committed strokes plus the in-progress preview onto the widget
/// rect. The painter is already clipped to the rect by the widget.
pub fn paint_canvas(
    painter: &Painter,
    rect: Rect,
    strokes: &[StrokeRef],
    preview: Option<&MutableStroke>,
) {
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    for stroke in strokes {
        paint_points(painter, stroke.points(), stroke.color(), stroke.width());
    }

    if let Some(stroke) = preview {
        paint_points(painter, stroke.points(), stroke.color(), stroke.width());
    }
}

fn paint_points(painter: &Painter, points: &[Pos2], color: Color32, width: f32) {
    // A tap without movement shows as a dot
    if points.len() == 1 {
        painter.circle_filled(points[0], width / 2.0, color);
        return;
    }

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(width, color));
    }
}
