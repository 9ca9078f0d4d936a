use crate::canvas::WhiteboardCanvas;
use crate::renderer;
use crate::stroke::MutableStroke;
use egui::{Response, Sense, Ui};

impl WhiteboardCanvas {
    /// Show the canvas, filling the available space.
    ///
    /// Pointer drags accumulate into the current stroke; releasing commits it
    /// through [`WhiteboardCanvas::stroke_completed`]. egui owns input capture
    /// and painting, this widget only wires the two to the stroke store.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::drag());
        let rect = response.rect;
        self.set_canvas_size(rect.size());

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let style = self.style();
                let mut stroke = MutableStroke::new(style.line_color, style.line_width);
                stroke.add_point(pos);
                self.current_stroke = Some(stroke);
            }
        } else if response.dragged() {
            if let (Some(stroke), Some(pos)) =
                (self.current_stroke.as_mut(), response.interact_pointer_pos())
            {
                stroke.add_point(pos);
            }
        }

        if response.drag_stopped() {
            if let Some(stroke) = self.current_stroke.take() {
                if !stroke.points().is_empty() {
                    self.stroke_completed(stroke.to_stroke_ref());
                }
            }
        }

        renderer::paint_canvas(
            &painter,
            rect,
            self.document().strokes(),
            self.current_stroke.as_ref(),
        );

        response
    }
}
