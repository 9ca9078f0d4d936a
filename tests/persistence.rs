use eframe_whiteboard::canvas::CanvasStyle;
use eframe_whiteboard::persistence::CanvasSnapshot;
use eframe_whiteboard::{Stroke, WhiteboardCanvas};
use egui::{Color32, Pos2};
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("eframe_whiteboard_{}_{}", name, std::process::id()))
        .join("snapshot.json")
}

fn sample_canvas() -> WhiteboardCanvas {
    let mut canvas = WhiteboardCanvas::new();
    canvas.set_style(CanvasStyle {
        line_color: Color32::BLUE,
        line_width: 2.0,
    });
    canvas.stroke_completed(Stroke::new_ref(
        Color32::BLUE,
        2.0,
        vec![Pos2::new(1.0, 1.0), Pos2::new(5.0, 9.0)],
    ));
    canvas.stroke_completed(Stroke::new_ref(
        Color32::GREEN,
        4.0,
        vec![Pos2::new(3.0, 3.0)],
    ));
    canvas
}

#[test]
fn test_snapshot_roundtrips_through_a_file() {
    let canvas = sample_canvas();
    let path = scratch_file("roundtrip");

    let snapshot = CanvasSnapshot::from_canvas(&canvas);
    snapshot.save_to_file(&path).expect("failed to save snapshot");

    let restored = CanvasSnapshot::load_from_file(&path).expect("failed to load snapshot");
    let mut target = WhiteboardCanvas::new();
    restored.restore(&mut target);

    assert_eq!(target.stroke_count(), 2);
    let strokes = target.document().strokes();
    assert_eq!(
        strokes[0].points(),
        &[Pos2::new(1.0, 1.0), Pos2::new(5.0, 9.0)]
    );
    assert_eq!(strokes[0].color(), Color32::BLUE);
    assert_eq!(strokes[1].points(), &[Pos2::new(3.0, 3.0)]);
    assert_eq!(strokes[1].width(), 4.0);
    assert_eq!(target.style().line_color, Color32::BLUE);
    assert_eq!(target.style().line_width, 2.0);
}

#[test]
fn test_restore_invalidates_pending_redo() {
    let mut target = WhiteboardCanvas::new();
    target.stroke_completed(Stroke::new_ref(
        Color32::BLACK,
        5.0,
        vec![Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)],
    ));
    assert!(target.undo());
    assert!(target.can_redo());

    CanvasSnapshot::from_canvas(&sample_canvas()).restore(&mut target);

    // Restoring is new drawing as far as the history is concerned
    assert!(!target.can_redo());
    assert_eq!(target.stroke_count(), 2);
}

#[test]
fn test_snapshot_does_not_capture_the_redo_buffer() {
    let mut canvas = sample_canvas();
    assert!(canvas.undo());

    let snapshot = CanvasSnapshot::from_canvas(&canvas);
    assert_eq!(snapshot.strokes.len(), 1);
}
