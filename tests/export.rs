use eframe_whiteboard::{CancelToken, CanvasEvent, EventHandler, Stroke, WhiteboardCanvas};
use egui::{Color32, Pos2, Vec2};
use futures::executor::block_on;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("eframe_whiteboard_{}_{}", name, std::process::id()))
}

// Canvas with a known size and one diagonal red stroke
fn canvas_with_stroke() -> WhiteboardCanvas {
    let mut canvas = WhiteboardCanvas::new();
    canvas.set_canvas_size(Vec2::new(64.0, 48.0));
    let points = vec![Pos2::new(10.0, 10.0), Pos2::new(30.0, 30.0)];
    canvas.stroke_completed(Stroke::new_ref(Color32::RED, 6.0, points));
    canvas
}

struct SaveRecorder {
    events: Arc<Mutex<Vec<CanvasEvent>>>,
}

impl EventHandler for SaveRecorder {
    fn handle_event(&mut self, event: &CanvasEvent) {
        if matches!(event, CanvasEvent::SaveCompleted { .. }) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}

fn record_saves(canvas: &WhiteboardCanvas) -> Arc<Mutex<Vec<CanvasEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    canvas.subscribe(Box::new(SaveRecorder {
        events: events.clone(),
    }));
    events
}

fn last_save_error(events: &Arc<Mutex<Vec<CanvasEvent>>>) -> Option<String> {
    let events = events.lock().unwrap();
    match events.last() {
        Some(CanvasEvent::SaveCompleted { error, .. }) => error.clone(),
        _ => panic!("no SaveCompleted event recorded"),
    }
}

#[test]
fn test_save_on_empty_canvas_fails_without_io() {
    let canvas = WhiteboardCanvas::new();
    let events = record_saves(&canvas);
    let path = scratch_dir("empty").join("nothing.png");
    let cancel = CancelToken::new();

    assert!(!block_on(canvas.save_to_path(&path, &cancel)));

    // The fixed reason is reported and nothing touches the filesystem
    assert_eq!(last_save_error(&events).as_deref(), Some("Nothing to save"));
    assert!(!path.exists());
    assert!(!path.parent().unwrap().exists());
}

#[test]
fn test_save_writes_decodable_image_and_creates_directories() {
    let canvas = canvas_with_stroke();
    let events = record_saves(&canvas);
    let path = scratch_dir("to_path").join("nested").join("drawing.png");
    let cancel = CancelToken::new();

    assert!(block_on(canvas.save_to_path(&path, &cancel)));

    let image = image::open(&path).expect("saved file is not a readable image");
    let image = image.to_rgba8();
    assert_eq!(image.dimensions(), (64, 48));
    // The stroke midpoint is red, a far corner stays white
    assert_eq!(image.get_pixel(20, 20).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(60, 5).0, [255, 255, 255, 255]);

    let events = events.lock().unwrap();
    match events.last() {
        Some(CanvasEvent::SaveCompleted {
            path: reported,
            success,
            error,
        }) => {
            assert_eq!(reported, &path);
            assert!(success);
            assert!(error.is_none());
        }
        other => panic!("expected SaveCompleted, got {other:?}"),
    }
}

#[test]
fn test_save_to_writer_streams_a_png() {
    let canvas = canvas_with_stroke();
    let cancel = CancelToken::new();
    let mut sink: Vec<u8> = Vec::new();
    let label = PathBuf::from("in-memory.png");

    assert!(block_on(canvas.save_to_writer(&mut sink, &label, &cancel)));

    let image = image::load_from_memory(&sink).expect("sink does not hold a readable image");
    assert_eq!(image.to_rgba8().dimensions(), (64, 48));
}

#[test]
fn test_save_to_writer_on_empty_canvas_writes_nothing() {
    let canvas = WhiteboardCanvas::new();
    let events = record_saves(&canvas);
    let cancel = CancelToken::new();
    let mut sink: Vec<u8> = Vec::new();

    assert!(!block_on(canvas.save_to_writer(
        &mut sink,
        &PathBuf::from("in-memory.png"),
        &cancel
    )));

    assert!(sink.is_empty());
    assert_eq!(last_save_error(&events).as_deref(), Some("Nothing to save"));
}

#[test]
fn test_cancelled_save_aborts_before_writing() {
    let canvas = canvas_with_stroke();
    let events = record_saves(&canvas);
    let path = scratch_dir("cancelled").join("drawing.png");
    let cancel = CancelToken::new();
    cancel.cancel();

    assert!(!block_on(canvas.save_to_path(&path, &cancel)));

    assert!(!path.exists());
    assert_eq!(last_save_error(&events).as_deref(), Some("Save cancelled"));
}

#[test]
fn test_io_failure_surfaces_the_error_message() {
    let canvas = canvas_with_stroke();
    let events = record_saves(&canvas);

    // A file where the parent directory should be forces a create_dir_all error
    let blocker = scratch_dir("io_failure");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"in the way").unwrap();
    let path = blocker.join("drawing.png");
    let cancel = CancelToken::new();

    assert!(!block_on(canvas.save_to_path(&path, &cancel)));

    let error = last_save_error(&events).expect("failure must carry a reason");
    assert!(error.starts_with("Failed to write image:"), "got: {error}");

    // The canvas stays usable after a failed save
    assert_eq!(canvas.stroke_count(), 1);
}
