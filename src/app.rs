use crate::canvas::{CanvasStyle, WhiteboardCanvas};
use crate::event::{CanvasEvent, EventHandler};
use crate::export::CancelToken;
use crate::persistence::CanvasSnapshot;
use crate::util::time;
use egui::Color32;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const PALETTE: [(&str, Color32); 4] = [
    ("Black", Color32::BLACK),
    ("Red", Color32::RED),
    ("Blue", Color32::BLUE),
    ("Green", Color32::GREEN),
];

const WIDTH_PRESETS: [(&str, f32); 3] = [("Thin", 2.0), ("Medium", 5.0), ("Thick", 10.0)];

/// Storage key for the drawing itself, kept separate from the app state
const SNAPSHOT_KEY: &str = "whiteboard_snapshot";

/// Where saved drawings land. Resolved by the embedding application; the
/// canvas itself never picks platform paths.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SaveLocation {
    pub directory: PathBuf,
}

impl Default for SaveLocation {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("whiteboards"),
        }
    }
}

impl SaveLocation {
    /// Next timestamped destination inside the configured directory
    pub fn next_path(&self) -> PathBuf {
        self.directory
            .join(format!("whiteboard_{}.png", time::timestamp_secs()))
    }
}

#[derive(Clone, Debug)]
struct SaveStatus {
    path: PathBuf,
    success: bool,
    error: Option<String>,
}

/// Forwards save notifications into a slot the UI polls each frame
struct SaveStatusHandler {
    status: Arc<Mutex<Option<SaveStatus>>>,
}

impl EventHandler for SaveStatusHandler {
    fn handle_event(&mut self, event: &CanvasEvent) {
        if let CanvasEvent::SaveCompleted {
            path,
            success,
            error,
        } = event
        {
            if let Ok(mut slot) = self.status.lock() {
                *slot = Some(SaveStatus {
                    path: path.clone(),
                    success: *success,
                    error: error.clone(),
                });
            }
        }
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct WhiteboardApp {
    // The canvas holds the event bus and live strokes; the drawing itself is
    // persisted separately as a CanvasSnapshot
    #[serde(skip)]
    canvas: WhiteboardCanvas,
    style: CanvasStyle,
    save_location: SaveLocation,
    #[serde(skip)]
    save_status: Arc<Mutex<Option<SaveStatus>>>,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self {
            canvas: WhiteboardCanvas::new(),
            style: CanvasStyle::default(),
            save_location: SaveLocation::default(),
            save_status: Arc::new(Mutex::new(None)),
        }
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if let Some(snapshot) =
            cc.storage
                .and_then(|storage| eframe::get_value::<CanvasSnapshot>(storage, SNAPSHOT_KEY))
        {
            snapshot.restore(&mut app.canvas);
        }

        // Skipped fields come back as defaults, so wire them up here
        app.canvas.set_style(app.style);
        app.canvas.subscribe(Box::new(SaveStatusHandler {
            status: app.save_status.clone(),
        }));

        app
    }

    pub fn canvas(&self) -> &WhiteboardCanvas {
        &self.canvas
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (name, color) in PALETTE {
                let selected = self.style.line_color == color;
                if ui
                    .selectable_label(selected, egui::RichText::new(name).color(color))
                    .clicked()
                {
                    self.style.line_color = color;
                }
            }

            ui.separator();

            for (name, width) in WIDTH_PRESETS {
                let selected = self.style.line_width == width;
                if ui.selectable_label(selected, name).clicked() {
                    self.style.line_width = width;
                }
            }

            ui.separator();

            let snapshot = self.canvas.snapshot();
            if ui
                .add_enabled(snapshot.can_undo, egui::Button::new("Undo"))
                .clicked()
            {
                self.canvas.undo();
            }
            if ui
                .add_enabled(snapshot.can_redo, egui::Button::new("Redo"))
                .clicked()
            {
                self.canvas.redo();
            }
            if ui.button("Clear").clicked() {
                self.canvas.clear();
            }
            if ui.button("Save").clicked() {
                let path = self.save_location.next_path();
                let cancel = CancelToken::new();
                // Encoding a canvas-sized image is quick, so run it inline;
                // failures (including "Nothing to save") land in the status line
                let _ = futures::executor::block_on(self.canvas.save_to_path(&path, &cancel));
            }
        });

        // Apply style edits to the canvas when they change
        if self.style != self.canvas.style() {
            self.canvas.set_style(self.style);
        }
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        let status = self.save_status.lock().ok().and_then(|slot| slot.clone());
        match status {
            Some(status) if status.success => {
                ui.label(format!("Saved to {}", status.path.display()));
            }
            Some(status) => {
                ui.colored_label(
                    Color32::RED,
                    format!(
                        "Save failed: {}",
                        status.error.unwrap_or_else(|| "unknown error".to_owned())
                    ),
                );
            }
            None => {
                ui.label("Draw with the mouse or a touch screen.");
            }
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
        eframe::set_value(storage, SNAPSHOT_KEY, &CanvasSnapshot::from_canvas(&self.canvas));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status_line(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.ui(ui);
        });
    }
}
