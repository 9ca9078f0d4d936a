#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod document;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod persistence;
pub mod raster;
pub mod renderer;
pub mod stroke;
pub mod util;
pub mod widget;

pub use app::WhiteboardApp;
pub use canvas::{CanvasStyle, WhiteboardCanvas};
pub use document::Document;
pub use error::{SaveError, SaveResult};
pub use event::{CanvasEvent, EventBus, EventHandler, HistorySnapshot};
pub use export::CancelToken;
pub use history::StrokeHistory;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
