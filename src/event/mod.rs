mod bus;
mod events;

pub use bus::EventBus;
pub use events::{CanvasEvent, HistorySnapshot};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &CanvasEvent);
}
