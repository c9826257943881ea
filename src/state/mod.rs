pub mod controller;
pub mod drag;
pub mod listeners;

pub use controller::DragController;
pub use drag::{DragSession, Handle, Span, TrackGeometry};
pub use listeners::DocumentListeners;
