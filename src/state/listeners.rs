// Document-level move/end listeners for one drag session.
use gloo_events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use web_sys::{Document, Event};

const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
const END_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Keeps the move/end callbacks registered on the document for as long as it
/// lives; dropping it removes every one of them.
pub struct DocumentListeners {
    _listeners: Vec<EventListener>,
}

impl DocumentListeners {
    pub fn attach(
        document: &Document,
        on_move: impl Fn(&Event) + 'static,
        on_end: impl Fn(&Event) + 'static,
    ) -> Self {
        let on_move = Rc::new(on_move);
        let on_end = Rc::new(on_end);
        let mut listeners = Vec::with_capacity(MOVE_EVENTS.len() + END_EVENTS.len());
        for name in MOVE_EVENTS {
            let cb = on_move.clone();
            // not passive: a touch drag must be able to stop the page scrolling
            listeners.push(EventListener::new_with_options(
                document,
                name,
                EventListenerOptions::enable_prevent_default(),
                move |e| cb(e),
            ));
        }
        for name in END_EVENTS {
            let cb = on_end.clone();
            listeners.push(EventListener::new(document, name, move |e| cb(e)));
        }
        Self {
            _listeners: listeners,
        }
    }
}
