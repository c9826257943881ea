// Browser helpers shared by the components.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MouseEvent, TouchEvent};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Horizontal client position of a mouse event or of the first touch point.
/// `None` for a touch event with no active touches (e.g. `touchend`).
pub fn pointer_client_x(event: &Event) -> Option<f64> {
    // Checked by name: `TouchEvent` is not defined in every desktop browser,
    // so an `instanceof` test could throw.
    if event.type_().starts_with("touch") {
        let touch = event.unchecked_ref::<TouchEvent>().touches().item(0)?;
        Some(touch.client_x() as f64)
    } else {
        event
            .dyn_ref::<MouseEvent>()
            .map(|e| e.client_x() as f64)
    }
}
