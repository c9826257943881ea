use log::LevelFilter;

mod components;
mod config;
mod model;
mod state;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    util::init_logging(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    yew::Renderer::<components::App>::new().render();
}
