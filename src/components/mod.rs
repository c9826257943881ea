pub mod app;
pub mod range_slider;

pub use app::App;
