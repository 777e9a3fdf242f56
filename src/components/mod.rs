pub mod app;
pub mod weight_panel;

pub use app::App;
