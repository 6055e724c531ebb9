#[macro_use]
pub mod util;

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod modules;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::AppConfig;
