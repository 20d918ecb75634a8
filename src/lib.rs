// Public library interface for integration tests and embedding.
pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod trace;
pub mod ui;

pub use app::App;
