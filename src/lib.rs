pub mod app;
pub mod config;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod pattern;
pub mod state;
pub mod ui;
pub mod upstream;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use upstream::Upstream;
