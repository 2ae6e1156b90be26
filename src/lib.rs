pub mod app;
pub mod charts;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use dataset::{load_dataset, parse_dataset, resolve_data_path};
pub use errors::LoadError;
pub use state::AppState;
