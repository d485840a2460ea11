pub mod app;
pub mod chart;
pub mod config;
pub mod emotes;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_document, persist_document};
