pub mod app;
pub mod config;
pub mod entry_store;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use entry_store::{EntryError, EntryStore};
pub use state::AppState;
pub use storage::{FileStore, MemoryStore, PersistenceStore};
