use crate::entry_store::EntryStore;
use crate::storage::FileStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<Mutex<EntryStore<FileStore>>>,
}

impl AppState {
    pub fn new(entries: EntryStore<FileStore>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}
