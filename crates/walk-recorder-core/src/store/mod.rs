mod file_store;
mod memory_store;
mod state_store;

pub use {
    file_store::FileStore,
    memory_store::MemoryStore,
    state_store::{StateStore, StoredState},
};
