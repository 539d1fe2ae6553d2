//! Session store adapters.

mod file_session_store;
mod in_memory;

pub use file_session_store::{FileSessionStore, DEFAULT_SESSION_FILE};
pub use in_memory::InMemorySessionStore;
