//! Session state and its persistence.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Session, SessionStore, UserInfo};

#[cfg(feature = "web")]
pub use storage::BrowserStorage;
