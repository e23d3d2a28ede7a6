//! Client-side platform services: configuration, the mock backend with its
//! fixture directory, session persistence and the session store.

pub mod backend;
pub mod config;
pub mod fixtures;
pub mod latency;
pub mod session;
pub mod stats;
pub mod storage;

pub use backend::Backend;
pub use config::load_config;
pub use session::{Session, SessionStore};
pub use storage::{default_storage, DynStorage, MemoryStorage, SessionStorage};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
