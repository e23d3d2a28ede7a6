use shared_types::{AppError, SessionConfig};
use std::sync::{Arc, Mutex};

// ── Trait ────────────────────────────────────────────────────────────

/// The single slot holding the serialized signed-in user.
pub trait SessionStorage {
    /// Raw slot contents; `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>, AppError>;

    fn save(&self, value: &str) -> Result<(), AppError>;

    /// Remove the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<(), AppError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Box<S> {
    fn load(&self) -> Result<Option<String>, AppError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        (**self).save(value)
    }

    fn clear(&self) -> Result<(), AppError> {
        (**self).clear()
    }
}

/// Storage picked at runtime by [`default_storage`].
pub type DynStorage = Box<dyn SessionStorage>;

// ── In-memory implementation ────────────────────────────────────────

/// Process-local slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(value.into()))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, AppError> {
        self.slot
            .lock()
            .map_err(|_| AppError::storage("memory slot poisoned"))
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.lock()? = None;
        Ok(())
    }
}

// ── File implementation ─────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::SessionStorage;
    use shared_types::AppError;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    /// Slot kept as `<dir>/<key>.json` for desktop and mobile builds.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
            Self {
                path: dir.into().join(format!("{key}.json")),
            }
        }

        pub fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl SessionStorage for FileStorage {
        fn load(&self) -> Result<Option<String>, AppError> {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(AppError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                ))),
            }
        }

        fn save(&self, value: &str) -> Result<(), AppError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::storage(format!("failed to create {}: {e}", parent.display()))
                })?;
            }
            std::fs::write(&self.path, value).map_err(|e| {
                AppError::storage(format!("failed to write {}: {e}", self.path.display()))
            })
        }

        fn clear(&self) -> Result<(), AppError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AppError::storage(format!(
                    "failed to remove {}: {e}",
                    self.path.display()
                ))),
            }
        }
    }
}

// ── Browser implementation ──────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::SessionStorage;
    use shared_types::AppError;

    /// `window.localStorage` under a fixed key.
    #[derive(Debug, Clone)]
    pub struct BrowserStorage {
        key: String,
    }

    impl BrowserStorage {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }

        fn storage(&self) -> Result<web_sys::Storage, AppError> {
            web_sys::window()
                .ok_or_else(|| AppError::storage("no browser window"))?
                .local_storage()
                .map_err(|_| AppError::storage("localStorage is not accessible"))?
                .ok_or_else(|| AppError::storage("localStorage is unavailable"))
        }
    }

    impl SessionStorage for BrowserStorage {
        fn load(&self) -> Result<Option<String>, AppError> {
            self.storage()?
                .get_item(&self.key)
                .map_err(|_| AppError::storage(format!("failed to read {}", self.key)))
        }

        fn save(&self, value: &str) -> Result<(), AppError> {
            self.storage()?
                .set_item(&self.key, value)
                .map_err(|_| AppError::storage(format!("failed to write {}", self.key)))
        }

        fn clear(&self) -> Result<(), AppError> {
            self.storage()?
                .remove_item(&self.key)
                .map_err(|_| AppError::storage(format!("failed to remove {}", self.key)))
        }
    }
}

/// Storage for the current target: `localStorage` in the browser, a file
/// when `file_dir` is configured, otherwise memory.
pub fn default_storage(config: &SessionConfig) -> DynStorage {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage::new(config.storage_key.clone()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match &config.file_dir {
            Some(dir) => Box::new(FileStorage::new(dir, &config.storage_key)),
            None => Box::new(MemoryStorage::new()),
        }
    }
}
