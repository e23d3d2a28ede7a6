use platform::{Backend, MemoryStorage, SessionStorage, SessionStore};
use shared_types::{AppError, LatencyConfig, StartupPatch, UserPatch};
use std::sync::{Arc, Mutex};

/// Every fixture account email, startups first.
pub const FIXTURE_EMAILS: [&str; 8] = [
    "john@techinnovate.com",
    "sarah@healthwave.com",
    "carlos@greenlogistics.com",
    platform::fixtures::DEMO_STARTUP_EMAIL,
    "alex@innovatecapital.com",
    "jennifer@emergecapital.com",
    "robert@sustainfund.com",
    platform::fixtures::DEMO_INVESTOR_EMAIL,
];

pub fn backend() -> Backend {
    Backend::new(LatencyConfig::none())
}

/// Signed-out store over a fresh in-memory slot, with no simulated latency.
/// The returned storage shares the store's slot.
pub fn test_store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone(), backend());
    (store, storage)
}

/// Registration data as the sign-up wizard produces it.
pub fn registration(name: &str, email: &str) -> UserPatch {
    UserPatch {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone_number: Some("+1-555-010-0100".to_string()),
        startup: Some(StartupPatch {
            startup_name: Some("Nimbus Labs".to_string()),
            industry: Some(vec!["Fintech".to_string()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Slot whose writes can be switched to fail. Reads and clears go to an
/// inner memory slot.
#[derive(Clone, Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    fail_writes: Arc<Mutex<bool>>,
}

impl FlakyStorage {
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn inner(&self) -> &MemoryStorage {
        &self.inner
    }
}

impl SessionStorage for FlakyStorage {
    fn load(&self) -> Result<Option<String>, AppError> {
        self.inner.load()
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::storage("quota exceeded"));
        }
        self.inner.save(value)
    }

    fn clear(&self) -> Result<(), AppError> {
        self.inner.clear()
    }
}

/// Slot that cannot be read or written at all.
pub struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    fn load(&self) -> Result<Option<String>, AppError> {
        Err(AppError::storage("storage disabled"))
    }

    fn save(&self, _value: &str) -> Result<(), AppError> {
        Err(AppError::storage("storage disabled"))
    }

    fn clear(&self) -> Result<(), AppError> {
        Err(AppError::storage("storage disabled"))
    }
}
